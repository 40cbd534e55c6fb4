use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::types::Color;
use crate::error::{DashError, DashResult};

/// One labeled value feeding a radial chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSlice {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl RingSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Deterministic stroke-dash geometry for one arc of a gapped ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub label: String,
    pub value: f64,
    pub color: Color,
    /// Arc length of the visible dash, in the same units as the radius.
    pub dash_length: f64,
    /// Cumulative arc length from the ring origin to the start of this dash.
    pub dash_offset: f64,
}

/// Projects labeled values into proportional gapped arcs.
///
/// Each slice receives a share of `circumference - gap_size * len` equal to
/// its share of the value total, and `gap_size` of arc is reserved after
/// every dash. Input order is preserved; callers pre-sort and pre-filter.
///
/// A zero value total (including all-zero inputs) produces zero-length
/// dashes so the ring renders as background only.
pub fn layout_ring_segments(
    slices: &[RingSlice],
    radius: f64,
    gap_size: f64,
) -> DashResult<Vec<RingSegment>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(DashError::InvalidData(
            "ring radius must be finite and > 0".to_owned(),
        ));
    }
    if !gap_size.is_finite() || gap_size < 0.0 {
        return Err(DashError::InvalidData(
            "ring gap size must be finite and >= 0".to_owned(),
        ));
    }

    if slices.is_empty() {
        return Ok(Vec::new());
    }

    let circumference = 2.0 * PI * radius;
    let total_gap = gap_size * slices.len() as f64;
    let total: f64 = slices.iter().map(|slice| slice.value).sum();

    let mut segments = Vec::with_capacity(slices.len());
    let mut current_offset = 0.0;
    for slice in slices {
        let percentage = if total > 0.0 { slice.value / total } else { 0.0 };
        // The clamp only guards floating-point underflow; non-negative inputs
        // cannot produce a negative share otherwise.
        let dash_length = ((circumference - total_gap) * percentage).max(0.0);

        segments.push(RingSegment {
            label: slice.label.clone(),
            value: slice.value,
            color: slice.color,
            dash_length,
            dash_offset: current_offset,
        });
        current_offset += dash_length + gap_size;
    }

    Ok(segments)
}
