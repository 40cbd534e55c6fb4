//! Normalization boundary between decoded payloads and chart inputs.
//!
//! This is the single place where summary payloads become the ordered
//! labeled values the radial layout consumes.

use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::core::{Color, RingSlice};
use crate::error::{DashError, DashResult};
use crate::report::schema::{AttendanceSummary, EventSalesSummary};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> DashResult<f64> {
    value.to_f64().ok_or_else(|| {
        DashError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Revenue per category in first-seen order.
///
/// Duplicate categories are merged into the position where the category
/// first appeared, so chart ordering stays stable across refetches.
#[must_use]
pub fn category_revenue_totals(summary: &EventSalesSummary) -> IndexMap<String, Decimal> {
    let mut totals: IndexMap<String, Decimal> = IndexMap::new();
    for line in &summary.breakdown {
        *totals.entry(line.category.clone()).or_default() += line.revenue;
    }
    totals
}

/// Maps a sales summary to ring slices, one per category.
///
/// Slice `i` takes `palette[i % palette.len()]`.
pub fn revenue_slices(
    summary: &EventSalesSummary,
    palette: &[Color],
) -> DashResult<Vec<RingSlice>> {
    if palette.is_empty() {
        return Err(DashError::InvalidData(
            "color palette must not be empty".to_owned(),
        ));
    }

    let totals = category_revenue_totals(summary);
    debug!(
        event_id = %summary.event_id,
        line_count = summary.breakdown.len(),
        category_count = totals.len(),
        "normalize sales breakdown"
    );

    let mut slices = Vec::with_capacity(totals.len());
    for (index, (category, revenue)) in totals.into_iter().enumerate() {
        let value = decimal_to_f64(revenue, "revenue")?;
        slices.push(RingSlice::new(category, value, palette[index % palette.len()]));
    }

    Ok(slices)
}

/// Maps check-in progress to a two-slice ring.
#[must_use]
pub fn attendance_slices(
    summary: AttendanceSummary,
    checked_in_color: Color,
    pending_color: Color,
) -> Vec<RingSlice> {
    vec![
        RingSlice::new("Checked in", summary.checked_in as f64, checked_in_color),
        RingSlice::new("Pending", summary.pending as f64, pending_color),
    ]
}

/// The slice with the largest value, for the ring's center label.
///
/// The first occurrence wins ties; empty input yields `None`.
#[must_use]
pub fn dominant_slice(slices: &[RingSlice]) -> Option<&RingSlice> {
    slices
        .iter()
        .min_by_key(|slice| Reverse(OrderedFloat(slice.value)))
}
