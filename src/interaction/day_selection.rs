use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::DateRange;

/// Two-tap day-range selection state for a calendar grid.
///
/// Pure reducer: every transition returns a new value and the grid re-renders
/// from whatever comes back. Initial state has both endpoints unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaySelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DaySelection {
    /// Applies one tap on `day`.
    ///
    /// The first tap anchors the range start. A later tap strictly after the
    /// anchor completes the range. A tap at or before the anchor, or any tap
    /// once both endpoints are set, restarts the selection from `day`.
    #[must_use]
    pub fn tap(self, day: NaiveDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) if day > start => Self {
                start: Some(start),
                end: Some(day),
            },
            _ => Self {
                start: Some(day),
                end: None,
            },
        }
    }

    /// Drops both endpoints.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Projects the selection to an inclusive range.
    ///
    /// A start-only selection counts as a single-day range; `None` until the
    /// first tap lands.
    #[must_use]
    pub fn range(self) -> Option<DateRange> {
        let start = self.start?;
        let end = self.end.unwrap_or(start);
        // `end` is only ever set strictly after `start`, so ordering holds.
        DateRange::new(start, end).ok()
    }
}
