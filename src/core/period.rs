use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::DateRange;
use crate::core::calendar::{self, QUARTERS_PER_YEAR, quarter_of_month};
use crate::error::{DashError, DashResult};

/// Symbolic reporting period selectable from dashboard filters.
///
/// Relative variants are resolved against a caller-supplied reference day,
/// keeping resolution deterministic and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
    /// Explicit single day picked from the calendar grid.
    CustomDay(NaiveDate),
}

/// Resolves a symbolic period to an inclusive date range.
///
/// `reference` is "today" for the relative variants. Weeks run Sunday through
/// Saturday. Repeated calls with the same inputs return identical ranges.
pub fn resolve_period(period: Period, reference: NaiveDate) -> DashResult<DateRange> {
    match period {
        Period::Today => Ok(DateRange::single_day(reference)),
        Period::Yesterday => {
            let day = reference
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| reference_out_of_range(reference))?;
            Ok(DateRange::single_day(day))
        }
        Period::ThisWeek => calendar::week_range_sunday(reference),
        Period::LastWeek => {
            let prior = reference
                .checked_sub_days(Days::new(7))
                .ok_or_else(|| reference_out_of_range(reference))?;
            calendar::week_range_sunday(prior)
        }
        Period::ThisMonth => calendar::month_range(reference.year(), reference.month0()),
        Period::LastMonth => {
            let (year, month0) = previous_month(reference.year(), reference.month0());
            calendar::month_range(year, month0)
        }
        Period::ThisQuarter => {
            calendar::quarter_range(reference.year(), quarter_of_month(reference.month0()))
        }
        Period::LastQuarter => {
            let (year, quarter) =
                previous_quarter(reference.year(), quarter_of_month(reference.month0()));
            calendar::quarter_range(year, quarter)
        }
        Period::ThisYear => calendar::year_range(reference.year()),
        Period::LastYear => calendar::year_range(reference.year() - 1),
        Period::CustomDay(day) => Ok(DateRange::single_day(day)),
    }
}

// Index rollback stays in [0, 11] / [0, 3] before any date construction.

fn previous_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

fn previous_quarter(year: i32, quarter: u32) -> (i32, u32) {
    if quarter == 0 {
        (year - 1, QUARTERS_PER_YEAR - 1)
    } else {
        (year, quarter - 1)
    }
}

fn reference_out_of_range(reference: NaiveDate) -> DashError {
    DashError::InvalidData(format!(
        "reference day {reference} is at the edge of the supported calendar range"
    ))
}
