//! Calendar arithmetic shared by the period resolver and the picker state.
//!
//! Month indices are zero-based (0 = January) throughout, matching the
//! quarter arithmetic `quarter = month0 / 3`. All helpers stay inside
//! chrono's representable year span and surface anything outside it as an
//! error instead of panicking.

use chrono::{Datelike, Days, NaiveDate};

use crate::core::DateRange;
use crate::error::{DashError, DashResult};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const QUARTERS_PER_YEAR: u32 = 4;
const MONTHS_PER_QUARTER: u32 = 3;

fn out_of_calendar_range(what: &str, year: i32) -> DashError {
    DashError::InvalidData(format!("{what} out of calendar range near year {year}"))
}

/// First day of the given month.
pub fn month_start(year: i32, month0: u32) -> DashResult<NaiveDate> {
    if month0 >= MONTHS_PER_YEAR {
        return Err(DashError::InvalidData(format!(
            "month index {month0} must be in [0, 11]"
        )));
    }

    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| out_of_calendar_range("month start", year))
}

/// Last day of the given month: one day before the first of the following
/// month, which handles every month length and leap years without a table.
pub fn month_end(year: i32, month0: u32) -> DashResult<NaiveDate> {
    let (next_year, next_month0) = if month0 + 1 >= MONTHS_PER_YEAR {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };

    month_start(next_year, next_month0)?
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| out_of_calendar_range("month end", year))
}

pub fn month_range(year: i32, month0: u32) -> DashResult<DateRange> {
    DateRange::new(month_start(year, month0)?, month_end(year, month0)?)
}

/// Quarter index (0..=3) containing a zero-based month.
#[must_use]
pub fn quarter_of_month(month0: u32) -> u32 {
    month0 / MONTHS_PER_QUARTER
}

pub fn quarter_range(year: i32, quarter: u32) -> DashResult<DateRange> {
    if quarter >= QUARTERS_PER_YEAR {
        return Err(DashError::InvalidData(format!(
            "quarter index {quarter} must be in [0, 3]"
        )));
    }

    let first_month0 = quarter * MONTHS_PER_QUARTER;
    DateRange::new(
        month_start(year, first_month0)?,
        month_end(year, first_month0 + MONTHS_PER_QUARTER - 1)?,
    )
}

pub fn year_range(year: i32) -> DashResult<DateRange> {
    DateRange::new(
        month_start(year, 0)?,
        month_end(year, MONTHS_PER_YEAR - 1)?,
    )
}

/// Sunday-based start of the week containing `day`.
pub fn week_start_sunday(day: NaiveDate) -> DashResult<NaiveDate> {
    let days_back = u64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_days(Days::new(days_back))
        .ok_or_else(|| out_of_calendar_range("week start", day.year()))
}

/// Seven-day inclusive week range containing `day`, Sunday through Saturday.
pub fn week_range_sunday(day: NaiveDate) -> DashResult<DateRange> {
    let start = week_start_sunday(day)?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| out_of_calendar_range("week end", day.year()))?;
    DateRange::new(start, end)
}
