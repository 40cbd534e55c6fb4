use chrono::NaiveDate;
use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("invalid date range: start={start} follows end={end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
