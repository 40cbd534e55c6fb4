//! Typed summary payload schemas.
//!
//! Summary endpoints are decoded once into these shapes at the fetch
//! boundary; everything downstream works with typed fields instead of
//! probing optional keys.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-category sales line inside an event summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesBreakdown {
    pub category: String,
    pub tickets_sold: u64,
    pub revenue: Decimal,
}

/// Sales summary for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSalesSummary {
    pub event_id: String,
    /// ISO 4217 code the revenue figures are denominated in.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub breakdown: Vec<SalesBreakdown>,
    /// Day the summary was computed for, when the endpoint scopes by day.
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

/// Check-in progress for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub checked_in: u64,
    pub pending: u64,
}

impl AttendanceSummary {
    #[must_use]
    pub fn total(self) -> u64 {
        self.checked_in + self.pending
    }
}
