//! Typed dashboard payloads and their normalization into chart inputs.

pub mod normalize;
pub mod schema;

pub use normalize::{
    attendance_slices, category_revenue_totals, decimal_to_f64, dominant_slice, revenue_slices,
};
pub use schema::{AttendanceSummary, EventSalesSummary, SalesBreakdown};
