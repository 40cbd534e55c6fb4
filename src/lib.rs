//! dashcalc-rs: view-model math for event analytics dashboards.
//!
//! This crate owns the deterministic computation between fetched report data
//! and the widgets that draw it: reporting-period resolution, calendar picker
//! state, and radial chart layout. No I/O, no UI toolkit bindings.

pub mod core;
pub mod error;
pub mod interaction;
pub mod report;
pub mod telemetry;

pub use self::core::{
    DateRange, Period, RingSegment, RingSlice, layout_ring_segments, resolve_period,
};
pub use error::{DashError, DashResult};
