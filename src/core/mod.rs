pub mod calendar;
pub mod period;
pub mod radial;
pub mod types;

pub use period::{Period, resolve_period};
pub use radial::{RingSegment, RingSlice, layout_ring_segments};
pub use types::{Color, DateRange};
