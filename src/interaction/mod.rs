pub mod day_selection;
pub mod picker_nav;

pub use day_selection::DaySelection;
pub use picker_nav::{PickerNavigation, YearCell};
