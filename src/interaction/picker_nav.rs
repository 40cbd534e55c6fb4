use serde::{Deserialize, Serialize};

pub const DECADE_SPAN: i32 = 10;
const DECADE_GRID_CELLS: i32 = DECADE_SPAN + 2;

/// One cell of the 12-cell decade grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCell {
    pub year: i32,
    /// False for the two context cells flanking the decade; those render
    /// dimmed but stay selectable.
    pub in_decade: bool,
}

/// Transient navigation state for year/month/quarter picker grids.
///
/// Created when a picker opens, moved only by explicit previous/next taps,
/// discarded when the picker closes. Nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerNavigation {
    decade_start: i32,
    display_year: i32,
}

impl PickerNavigation {
    /// Opens navigation focused on `year`, snapping the decade window to its
    /// multiple-of-ten start.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            decade_start: year - year.rem_euclid(DECADE_SPAN),
            display_year: year,
        }
    }

    #[must_use]
    pub fn decade_start(self) -> i32 {
        self.decade_start
    }

    #[must_use]
    pub fn display_year(self) -> i32 {
        self.display_year
    }

    #[must_use]
    pub fn previous_decade(self) -> Self {
        Self {
            decade_start: self.decade_start - DECADE_SPAN,
            ..self
        }
    }

    #[must_use]
    pub fn next_decade(self) -> Self {
        Self {
            decade_start: self.decade_start + DECADE_SPAN,
            ..self
        }
    }

    #[must_use]
    pub fn previous_year(self) -> Self {
        Self {
            display_year: self.display_year - 1,
            ..self
        }
    }

    #[must_use]
    pub fn next_year(self) -> Self {
        Self {
            display_year: self.display_year + 1,
            ..self
        }
    }

    /// Selecting a year from the grid focuses it and re-snaps the window, so
    /// picking a context cell walks into the adjacent decade.
    #[must_use]
    pub fn select_year(self, year: i32) -> Self {
        Self::for_year(year)
    }

    /// The 12-cell year grid: one context year before the decade, the ten
    /// in-decade years, one context year after.
    #[must_use]
    pub fn decade_cells(self) -> Vec<YearCell> {
        (self.decade_start - 1..self.decade_start - 1 + DECADE_GRID_CELLS)
            .map(|year| YearCell {
                year,
                in_decade: year >= self.decade_start && year < self.decade_start + DECADE_SPAN,
            })
            .collect()
    }
}
