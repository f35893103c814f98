//! Sort toggle state for the catalog manifest.

use aerofast_core::types::{SortDirection, SortField};
use serde::{Deserialize, Serialize};

/// Active sort column and direction.
///
/// Selecting the active column flips its direction; selecting another
/// column makes it active in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Apply one click on the `field` column header.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
        tracing::debug!(field = %self.field, direction = %self.direction, "Catalog sort toggled");
    }

    /// Consuming variant of [`SortState::toggle`].
    pub fn toggled(mut self, field: SortField) -> Self {
        self.toggle(field);
        self
    }
}
