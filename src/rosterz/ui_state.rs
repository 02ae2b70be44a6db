//! Tracking of the single expanded row across list mutations.
//!
//! The expanded row is addressed by index, and indices move whenever rows
//! are inserted or removed above it. Centralizing the shift rules here
//! keeps the arithmetic out of the callers, where an off-by-one quietly
//! expands the wrong row.

use crate::roster::Delta;

/// Which single row currently shows its action panel, if any.
///
/// The tracked index is always a valid roster index or `None`; it is
/// dropped whenever a delta would leave it pointing past the end or at a
/// removed position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowUiState {
    expanded: Option<usize>,
}

impl RowUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expanded row's current index.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Expands `index`, or collapses if it is already the expanded row.
    /// At most one row is expanded at a time, so expanding one row
    /// implicitly collapses any other.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Re-normalizes the tracked index after a structural change so it
    /// keeps naming the same row.
    ///
    /// - `Inserted(i)`: rows at or after `i` moved down, shift right
    /// - `Removed(i)`: the row itself collapses, rows after it shift left
    /// - `Replaced(_)`: positions unchanged
    /// - `RangeReset(_)`: nothing left to point at, collapse
    pub fn on_delta(&mut self, delta: Delta) {
        let Some(expanded) = self.expanded else {
            return;
        };
        self.expanded = match delta {
            Delta::Inserted(i) if expanded >= i => Some(expanded + 1),
            Delta::Removed(i) if expanded == i => None,
            Delta::Removed(i) if expanded > i => Some(expanded - 1),
            Delta::RangeReset(_) => None,
            _ => Some(expanded),
        };
    }
}
