//! Column freezing
//!
//! Frozen columns are always a contiguous prefix starting at column 0, so the
//! whole grid is described by a single boundary index.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tracks the single frozen-column boundary for a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFreezeController {
    /// Columns `0..=boundary` are frozen; `None` means nothing is frozen
    boundary: Option<usize>,
}

impl ColumnFreezeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze everything up to and including `column_index`. Invoking on the
    /// current boundary clears it; any other index moves the boundary.
    pub fn toggle_freeze(&mut self, column_index: usize) {
        let previous = self.boundary;
        self.boundary = if self.boundary == Some(column_index) {
            None
        } else {
            Some(column_index)
        };
        debug!(
            target: "column_freeze",
            "Boundary {:?} -> {:?}", previous, self.boundary
        );
    }

    pub fn boundary(&self) -> Option<usize> {
        self.boundary
    }

    /// The boundary as a signed index where -1 means "no column frozen"
    pub fn as_signed(&self) -> i64 {
        self.boundary.map_or(-1, |b| b as i64)
    }

    pub fn is_frozen(&self, column_index: usize) -> bool {
        self.boundary.is_some_and(|b| column_index <= b)
    }

    /// True for the column that draws the divider and unfreeze affordance
    pub fn is_last_frozen(&self, column_index: usize) -> bool {
        self.boundary == Some(column_index)
    }

    pub fn frozen_count(&self) -> usize {
        self.boundary.map_or(0, |b| b + 1)
    }

    /// Horizontal offset at which a frozen column sticks: the summed widths
    /// of the columns before it, saturating at `u32::MAX`. `None` when the
    /// column scrolls normally.
    pub fn sticky_offset(&self, column_index: usize, widths: &[u32]) -> Option<u32> {
        if !self.is_frozen(column_index) {
            return None;
        }
        Some(
            widths
                .iter()
                .take(column_index)
                .fold(0u32, |acc, w| acc.saturating_add(*w)),
        )
    }

    pub fn clear(&mut self) {
        self.boundary = None;
    }
}
