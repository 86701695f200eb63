//! Row freeze / pin membership
//!
//! Each global row index carries exactly one state tag, which makes frozen
//! and pinned membership mutually exclusive by construction. Indices are
//! stored as plain integers and are not checked against the dataset; stale
//! entries are filtered when the layout is computed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Membership state of a single row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowState {
    #[default]
    Normal,
    Frozen,
    Pinned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tag {
    state: RowState,
    /// Insertion sequence; frozen rows render in this order
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RowMembership {
    tags: HashMap<usize, Tag>,
    next_seq: u64,
}

impl RowMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle frozen membership. Freezing a pinned row unpins it.
    pub fn freeze_row(&mut self, global_index: usize) -> RowState {
        self.toggle(global_index, RowState::Frozen)
    }

    /// Toggle pinned membership. Pinning a frozen row unfreezes it.
    pub fn pin_row(&mut self, global_index: usize) -> RowState {
        self.toggle(global_index, RowState::Pinned)
    }

    /// Remove a row from the pinned set. Frozen rows are left alone.
    pub fn unpin_row(&mut self, global_index: usize) -> RowState {
        if self.is_pinned(global_index) {
            self.tags.remove(&global_index);
            debug!(target: "row_membership", "Row {} unpinned", global_index);
        }
        self.state(global_index)
    }

    fn toggle(&mut self, global_index: usize, target: RowState) -> RowState {
        let current = self.state(global_index);
        if current == target {
            self.tags.remove(&global_index);
        } else {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.tags.insert(global_index, Tag { state: target, seq });
        }

        let new_state = self.state(global_index);
        debug!(
            target: "row_membership",
            "Row {}: {:?} -> {:?}", global_index, current, new_state
        );
        new_state
    }

    pub fn state(&self, global_index: usize) -> RowState {
        self.tags
            .get(&global_index)
            .map_or(RowState::Normal, |tag| tag.state)
    }

    pub fn is_frozen(&self, global_index: usize) -> bool {
        self.state(global_index) == RowState::Frozen
    }

    pub fn is_pinned(&self, global_index: usize) -> bool {
        self.state(global_index) == RowState::Pinned
    }

    /// Frozen row indices in the order they were frozen
    pub fn frozen_rows(&self) -> Vec<usize> {
        self.rows_in_insertion_order(RowState::Frozen)
    }

    /// Pinned row indices in the order they were pinned, across all pages
    pub fn pinned_rows(&self) -> Vec<usize> {
        self.rows_in_insertion_order(RowState::Pinned)
    }

    fn rows_in_insertion_order(&self, state: RowState) -> Vec<usize> {
        let mut rows: Vec<(u64, usize)> = self
            .tags
            .iter()
            .filter(|(_, tag)| tag.state == state)
            .map(|(&idx, tag)| (tag.seq, idx))
            .collect();
        rows.sort_unstable();
        rows.into_iter().map(|(_, idx)| idx).collect()
    }

    pub fn frozen_count(&self) -> usize {
        self.count(RowState::Frozen)
    }

    pub fn pinned_count(&self) -> usize {
        self.count(RowState::Pinned)
    }

    fn count(&self, state: RowState) -> usize {
        self.tags.values().filter(|tag| tag.state == state).count()
    }

    pub fn has_frozen(&self) -> bool {
        self.frozen_count() > 0
    }

    pub fn has_pinned(&self) -> bool {
        self.pinned_count() > 0
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
