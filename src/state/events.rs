//! Grid intents

use serde::{Deserialize, Serialize};

/// Addresses a row either by its position on the rendered page or by its
/// fixed position in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowRef {
    PageLocal(usize),
    Global(usize),
}

/// Entries of the per-row action menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    Freeze,
    Pin,
    Unpin,
    /// Menu entries with no layout effect (edit, delete, ...)
    Other(String),
}

impl RowAction {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "freeze" => RowAction::Freeze,
            "pin" => RowAction::Pin,
            "unpin" => RowAction::Unpin,
            _ => RowAction::Other(name.to_string()),
        }
    }
}

/// User intents that can change the grid state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// Toggle the frozen-column boundary at a column
    ToggleColumnFreeze(usize),

    /// Toggle frozen membership of a global row
    ToggleRowFreeze(usize),

    /// Toggle pinned membership of a global row
    ToggleRowPin(usize),

    /// Unpin a global row (never affects frozen rows)
    UnpinRow(usize),

    /// Action chosen from a row's menu
    RowAction { row: RowRef, action: RowAction },

    SetPage(usize),
    NextPage,
    PrevPage,

    RenameColumn { index: usize, label: String },

    Export { format: String },
}
