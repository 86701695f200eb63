//! Row Layout Sequencer - three-tier render ordering
//!
//! Combines the paged view, the column freeze boundary and row membership
//! into the structure handed to the presentation layer:
//!
//! 1. frozen tier: every frozen row in freeze order, on every page
//! 2. pinned tier: pinned rows of the current page, in page order
//! 3. regular tier: the remaining rows of the current page
//!
//! The computation is a pure function of its inputs and tolerates stale
//! indices by dropping them.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data::data_view::DataView;
use crate::data::datatable::{DataColumn, DataRow};
use crate::state::row_membership::{RowMembership, RowState};
use crate::ui::column_freeze::ColumnFreezeController;

/// Width of the leading pin gutter column
pub const PIN_GUTTER_WIDTH: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowTier {
    Frozen,
    Pinned,
    Regular,
}

/// Bottom border weight of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowDivider {
    Normal,
    Heavy,
}

/// What the leading pin gutter shows for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinGutter {
    /// No row in the dataset is pinned, the gutter is not drawn
    Hidden,
    /// Gutter cell kept for alignment only
    Inert,
    /// Active unpin affordance
    Unpin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub index: usize,
    pub label: String,
    pub width: u32,
    /// Horizontal sticky offset, `None` when the column scrolls
    pub sticky_left: Option<u32>,
    pub is_last_frozen: bool,
    pub is_action: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub global_index: usize,
    /// Position on the current page; `None` for frozen rows from other pages
    pub page_local_index: Option<usize>,
    pub tier: RowTier,
    pub state: RowState,
    pub record: DataRow,
    pub divider: RowDivider,
    /// Row sticks below the header while scrolling vertically
    pub sticky_top: bool,
    pub pin_gutter: PinGutter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub columns: Vec<ColumnLayout>,
    pub column_offsets: Vec<Option<u32>>,
    pub frozen_tier: Vec<LayoutRow>,
    pub pinned_tier: Vec<LayoutRow>,
    pub regular_tier: Vec<LayoutRow>,
    pub pin_gutter_visible: bool,
    /// The "Pinned" section header; shown whenever any row is pinned, even
    /// if none of them are on the current page
    pub pinned_section_visible: bool,
    pub pin_gutter_width: u32,
    pub boundary: Option<usize>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl TableLayout {
    /// All rendered rows in render order
    pub fn rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.frozen_tier
            .iter()
            .chain(self.pinned_tier.iter())
            .chain(self.regular_tier.iter())
    }

    pub fn row_count(&self) -> usize {
        self.frozen_tier.len() + self.pinned_tier.len() + self.regular_tier.len()
    }

    /// Global indices of one tier, mostly useful for assertions and debugging
    pub fn tier_indices(&self, tier: RowTier) -> Vec<usize> {
        let rows = match tier {
            RowTier::Frozen => &self.frozen_tier,
            RowTier::Pinned => &self.pinned_tier,
            RowTier::Regular => &self.regular_tier,
        };
        rows.iter().map(|row| row.global_index).collect()
    }
}

/// Inputs borrowed from the grid state for one layout pass
pub struct RowLayoutSequencer<'a> {
    pub view: &'a DataView,
    pub columns: &'a [DataColumn],
    pub labels: &'a [String],
    pub freeze: &'a ColumnFreezeController,
    pub membership: &'a RowMembership,
    pub pin_gutter_width: u32,
}

impl<'a> RowLayoutSequencer<'a> {
    pub fn compute(&self) -> TableLayout {
        let pin_gutter_visible = self.membership.has_pinned();
        let gutter = if pin_gutter_visible {
            PinGutter::Inert
        } else {
            PinGutter::Hidden
        };

        let columns = self.column_layouts();
        let column_offsets = columns.iter().map(|c| c.sticky_left).collect();

        let frozen_tier = self.frozen_tier(gutter);
        let pinned_tier = if pin_gutter_visible {
            self.pinned_tier()
        } else {
            Vec::new()
        };
        let regular_tier = self.regular_tier(gutter);

        trace!(
            target: "layout",
            "Layout page {}/{}: {} frozen, {} pinned, {} regular",
            self.view.current_page(),
            self.view.total_pages(),
            frozen_tier.len(),
            pinned_tier.len(),
            regular_tier.len()
        );

        TableLayout {
            columns,
            column_offsets,
            frozen_tier,
            pinned_tier,
            regular_tier,
            pin_gutter_visible,
            pinned_section_visible: pin_gutter_visible,
            pin_gutter_width: self.pin_gutter_width,
            boundary: self.freeze.boundary(),
            current_page: self.view.current_page(),
            total_pages: self.view.total_pages(),
        }
    }

    fn column_layouts(&self) -> Vec<ColumnLayout> {
        let widths: Vec<u32> = self.columns.iter().map(|c| c.width).collect();
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnLayout {
                index,
                label: self
                    .labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| column.name.clone()),
                width: column.width,
                sticky_left: self.freeze.sticky_offset(index, &widths),
                is_last_frozen: self.freeze.is_last_frozen(index),
                is_action: column.is_action,
            })
            .collect()
    }

    /// Frozen rows come straight from the dataset in freeze order and ignore
    /// the current page.
    fn frozen_tier(&self, gutter: PinGutter) -> Vec<LayoutRow> {
        self.membership
            .frozen_rows()
            .into_iter()
            .filter_map(|global_index| {
                let record = self.view.get_record(global_index)?;
                Some(LayoutRow {
                    global_index,
                    page_local_index: self.view.to_local_index(global_index),
                    tier: RowTier::Frozen,
                    state: RowState::Frozen,
                    record: record.clone(),
                    divider: RowDivider::Heavy,
                    sticky_top: true,
                    pin_gutter: gutter,
                })
            })
            .collect()
    }

    /// Pinned rows are only looked up on the current page.
    fn pinned_tier(&self) -> Vec<LayoutRow> {
        let mut rows: Vec<LayoutRow> = self
            .page_rows()
            .filter(|(_, global_index, _)| self.membership.is_pinned(*global_index))
            .map(|(local, global_index, record)| LayoutRow {
                global_index,
                page_local_index: Some(local),
                tier: RowTier::Pinned,
                state: RowState::Pinned,
                record: record.clone(),
                divider: RowDivider::Normal,
                sticky_top: false,
                pin_gutter: PinGutter::Unpin,
            })
            .collect();

        if let Some(last) = rows.last_mut() {
            last.divider = RowDivider::Heavy;
        }
        rows
    }

    fn regular_tier(&self, gutter: PinGutter) -> Vec<LayoutRow> {
        self.page_rows()
            .filter(|(_, global_index, _)| {
                self.membership.state(*global_index) == RowState::Normal
            })
            .map(|(local, global_index, record)| LayoutRow {
                global_index,
                page_local_index: Some(local),
                tier: RowTier::Regular,
                state: RowState::Normal,
                record: record.clone(),
                divider: RowDivider::Normal,
                sticky_top: false,
                pin_gutter: gutter,
            })
            .collect()
    }

    /// (page-local index, global index, record) for the current page
    fn page_rows(&self) -> impl Iterator<Item = (usize, usize, &'a DataRow)> + 'a {
        let start = self.view.page_range().start;
        self.view
            .visible_slice()
            .iter()
            .enumerate()
            .map(move |(local, record)| (local, start + local, record))
    }
}
