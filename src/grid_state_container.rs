//! Grid State Container
//!
//! Owns the dataset together with the column freeze boundary, row
//! membership and current page. Every intent is applied in full before the
//! layout is recomputed, so callers never observe a partial state.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::config::Config;
use crate::data::data_exporter::{DataExporter, ExportFormat};
use crate::data::data_view::DataView;
use crate::data::datatable::{DataColumn, DataTable};
use crate::state::events::{GridEvent, RowAction, RowRef};
use crate::state::row_membership::{RowMembership, RowState};
use crate::ui::column_freeze::ColumnFreezeController;
use crate::ui::layout_sequencer::{RowLayoutSequencer, TableLayout, PIN_GUTTER_WIDTH};

pub struct GridStateContainer {
    view: DataView,
    columns: Vec<DataColumn>,
    /// Header labels; renames replace these, never the dataset's columns
    labels: Vec<String>,
    freeze: ColumnFreezeController,
    membership: RowMembership,
    pin_gutter_width: u32,
    layout: TableLayout,
}

impl GridStateContainer {
    pub fn new(table: DataTable, page_size: usize) -> Self {
        Self::with_gutter(table, page_size, PIN_GUTTER_WIDTH)
    }

    /// Build a grid using page size and widths from the config. Column
    /// widths from the config replace the dataset's widths.
    pub fn from_config(mut table: DataTable, config: &Config) -> Self {
        for column in &mut table.columns {
            column.width = if column.is_action {
                config.layout.action_column_width
            } else {
                config.layout.default_column_width
            };
        }
        Self::with_gutter(
            table,
            config.layout.page_size,
            config.layout.pin_gutter_width,
        )
    }

    fn with_gutter(table: DataTable, page_size: usize, pin_gutter_width: u32) -> Self {
        info!(
            target: "grid",
            "Loading '{}' ({} rows, {} columns, page size {})",
            table.name,
            table.row_count(),
            table.column_count(),
            page_size
        );

        let columns = table.columns.clone();
        let labels = table.column_names();
        let view = DataView::new(Arc::new(table), page_size);

        let mut container = Self {
            view,
            columns,
            labels,
            freeze: ColumnFreezeController::new(),
            membership: RowMembership::new(),
            pin_gutter_width,
            layout: TableLayout::default(),
        };
        container.recompute();
        container
    }

    /// The layout computed after the most recent mutation
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn get_layout(&self) -> TableLayout {
        self.layout.clone()
    }

    pub fn view(&self) -> &DataView {
        &self.view
    }

    pub fn freeze(&self) -> &ColumnFreezeController {
        &self.freeze
    }

    pub fn membership(&self) -> &RowMembership {
        &self.membership
    }

    pub fn column_labels(&self) -> &[String] {
        &self.labels
    }

    pub fn current_page(&self) -> usize {
        self.view.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages()
    }

    pub fn is_frozen(&self, global_index: usize) -> bool {
        self.membership.is_frozen(global_index)
    }

    pub fn is_pinned(&self, global_index: usize) -> bool {
        self.membership.is_pinned(global_index)
    }

    /// Toggle the frozen-column boundary. Indices past the last column and
    /// the actions column are ignored.
    pub fn toggle_column_freeze(&mut self, column_index: usize) -> bool {
        match self.columns.get(column_index) {
            None => {
                debug!(target: "grid", "Ignoring freeze of unknown column {}", column_index);
                false
            }
            Some(column) if column.is_action => {
                debug!(target: "grid", "Actions column cannot be frozen");
                false
            }
            Some(_) => {
                self.freeze.toggle_freeze(column_index);
                self.recompute();
                true
            }
        }
    }

    pub fn toggle_row_freeze(&mut self, global_index: usize) -> RowState {
        self.warn_if_out_of_range(global_index);
        let state = self.membership.freeze_row(global_index);
        self.recompute();
        state
    }

    pub fn toggle_row_pin(&mut self, global_index: usize) -> RowState {
        self.warn_if_out_of_range(global_index);
        let state = self.membership.pin_row(global_index);
        self.recompute();
        state
    }

    pub fn unpin_row(&mut self, global_index: usize) -> RowState {
        let state = self.membership.unpin_row(global_index);
        self.recompute();
        state
    }

    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.view.set_page(page);
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.view.next_page();
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.view.prev_page();
        if changed {
            self.recompute();
        }
        changed
    }

    /// Resolve a row reference to its global index. `None` when a page-local
    /// index cannot be translated.
    pub fn resolve_row(&self, row: RowRef) -> Option<usize> {
        match row {
            RowRef::PageLocal(local) => self.view.to_global_index(local),
            RowRef::Global(global) => Some(global),
        }
    }

    /// Apply an entry from a row's action menu. Returns the row's state
    /// afterwards; an untranslatable reference is ignored.
    pub fn handle_row_action(&mut self, row: RowRef, action: &RowAction) -> RowState {
        let Some(global_index) = self.resolve_row(row) else {
            warn!(target: "grid", "Ignoring {:?} for unresolvable row {:?}", action, row);
            return RowState::Normal;
        };
        match action {
            RowAction::Freeze => self.toggle_row_freeze(global_index),
            RowAction::Pin => self.toggle_row_pin(global_index),
            RowAction::Unpin => self.unpin_row(global_index),
            RowAction::Other(name) => {
                info!(target: "grid", "Action: {} for row {}", name, global_index);
                self.membership.state(global_index)
            }
        }
    }

    /// Change a column's header label. The actions column has no label.
    pub fn rename_column(&mut self, column_index: usize, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(anyhow!("Column name cannot be empty"));
        }
        if self.columns.get(column_index).is_some_and(|c| c.is_action) {
            return Err(anyhow!("Actions column cannot be renamed"));
        }
        let slot = self
            .labels
            .get_mut(column_index)
            .ok_or_else(|| anyhow!("Column index {} out of bounds", column_index))?;

        debug!(target: "grid", "Renaming column {} '{}' -> '{}'", column_index, slot, label);
        *slot = label.to_string();
        self.recompute();
        Ok(())
    }

    pub fn export(&self, format_name: &str) -> Result<ExportFormat> {
        DataExporter::export(format_name, &self.layout)
    }

    /// Apply an intent. Returns whether the grid state changed.
    pub fn apply(&mut self, event: &GridEvent) -> Result<bool> {
        let before = self.snapshot();
        match event {
            GridEvent::ToggleColumnFreeze(column) => {
                self.toggle_column_freeze(*column);
            }
            GridEvent::ToggleRowFreeze(row) => {
                self.toggle_row_freeze(*row);
            }
            GridEvent::ToggleRowPin(row) => {
                self.toggle_row_pin(*row);
            }
            GridEvent::UnpinRow(row) => {
                self.unpin_row(*row);
            }
            GridEvent::RowAction { row, action } => {
                self.handle_row_action(*row, action);
            }
            GridEvent::SetPage(page) => {
                self.set_page(*page);
            }
            GridEvent::NextPage => {
                self.next_page();
            }
            GridEvent::PrevPage => {
                self.prev_page();
            }
            GridEvent::RenameColumn { index, label } => self.rename_column(*index, label)?,
            GridEvent::Export { format } => {
                self.export(format)?;
            }
        }
        Ok(self.snapshot() != before)
    }

    fn snapshot(&self) -> (Option<usize>, usize, Vec<usize>, Vec<usize>, Vec<String>) {
        (
            self.freeze.boundary(),
            self.view.current_page(),
            self.membership.frozen_rows(),
            self.membership.pinned_rows(),
            self.labels.clone(),
        )
    }

    fn warn_if_out_of_range(&self, global_index: usize) {
        if global_index >= self.view.source().row_count() {
            warn!(
                target: "grid",
                "Row {} is outside the dataset ({} rows); it will not be rendered",
                global_index,
                self.view.source().row_count()
            );
        }
    }

    fn recompute(&mut self) {
        self.layout = RowLayoutSequencer {
            view: &self.view,
            columns: &self.columns,
            labels: &self.labels,
            freeze: &self.freeze,
            membership: &self.membership,
            pin_gutter_width: self.pin_gutter_width,
        }
        .compute();
    }
}
