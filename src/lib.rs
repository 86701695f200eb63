pub mod config;
pub mod data;
pub mod grid_state_container;
pub mod state;
pub mod ui;
pub mod utils;

pub use data::data_view::DataView;
pub use data::datatable::{DataColumn, DataRow, DataTable, DataValue};
pub use grid_state_container::GridStateContainer;
pub use state::row_membership::RowState;
pub use ui::layout_sequencer::TableLayout;
