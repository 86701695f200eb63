//! Data layer
//!
//! The immutable dataset, the paged view over it and the built-in sample
//! data.

pub mod data_exporter;
pub mod data_view;
pub mod datatable;
pub mod sample_data;
