//! Layout computation handed to the presentation layer

pub mod column_freeze;
pub mod layout_sequencer;
