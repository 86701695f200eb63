//! State management components
//!
//! Row membership, grid intents and the dispatcher that applies them.

pub mod dispatcher;
pub mod events;
pub mod row_membership;
