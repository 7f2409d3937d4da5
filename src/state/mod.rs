//! State - GPUI Entity State Modules
//!
//! Global application state held in GPUI entities. The count is deliberately
//! absent: it belongs to the counter view that owns it.

pub mod i18n_state;
