//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the application domain.

pub mod config;
pub mod counter;
