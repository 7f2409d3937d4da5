//! Components - Reusable UI Components
//!
//! Pure UI components and the page shell.

pub mod layout;
pub mod primitives;
