//! Layout Components
//!
//! The page shell that hosts the counter.

pub mod shell;
