//! Counter Feature
//!
//! The counter widget: one owned count and three buttons that change it.

pub mod page;

pub use page::CounterView;
