//! Counter App Library
//!
//! This crate provides the application logic for a single counter widget
//! embedded in a page shell, built on GPUI.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;
pub mod theme;
