//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Width of each counter control button
pub const COUNTER_BUTTON_WIDTH: f32 = 112.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "counter-app.toml";

/// Key context the counter bindings are scoped to
pub const COUNTER_KEY_CONTEXT: &str = "Counter";
