//! Colors - Counter App Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Counter app color palette - All colors are accessed via associated functions
pub struct CounterColors;

impl CounterColors {
    // Primary colors
    /// Accent - Cyan
    pub fn accent() -> Rgba { rgb(0x61dafb) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0x282c34) }
    /// Counter card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text (on light backgrounds)
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background (increment)
    pub fn button_primary_bg() -> Rgba { rgb(0x22c55e) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x16a34a) }
    /// Secondary button background (decrement)
    pub fn button_secondary_bg() -> Rgba { rgb(0xf59e0b) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd97706) }
    /// Danger button background (reset)
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    /// Danger button hover
    pub fn button_danger_hover() -> Rgba { rgb(0xdc2626) }
    /// Text on filled buttons
    pub fn button_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button hover overlay
    pub fn ghost_hover() -> Rgba { rgba(0xffffff44) }
    /// Ghost button resting overlay
    pub fn ghost_bg() -> Rgba { rgba(0xffffff22) }
}
