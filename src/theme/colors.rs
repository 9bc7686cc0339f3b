//! Colors - Pharma Desk Theme Colors

use gpui::{Rgba, rgb};

/// Admin palette. All colors are accessed via associated functions.
pub struct DeskColors;

impl DeskColors {
    /// Primary accent - Emerald
    pub fn accent() -> Rgba { rgb(0x059669) }
    /// Accent hover
    pub fn accent_hover() -> Rgba { rgb(0x047857) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8fafc) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    pub fn text_secondary() -> Rgba { rgb(0x64748b) }
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Text on accent backgrounds
    pub fn text_on_accent() -> Rgba { rgb(0xffffff) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    pub fn border_focus() -> Rgba { rgb(0x10b981) }

    // Button colors
    pub fn button_secondary_bg() -> Rgba { rgb(0xf1f5f9) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xe2e8f0) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf1f5f9) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf8fafc) }
    pub fn table_row_hover() -> Rgba { rgb(0xf1f5f9) }
    pub fn table_row_alt() -> Rgba { rgb(0xfcfcfd) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }
    pub fn input_placeholder() -> Rgba { rgb(0x94a3b8) }
}
