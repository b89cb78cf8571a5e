//! Reusable egui widget components with Tailwind-inspired styling.
//!
//! This crate provides the styled building blocks of the Folio editor:
//!
//! - **Buttons**: corner delete button, palette buttons
//! - **Colors**: CSS color parsing and the emphasis accent
//! - **Menu**: Menu items, panel frames
//! - **Layout**: Section labels, separators

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod menu;

pub use buttons::{DeleteButton, PaletteButton};
pub use colors::{parse_css_color, with_opacity};
pub use layout::{section_label, separator};
pub use menu::{menu_item, panel_frame, sheet_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Medium button size (corner controls)
    pub const MEDIUM: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Emphasis accent (orange)
    pub const ACCENT: Color32 = Color32::from_rgb(219, 99, 39);
    /// Destructive action color (red-500)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Paper sheet background
    pub const SHEET_BG: Color32 = Color32::WHITE;
}
