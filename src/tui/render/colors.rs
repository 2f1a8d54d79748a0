//! Color palette for the TUI
//!
//! Warm paper tones for the sheet, muted chrome around it

use ratatui::style::Color;

// UI Chrome
/// Pane borders
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Status bar background
pub const SURFACE: Color = Color::Rgb(30, 32, 40);

// Paper
/// Sheet background
pub const PAPER_BG: Color = Color::Rgb(238, 232, 213);
/// Typed characters
pub const INK: Color = Color::Rgb(40, 36, 32);
/// Struck characters
pub const INK_STRUCK: Color = Color::Rgb(150, 60, 55);
/// Cursor block
pub const CURSOR: Color = Color::Rgb(60, 60, 70);

// Text
/// Primary chrome text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary chrome text
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints and separators
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Active option in the mode selector
pub const SELECTED: Color = Color::Rgb(100, 180, 220);

/// Overlay background
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
