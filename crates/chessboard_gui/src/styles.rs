//! Styling constants

use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const HIGHLIGHT_SQUARE: Color = Color::from_rgba(0.2, 0.6, 0.9, 0.35); // Blue overlay
pub const TARGET_DOT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);
pub const BOARD_BORDER: Color = Color::from_rgb(0.3, 0.3, 0.3);

// Dimensions
pub const PANEL_WIDTH: f32 = 260.0;
