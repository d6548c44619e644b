//! Color palette: brand yellow and red on a dark gray field

use ratatui::style::Color;

/// Page background (#111827)
pub const BG_PRIMARY: Color = Color::Rgb(17, 24, 39);

/// Card front face (#1f2937)
pub const BG_CARD_FRONT: Color = Color::Rgb(31, 41, 55);

/// Card back face (#374151)
pub const BG_CARD_BACK: Color = Color::Rgb(55, 65, 81);

/// Trait badge fill (#374151)
pub const BG_BADGE: Color = Color::Rgb(55, 65, 81);

/// Error panel fill (#450a0a)
pub const BG_ERROR: Color = Color::Rgb(69, 10, 10);

/// Brand yellow (#ffcc00)
pub const YELLOW_ACCENT: Color = Color::Rgb(255, 204, 0);

/// Softer yellow for secondary highlights (#fde047)
pub const YELLOW_SOFT: Color = Color::Rgb(253, 224, 71);

/// Brand red (#d40511)
pub const RED_BRAND: Color = Color::Rgb(212, 5, 17);

/// Error text (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

/// Card borders (#4b5563)
pub const BORDER_CARD: Color = Color::Rgb(75, 85, 99);

pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);

pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);

pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
