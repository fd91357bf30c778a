//! Theme - color arithmetic and shared styling constants
//!
//! Every interactive object picks its fill from one of three tiers:
//! pressed, hovered, or its base color. No blending between tiers.

use macroquad::prelude::Color;

/// Channel offset applied to the base color while hovered
pub const HOVER_SHADE: i16 = 50;

/// Channel offset applied to the base color while pressed
pub const PRESS_SHADE: i16 = -50;

/// Text on a pressed-looking object
pub const TEXT_ON_PRESSED: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Text on everything else
pub const TEXT_DEFAULT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Outline drawn around every rectangle
pub const OUTLINE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Star stamp fill
pub const STAR_COLOR: Color = Color::new(1.0, 0.84, 0.0, 1.0); // ~255, 215, 0

/// RGB triple as written in layout files
pub type Rgb = (u8, u8, u8);

/// Opaque color from an RGB triple
pub fn rgb((r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Offset every RGB channel by `delta` (0..255 scale), saturating at the ends
pub fn shade(color: Color, delta: i16) -> Color {
    let shift = |c: f32| -> f32 {
        let v = (c * 255.0).round() as i16 + delta;
        v.clamp(0, 255) as f32 / 255.0
    };
    Color::new(shift(color.r), shift(color.g), shift(color.b), color.a)
}

/// Fill color for an object: pressed > hovered > base
pub fn fill_for(base: Color, pressed: bool, hovered: bool) -> Color {
    if pressed {
        shade(base, PRESS_SHADE)
    } else if hovered {
        shade(base, HOVER_SHADE)
    } else {
        base
    }
}

pub fn text_for(pressed: bool) -> Color {
    if pressed {
        TEXT_ON_PRESSED
    } else {
        TEXT_DEFAULT
    }
}
