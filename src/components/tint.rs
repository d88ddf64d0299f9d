use bevy_ecs::prelude::Component;

use crate::color::Color;

/// Color modulation for sprite rendering. When absent the renderer defaults
/// to opaque white (no modulation).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Tint {
            color: Color::new(r, g, b, a),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint {
            color: Color::WHITE,
        }
    }
}
