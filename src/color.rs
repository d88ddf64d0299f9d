//! RGBA color type used by UI widgets and the renderer.
//!
//! The core never talks to a GPU, so this is plain data handed to the
//! [`DeviceManager`](crate::device::DeviceManager) with draw calls. The blend
//! and invert helpers exist for the UI hover-color derivation and flat-button
//! label rendering.

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0, 255);
    pub const GRAY: Color = Color::new(128, 128, 128, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Linear blend `t` of the way toward `other`. Alpha is preserved.
    pub fn blend(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a,
        }
    }

    /// RGB complement, alpha preserved. Used for flat-button labels so the
    /// text stays readable on top of the body fill.
    pub fn inverted(self) -> Color {
        Color {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_quarter_toward_black() {
        let c = Color::RED.blend(Color::BLACK, 0.25);
        assert_eq!(c, Color::new(191, 0, 0, 255));
    }

    #[test]
    fn test_blend_zero_is_identity() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(c.blend(Color::WHITE, 0.0), c);
    }

    #[test]
    fn test_blend_one_reaches_target_rgb() {
        let c = Color::new(10, 20, 30, 255).blend(Color::WHITE, 1.0);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_blend_preserves_alpha() {
        let c = Color::new(100, 100, 100, 77).blend(Color::BLACK, 0.5);
        assert_eq!(c.a, 77);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Color::BLACK.inverted(), Color::WHITE);
        assert_eq!(Color::new(255, 0, 128, 9).inverted(), Color::new(0, 255, 127, 9));
    }
}
