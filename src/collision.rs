//! Collision geometry.
//!
//! Pure functions, no state: resolve a sprite definition plus an anchor point
//! into an axis-aligned rectangle and test point/rectangle containment and
//! rectangle/rectangle overlap. These are the only two primitive queries the
//! UI hit-testing and gameplay collision checks use.

use glam::Vec2;

use crate::storage::SpriteDef;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Rect::new(origin.x, origin.y, size.x, size.y)
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x, self.y + self.height),
            Vec2::new(self.x + self.width, self.y + self.height),
        ]
    }

    /// Shrink around the center by independent per-axis factors in `[0, 1]`.
    pub fn shrunk(&self, factor_x: f32, factor_y: f32) -> Rect {
        let new_w = self.width * factor_x;
        let new_h = self.height * factor_y;
        Rect::new(
            self.x + (self.width - new_w) * 0.5,
            self.y + (self.height - new_h) * 0.5,
            new_w,
            new_h,
        )
    }
}

/// Resolve a sprite definition anchored at `anchor` into its world rectangle.
///
/// The definition's source size is scaled by `scale` and the rectangle origin
/// is offset by the definition's normalized pivot, so an anchor with a
/// `(0.5, 1.0)` pivot sits at the bottom-center of the result.
pub fn sprite_rect(def: &SpriteDef, anchor: Vec2, scale: f32) -> Rect {
    let size = Vec2::new(def.width, def.height) * scale;
    let origin = anchor - def.pivot() * size;
    Rect::from_origin_size(origin, size)
}

/// Boundary-inclusive point-in-rectangle query.
pub fn point_in_rect(rect: &Rect, point: Vec2) -> bool {
    rect.contains(point)
}

/// Rectangle overlap, tested in both directions: any corner of either
/// rectangle inside the other counts as an overlap.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.corners().iter().any(|c| b.contains(*c)) || b.corners().iter().any(|c| a.contains(*c))
}
