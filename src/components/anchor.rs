use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space anchor point of an entity. Sprites, widgets, and shapes are
/// placed relative to this position; pivot-aware placement is resolved per
/// renderable.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub pos: Vec2,
}

impl Anchor {
    pub fn new(x: f32, y: f32) -> Self {
        Anchor {
            pos: Vec2::new(x, y),
        }
    }
}
