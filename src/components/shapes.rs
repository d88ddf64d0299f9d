//! Primitive shape renderables: filled boxes, outline boxes, and lines.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::color::Color;

/// Solid rectangle with its top-left at the entity's anchor.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoxFill {
    pub size: Vec2,
    pub color: Color,
}

/// Rectangle outline with its top-left at the entity's anchor.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoxOutline {
    pub size: Vec2,
    pub color: Color,
}

/// Line from the entity's anchor to an absolute world point.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub to: Vec2,
    pub color: Color,
}
