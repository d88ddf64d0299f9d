//! Per-frame pointer state.
//!
//! The input pump keeps the last observed pointer position here so it can
//! detect movement edges; widget systems read it when they need the current
//! position outside of an event.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Last pointer position reported by the device.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputState {
    pub mouse_pos: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            mouse_pos: Vec2::new(-1.0, -1.0),
        }
    }
}
