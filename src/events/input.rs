//! Pointer and keyboard edge events.
//!
//! The input pump polls the device once per frame and triggers one event per
//! observed edge. Systems subscribe to these instead of reading the device
//! directly, so gameplay code stays backend-agnostic.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::device::{Key, MouseButton};

/// Event emitted when the pointer position changed since the previous frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// New pointer position in window coordinates.
    pub pos: Vec2,
}

/// Event emitted on a mouse button press or release edge.
#[derive(Event, Debug, Clone, Copy)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    /// Whether the button was pressed (true) or released (false).
    pub pressed: bool,
    /// Pointer position at the moment of the edge.
    pub pos: Vec2,
}

/// Event emitted on a key press or release edge.
#[derive(Event, Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    /// Whether the key was pressed (true) or released (false).
    pub pressed: bool,
}
