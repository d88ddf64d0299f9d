//! Input pump.
//!
//! Runs first in the input phase: polls the device once, compares against
//! the previous frame's pointer position, and re-broadcasts every observed
//! edge as an event. Gameplay code subscribes to the events and never talks
//! to the device directly.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::device::{DeviceBox, Key, MouseButton};
use crate::error::CoreResult;
use crate::events::input::{KeyEvent, MouseButtonEvent, MouseMoveEvent};
use crate::resources::input::InputState;

/// Poll the device and trigger one event per input edge.
///
/// Move events fire only when the pointer actually moved since the last
/// frame. Button and key events fire on the press/release edges the device
/// reports for this frame.
pub fn pump_input(world: &mut World) -> CoreResult<()> {
    let mut moves: Option<Vec2> = None;
    let mut buttons: Vec<(MouseButton, bool)> = Vec::new();
    let mut keys: Vec<(Key, bool)> = Vec::new();
    let pos;
    {
        let device = world.non_send_resource::<DeviceBox>();
        let input = world.resource::<InputState>();

        pos = device.mouse_position();
        if pos != input.mouse_pos {
            moves = Some(pos);
        }
        for button in MouseButton::ALL {
            if device.mouse_pressed(button) {
                buttons.push((button, true));
            }
            if device.mouse_released(button) {
                buttons.push((button, false));
            }
        }
        for key in Key::ALL {
            if device.key_pressed(key) {
                keys.push((key, true));
            }
            if device.key_released(key) {
                keys.push((key, false));
            }
        }
    }

    world.resource_mut::<InputState>().mouse_pos = pos;

    if let Some(pos) = moves {
        world.trigger(MouseMoveEvent { pos });
    }
    for (button, pressed) in buttons {
        world.trigger(MouseButtonEvent {
            button,
            pressed,
            pos,
        });
    }
    for (key, pressed) in keys {
        world.trigger(KeyEvent { key, pressed });
    }

    Ok(())
}
