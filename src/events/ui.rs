use bevy_ecs::prelude::*;

/// Event emitted when a button widget is activated by a pointer release
/// over its hit area. The payload is an opaque string chosen by whoever
/// spawned the widget; the engine never interprets it.
#[derive(Event, Debug, Clone)]
pub struct ButtonPressedEvent {
    pub button: Entity,
    pub payload: String,
}
