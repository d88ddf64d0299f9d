//! UI manager.
//!
//! Each widget family has a system half, lazy derivation of cached state,
//! and an observer half reacting to pointer events. Flat buttons hit-test
//! their scaled box; sprite buttons hit-test the pivot/scale-aware sprite
//! rectangle of the frame they currently show. When several widgets overlap,
//! the oldest entity wins.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::collision::{point_in_rect, sprite_rect, Rect};
use crate::components::anchor::Anchor;
use crate::components::button::{ActiveFill, FlatButton, HoverColors};
use crate::components::sprite::SpriteRef;
use crate::components::spritebutton::SpriteButton;
use crate::device::MouseButton;
use crate::error::{AssetKind, CoreError, CoreResult};
use crate::events::audio::SoundCmd;
use crate::events::input::{MouseButtonEvent, MouseMoveEvent};
use crate::events::ui::ButtonPressedEvent;
use crate::resources::failure::CoreFailure;
use crate::storage::StorageBox;

/// Volume for a sprite button's activation sound.
const BUTTON_SOUND_VOLUME: f32 = 1.0;

/// Lazily derive per-widget caches.
///
/// A flat button without a [`HoverColors`] cache gets one computed from its
/// base fill, plus an [`ActiveFill`] starting in the normal state. A sprite
/// button without a live [`SpriteRef`] gets one showing its normal frame.
/// Derivation stays lazy so base colors may be assembled over several frames
/// before first observation.
pub fn style_widgets(
    flats: Query<(Entity, &FlatButton), Without<HoverColors>>,
    sprite_buttons: Query<(Entity, &SpriteButton), Without<SpriteRef>>,
    mut commands: Commands,
) -> CoreResult<()> {
    for (entity, button) in flats.iter() {
        let colors = HoverColors::derive(&button.fill);
        let active = ActiveFill(colors.normal.clone());
        commands.entity(entity).insert((colors, active));
    }
    for (entity, button) in sprite_buttons.iter() {
        commands
            .entity(entity)
            .insert(SpriteRef::new(&button.sheet, &button.normal).with_scale(button.scale));
    }
    Ok(())
}

fn flat_hit(anchor: &Anchor, button: &FlatButton, point: glam::Vec2) -> bool {
    let rect = Rect::from_origin_size(anchor.pos, button.size * button.scale);
    point_in_rect(&rect, point)
}

/// Observer keeping hover state in sync with the pointer.
pub fn observe_pointer_move(
    trigger: On<MouseMoveEvent>,
    mut flats: Query<(&Anchor, &FlatButton, &HoverColors, &mut ActiveFill)>,
    mut sprite_buttons: Query<(&Anchor, &SpriteButton, &mut SpriteRef)>,
    storage: NonSend<StorageBox>,
    mut failure: ResMut<CoreFailure>,
) {
    let pos = trigger.event().pos;

    for (anchor, button, colors, mut active) in flats.iter_mut() {
        let target = if flat_hit(anchor, button, pos) {
            &colors.hover
        } else {
            &colors.normal
        };
        if active.0 != *target {
            active.0 = target.clone();
        }
    }

    for (anchor, button, mut sprite) in sprite_buttons.iter_mut() {
        let Some(def) = storage.sprite(&button.sheet, &sprite.frame) else {
            failure.record(CoreError::asset(
                AssetKind::Sprite,
                format!("{}/{}", button.sheet, sprite.frame),
            ));
            return;
        };
        let rect = sprite_rect(def, anchor.pos, sprite.scale);
        let target = if point_in_rect(&rect, pos) {
            &button.hover
        } else {
            &button.normal
        };
        if sprite.frame != *target {
            sprite.frame = target.clone();
        }
    }
}

/// Observer broadcasting a widget's payload on pointer-up over its hit area.
///
/// Candidates from both widget families compete; the oldest widget (lowest
/// entity row index) wins and its payload is broadcast exactly once.
pub fn observe_pointer_button(
    trigger: On<MouseButtonEvent>,
    flats: Query<(Entity, &Anchor, &FlatButton)>,
    sprite_buttons: Query<(Entity, &Anchor, &SpriteButton, Option<&SpriteRef>)>,
    storage: NonSend<StorageBox>,
    mut failure: ResMut<CoreFailure>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.pressed || event.button != MouseButton::Left {
        return;
    }
    let pos = event.pos;

    let mut hit: Option<(Entity, String, Option<String>)> = None;
    let mut consider = |entity: Entity, payload: &str, sound: Option<&String>| {
        if hit
            .as_ref()
            .is_none_or(|(best, _, _)| entity.index_u32() < best.index_u32())
        {
            hit = Some((entity, payload.to_string(), sound.cloned()));
        }
    };

    for (entity, anchor, button) in flats.iter() {
        if flat_hit(anchor, button, pos) {
            consider(entity, &button.payload, None);
        }
    }
    for (entity, anchor, button, sprite) in sprite_buttons.iter() {
        let frame = sprite.map(|s| s.frame.as_str()).unwrap_or(&button.normal);
        let scale = sprite.map(|s| s.scale).unwrap_or(button.scale);
        let Some(def) = storage.sprite(&button.sheet, frame) else {
            failure.record(CoreError::asset(
                AssetKind::Sprite,
                format!("{}/{}", button.sheet, frame),
            ));
            return;
        };
        if point_in_rect(&sprite_rect(def, anchor.pos, scale), pos) {
            consider(entity, &button.payload, button.sound.as_ref());
        }
    }

    if let Some((entity, payload, sound)) = hit {
        if let Some(sound) = sound {
            commands.trigger(SoundCmd::new(sound, BUTTON_SOUND_VOLUME));
        }
        commands.trigger(ButtonPressedEvent {
            button: entity,
            payload,
        });
    }
}
