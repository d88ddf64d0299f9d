//! Animation manager.
//!
//! Two passes per tick over the store:
//!
//! 1. Reconcile desired state ([`Animation`]) with runtime state
//!    ([`AnimationState`]): a missing or renamed sequence rebinds and resets
//!    frame and time; a speed change copies in-place without a reset. A
//!    desired sequence name absent from the entity's map is a fatal
//!    [`CoreError::AnimationNotFound`].
//! 2. Advance every bound animation by `delta * speed` and write the visible
//!    [`SpriteRef`] for the renderer.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, AnimationState};
use crate::components::sprite::SpriteRef;
use crate::error::{CoreError, CoreResult};
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
pub fn animate(world: &mut World) -> CoreResult<()> {
    // Pass 1: bind/reset runtime state and copy speed changes.
    let mut unbound: Vec<(Entity, String, f32)> = Vec::new();
    {
        let mut query = world.query::<(Entity, &Animation, Option<&mut AnimationState>)>();
        for (entity, anim, state) in query.iter_mut(world) {
            if !anim.sequences.contains_key(&anim.current) {
                return Err(CoreError::AnimationNotFound {
                    sequence: anim.current.clone(),
                });
            }
            match state {
                Some(mut state) => {
                    if state.current != anim.current {
                        state.current = anim.current.clone();
                        state.frame = 0;
                        state.time = 0.0;
                    }
                    if state.speed != anim.speed {
                        state.speed = anim.speed;
                    }
                }
                None => unbound.push((entity, anim.current.clone(), anim.speed)),
            }
        }
    }
    for (entity, current, speed) in unbound {
        world.entity_mut(entity).insert(AnimationState {
            current,
            speed,
            time: 0.0,
            frame: 0,
        });
    }

    // Pass 2: advance timers and derive the visible frame.
    let delta = world.resource::<WorldTime>().delta;
    let mut frames: Vec<(Entity, SpriteRef)> = Vec::new();
    {
        let mut query = world.query::<(Entity, &Animation, &mut AnimationState)>();
        for (entity, anim, mut state) in query.iter_mut(world) {
            let Some(seq) = anim.sequences.get(&state.current) else {
                // Pass 1 just validated the binding.
                continue;
            };

            state.time += delta * state.speed;
            // A zero frame count or non-positive delay never advances.
            if seq.frame_count > 0 && seq.frame_delay > 0.0 && state.time >= seq.frame_delay {
                state.time = 0.0;
                state.frame = (state.frame + 1) % seq.frame_count;
            }

            frames.push((
                entity,
                SpriteRef {
                    sheet: seq.sheet.clone(),
                    frame: seq.frame_name(state.frame),
                    scale: seq.scale,
                    rotation: seq.rotation,
                    flip_h: anim.flip_h,
                    flip_v: anim.flip_v,
                },
            ));
        }
    }
    for (entity, sprite) in frames {
        world.entity_mut(entity).insert(sprite);
    }

    Ok(())
}
