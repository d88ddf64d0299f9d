//! Animation components.
//!
//! [`Animation`] is the *desired* state mutated by game logic; the animation
//! manager owns [`AnimationState`], the state actually running, and keeps the
//! two reconciled once per tick. [`Sequence`] definitions are immutable after
//! authoring.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Immutable definition of one named frame sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Sprite sheet holding every frame of this sequence.
    pub sheet: String,
    /// Frame-name template; `{}` is substituted with the 1-based frame index.
    /// A template without a placeholder names a single static frame.
    pub frame_template: String,
    pub rotation: f32,
    pub scale: f32,
    pub frame_count: usize,
    /// Seconds each frame stays visible, already divided by any authored fps.
    pub frame_delay: f32,
}

impl Sequence {
    /// Frame name for a zero-based frame index; the template placeholder is
    /// filled with the 1-based index.
    pub fn frame_name(&self, frame_index: usize) -> String {
        self.frame_template
            .replace("{}", &(frame_index + 1).to_string())
    }
}

/// Desired animation state, mutated by game logic to request a different
/// sequence or speed.
#[derive(Component, Clone, Debug)]
pub struct Animation {
    pub sequences: FxHashMap<String, Sequence>,
    /// Name of the sequence the entity wants to be running.
    pub current: String,
    pub speed: f32,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Animation {
    pub fn new(current: impl Into<String>) -> Self {
        Animation {
            sequences: FxHashMap::default(),
            current: current.into(),
            speed: 1.0,
            flip_h: false,
            flip_v: false,
        }
    }

    pub fn with_sequence(mut self, name: impl Into<String>, sequence: Sequence) -> Self {
        self.sequences.insert(name.into(), sequence);
        self
    }
}

/// Runtime state owned exclusively by the animation manager.
///
/// Invariant: `current` always names a key present in the owning entity's
/// `Animation.sequences`; the manager fails with `AnimationNotFound` rather
/// than letting the two drift apart.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub current: String,
    pub speed: f32,
    /// Seconds elapsed in the current frame, scaled by speed.
    pub time: f32,
    pub frame: usize,
}
