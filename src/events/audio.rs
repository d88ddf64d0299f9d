//! Audio command events and music state notifications.

use bevy_ecs::prelude::*;

use crate::components::music::PlayState;

/// Requested transition for a music track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MusicAction {
    Play { volume: f32 },
    Stop,
    Pause,
    Resume,
    /// Adjust the stream volume without changing the play state.
    Volume(f32),
}

/// Command targeting a music track by name. Commands that would not change
/// the track's state (playing an already playing track, pausing a stopped
/// one) are silently ignored.
#[derive(Event, Debug, Clone)]
pub struct MusicCmd {
    pub track: String,
    pub action: MusicAction,
}

impl MusicCmd {
    pub fn new(track: impl Into<String>, action: MusicAction) -> Self {
        MusicCmd {
            track: track.into(),
            action,
        }
    }

    pub fn play(track: impl Into<String>, volume: f32) -> Self {
        Self::new(track, MusicAction::Play { volume })
    }
}

/// Fire-and-forget sound effect request, resolved by name through storage.
#[derive(Event, Debug, Clone)]
pub struct SoundCmd {
    pub sound: String,
    pub volume: f32,
}

impl SoundCmd {
    pub fn new(sound: impl Into<String>, volume: f32) -> Self {
        SoundCmd {
            sound: sound.into(),
            volume,
        }
    }
}

/// Adjust the single global output gain.
#[derive(Event, Debug, Clone, Copy)]
pub struct MasterVolumeCmd {
    pub volume: f32,
}

/// Notification emitted exactly once per effective music state transition.
/// No-op commands and volume changes do not produce one.
#[derive(Event, Debug, Clone)]
pub struct MusicStateChanged {
    pub track: String,
    pub old: PlayState,
    pub new: PlayState,
}
