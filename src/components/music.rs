use bevy_ecs::prelude::Component;

/// Logical playback state of one music track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    Stopped,
    Playing,
    Paused,
}

/// Per-track state entity, created lazily by the music manager on the first
/// play request for a track name and deduplicated by linear scan. Torn down
/// only when a stage change clears the whole store.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct MusicTrack {
    pub name: String,
    pub state: PlayState,
}

impl MusicTrack {
    pub fn new(name: impl Into<String>, state: PlayState) -> Self {
        MusicTrack {
            name: name.into(),
            state,
        }
    }
}
