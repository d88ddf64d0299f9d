//! Music manager.
//!
//! One entity per distinct track name, created lazily on the first play
//! request and dedup'd by a linear scan. The observer drives the per-track
//! state machine; commands arriving in an incompatible state are silently
//! ignored. Every effective transition triggers exactly one
//! [`MusicStateChanged`] notification carrying the old and new state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::music::{MusicTrack, PlayState};
use crate::device::DeviceBox;
use crate::error::{AssetKind, CoreError, CoreResult};
use crate::events::audio::{MusicAction, MusicCmd, MusicStateChanged};
use crate::resources::failure::CoreFailure;
use crate::storage::StorageBox;

/// Observer applying a music command to its track's state machine.
///
/// A missing music definition is recorded in the failure mailbox and aborts
/// the frame once the scheduler checks it.
pub fn observe_music_cmd(
    trigger: On<MusicCmd>,
    mut tracks: Query<&mut MusicTrack>,
    mut device: NonSendMut<DeviceBox>,
    storage: NonSend<StorageBox>,
    mut failure: ResMut<CoreFailure>,
    mut commands: Commands,
) {
    let cmd = trigger.event();

    // Linear scan keeps track names unique without a side index.
    let mut existing = tracks.iter_mut().find(|track| track.name == cmd.track);
    let old = existing
        .as_ref()
        .map(|track| track.state)
        .unwrap_or(PlayState::Stopped);

    let new = match cmd.action {
        MusicAction::Play { volume } => {
            if old == PlayState::Playing {
                return;
            }
            if storage.music(&cmd.track).is_none() {
                failure.record(CoreError::asset(AssetKind::Music, &cmd.track));
                return;
            }
            device.play_music(&cmd.track, volume);
            PlayState::Playing
        }
        MusicAction::Stop => {
            if old == PlayState::Stopped {
                return;
            }
            device.stop_music(&cmd.track);
            PlayState::Stopped
        }
        MusicAction::Pause => {
            if old != PlayState::Playing {
                return;
            }
            device.pause_music(&cmd.track);
            PlayState::Paused
        }
        MusicAction::Resume => {
            if old != PlayState::Paused {
                return;
            }
            device.resume_music(&cmd.track);
            PlayState::Playing
        }
        MusicAction::Volume(volume) => {
            if old == PlayState::Stopped {
                return;
            }
            device.set_music_volume(&cmd.track, volume);
            // Volume changes keep the state and emit no notification.
            return;
        }
    };

    debug!("music {:?}: {:?} -> {:?}", cmd.track, old, new);
    match existing.as_deref_mut() {
        Some(track) => track.state = new,
        None => {
            commands.spawn(MusicTrack {
                name: cmd.track.clone(),
                state: new,
            });
        }
    }
    commands.trigger(MusicStateChanged {
        track: cmd.track.clone(),
        old,
        new,
    });
}

/// Keep every known track's stream decoder primed, regardless of state.
pub fn pump_music_streams(
    tracks: Query<&MusicTrack>,
    mut device: NonSendMut<DeviceBox>,
) -> CoreResult<()> {
    for track in tracks.iter() {
        device.update_music_stream(&track.name);
    }
    Ok(())
}
