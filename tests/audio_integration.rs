//! Music/sound state machine tests driven through a bare world.

mod common;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;

use emberengine::components::music::{MusicTrack, PlayState};
use emberengine::device::DeviceBox;
use emberengine::events::audio::{MasterVolumeCmd, MusicAction, MusicCmd, MusicStateChanged, SoundCmd};
use emberengine::resources::failure::CoreFailure;
use emberengine::storage::StorageBox;
use emberengine::systems::music::{observe_music_cmd, pump_music_streams};
use emberengine::systems::sound::{observe_master_volume, observe_sound_cmd};

use common::{send, CallLog, DeviceCall, MemoryStorage, MockDevice};

#[derive(Resource, Default)]
struct Notes(Vec<(String, PlayState, PlayState)>);

fn record_note(trigger: On<MusicStateChanged>, mut notes: ResMut<Notes>) {
    let event = trigger.event();
    notes.0.push((event.track.clone(), event.old, event.new));
}

fn audio_world() -> (World, CallLog) {
    let (device, calls, _script) = MockDevice::new(0.016);
    let storage = MemoryStorage::new()
        .with_music("theme")
        .with_music("battle")
        .with_sound("click");
    let mut world = World::new();
    world.insert_non_send_resource(Box::new(device) as DeviceBox);
    world.insert_non_send_resource(Box::new(storage) as StorageBox);
    world.insert_resource(CoreFailure::default());
    world.init_resource::<Notes>();
    world.add_observer(observe_music_cmd);
    world.add_observer(observe_sound_cmd);
    world.add_observer(observe_master_volume);
    world.add_observer(record_note);
    (world, calls)
}

fn track_state(world: &mut World, name: &str) -> Option<PlayState> {
    let mut query = world.query::<&MusicTrack>();
    query
        .iter(world)
        .find(|track| track.name == name)
        .map(|track| track.state)
}

#[test]
fn test_play_from_stopped_creates_track_and_notifies_once() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("theme", 0.8));

    assert_eq!(track_state(&mut world, "theme"), Some(PlayState::Playing));
    assert!(calls.borrow().contains(&DeviceCall::PlayMusic {
        name: "theme".into(),
        volume: 0.8
    }));
    let notes = &world.resource::<Notes>().0;
    assert_eq!(
        notes.as_slice(),
        &[("theme".to_string(), PlayState::Stopped, PlayState::Playing)]
    );
}

#[test]
fn test_play_while_playing_is_a_silent_noop() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("theme", 0.8));
    send(&mut world, MusicCmd::play("theme", 0.8));

    // still one track entity, one device call, one notification
    let mut query = world.query::<&MusicTrack>();
    assert_eq!(query.iter(&world).count(), 1);
    let plays = calls
        .borrow()
        .iter()
        .filter(|call| matches!(call, DeviceCall::PlayMusic { .. }))
        .count();
    assert_eq!(plays, 1);
    assert_eq!(world.resource::<Notes>().0.len(), 1);
}

#[test]
fn test_pause_only_from_playing() {
    let (mut world, calls) = audio_world();

    // pause with no track at all: silently ignored, no entity appears
    send(&mut world, MusicCmd::new("theme", MusicAction::Pause));
    assert_eq!(track_state(&mut world, "theme"), None);

    send(&mut world, MusicCmd::play("theme", 1.0));
    send(&mut world, MusicCmd::new("theme", MusicAction::Pause));
    assert_eq!(track_state(&mut world, "theme"), Some(PlayState::Paused));
    assert!(calls
        .borrow()
        .contains(&DeviceCall::PauseMusic("theme".into())));

    // pausing a paused track changes nothing
    send(&mut world, MusicCmd::new("theme", MusicAction::Pause));
    assert_eq!(world.resource::<Notes>().0.len(), 2);
}

#[test]
fn test_resume_only_from_paused() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::new("theme", MusicAction::Resume));
    assert_eq!(track_state(&mut world, "theme"), None);

    send(&mut world, MusicCmd::play("theme", 1.0));
    send(&mut world, MusicCmd::new("theme", MusicAction::Pause));
    send(&mut world, MusicCmd::new("theme", MusicAction::Resume));

    assert_eq!(track_state(&mut world, "theme"), Some(PlayState::Playing));
    assert!(calls
        .borrow()
        .contains(&DeviceCall::ResumeMusic("theme".into())));
    let notes = &world.resource::<Notes>().0;
    assert_eq!(notes.len(), 3);
    assert_eq!(
        notes[2],
        ("theme".to_string(), PlayState::Paused, PlayState::Playing)
    );
}

#[test]
fn test_stop_from_playing_and_paused() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("theme", 1.0));
    send(&mut world, MusicCmd::new("theme", MusicAction::Stop));
    assert_eq!(track_state(&mut world, "theme"), Some(PlayState::Stopped));

    send(&mut world, MusicCmd::play("battle", 1.0));
    send(&mut world, MusicCmd::new("battle", MusicAction::Pause));
    send(&mut world, MusicCmd::new("battle", MusicAction::Stop));
    assert_eq!(track_state(&mut world, "battle"), Some(PlayState::Stopped));

    // stop while already stopped: ignored
    send(&mut world, MusicCmd::new("theme", MusicAction::Stop));
    let stops = calls
        .borrow()
        .iter()
        .filter(|call| matches!(call, DeviceCall::StopMusic(_)))
        .count();
    assert_eq!(stops, 2);
}

#[test]
fn test_volume_change_keeps_state_and_emits_no_notification() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("theme", 1.0));
    send(&mut world, MusicCmd::new("theme", MusicAction::Volume(0.3)));

    assert_eq!(track_state(&mut world, "theme"), Some(PlayState::Playing));
    assert!(calls.borrow().contains(&DeviceCall::SetMusicVolume {
        name: "theme".into(),
        volume: 0.3
    }));
    assert_eq!(world.resource::<Notes>().0.len(), 1);

    // volume for a stopped track is ignored
    send(&mut world, MusicCmd::new("battle", MusicAction::Volume(0.3)));
    let sets = calls
        .borrow()
        .iter()
        .filter(|call| matches!(call, DeviceCall::SetMusicVolume { .. }))
        .count();
    assert_eq!(sets, 1);
}

#[test]
fn test_missing_music_definition_parks_error_in_mailbox() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("unknown", 1.0));

    assert!(!world.resource::<CoreFailure>().is_empty());
    assert!(!calls
        .borrow()
        .iter()
        .any(|call| matches!(call, DeviceCall::PlayMusic { .. })));
    assert_eq!(track_state(&mut world, "unknown"), None);
}

#[test]
fn test_streams_are_pumped_regardless_of_state() {
    let (mut world, calls) = audio_world();

    send(&mut world, MusicCmd::play("theme", 1.0));
    send(&mut world, MusicCmd::play("battle", 1.0));
    send(&mut world, MusicCmd::new("battle", MusicAction::Pause));
    calls.borrow_mut().clear();

    world.run_system_once(pump_music_streams).unwrap().unwrap();

    let pumped: Vec<_> = calls
        .borrow()
        .iter()
        .filter_map(|call| match call {
            DeviceCall::UpdateMusicStream(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(pumped.len(), 2);
    assert!(pumped.contains(&"theme".to_string()));
    assert!(pumped.contains(&"battle".to_string()));
}

#[test]
fn test_sound_is_fire_and_forget() {
    let (mut world, calls) = audio_world();

    send(&mut world, SoundCmd::new("click", 0.5));
    send(&mut world, SoundCmd::new("click", 0.5));

    let plays = calls
        .borrow()
        .iter()
        .filter(|call| {
            matches!(call, DeviceCall::PlaySound { name, volume } if name == "click" && *volume == 0.5)
        })
        .count();
    assert_eq!(plays, 2);
}

#[test]
fn test_missing_sound_definition_parks_error() {
    let (mut world, calls) = audio_world();

    send(&mut world, SoundCmd::new("unknown", 1.0));

    assert!(!world.resource::<CoreFailure>().is_empty());
    assert!(!calls
        .borrow()
        .iter()
        .any(|call| matches!(call, DeviceCall::PlaySound { .. })));
}

#[test]
fn test_master_volume_reaches_the_device() {
    let (mut world, calls) = audio_world();

    send(&mut world, MasterVolumeCmd { volume: 0.25 });

    assert!(calls.borrow().contains(&DeviceCall::SetMasterVolume(0.25)));
}
