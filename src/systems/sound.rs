//! Sound dispatch.
//!
//! Sounds carry no persistent state: each command is a fire-and-forget
//! device call at the requested volume. Master volume adjusts one global
//! gain on the device.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::device::DeviceBox;
use crate::error::{AssetKind, CoreError};
use crate::events::audio::{MasterVolumeCmd, SoundCmd};
use crate::resources::failure::CoreFailure;
use crate::storage::StorageBox;

/// Observer dispatching a sound effect to the device.
pub fn observe_sound_cmd(
    trigger: On<SoundCmd>,
    mut device: NonSendMut<DeviceBox>,
    storage: NonSend<StorageBox>,
    mut failure: ResMut<CoreFailure>,
) {
    let cmd = trigger.event();
    if storage.sound(&cmd.sound).is_none() {
        failure.record(CoreError::asset(AssetKind::Sound, &cmd.sound));
        return;
    }
    device.play_sound(&cmd.sound, cmd.volume);
}

/// Observer adjusting the global output gain.
pub fn observe_master_volume(trigger: On<MasterVolumeCmd>, mut device: NonSendMut<DeviceBox>) {
    device.set_master_volume(trigger.event().volume);
}
