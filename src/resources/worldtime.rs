use bevy_ecs::prelude::Resource;

/// Frame clock advanced once per tick, before any manager runs.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since the current stage started running.
    pub elapsed: f32,
    /// Seconds covered by the current frame, already scaled.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames completed since the current stage started running.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
