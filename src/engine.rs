//! Frame scheduler and stage state machine.
//!
//! The [`Engine`] owns the world, the stage registry, and the top-level
//! lifecycle: `Initializing -> Preparing -> Running <-> ChangingStage ->
//! Ending -> Ended`. Each call to [`Engine::tick`] advances exactly one
//! state-machine step (one frame while running); [`Engine::run`] loops it.
//!
//! Failure policy: the first error any manager returns aborts the loop with
//! no partial-frame recovery, but the engine still performs one best-effort
//! release pass before the error propagates to the caller.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::components::music::{MusicTrack, PlayState};
use crate::device::DeviceBox;
use crate::error::{CoreError, CoreResult};
use crate::events::stage::{observe_change_stage_event, observe_game_close_event};
use crate::registry::{ManagerRegistry, Phase};
use crate::resources::config::EngineConfig;
use crate::resources::failure::CoreFailure;
use crate::resources::input::InputState;
use crate::resources::stage::{CloseRequested, PendingStage};
use crate::resources::worldtime::WorldTime;
use crate::storage::StorageBox;
use crate::systems::animation::animate;
use crate::systems::input::pump_input;
use crate::systems::music::{observe_music_cmd, pump_music_streams};
use crate::systems::render::render_frame;
use crate::systems::sound::{observe_master_volume, observe_sound_cmd};
use crate::systems::tilemap::update_tilemaps;
use crate::systems::time::update_world_time;
use crate::systems::ui::{observe_pointer_button, observe_pointer_move, style_widgets};

/// Caller-supplied callback populating the world when its stage starts.
pub type StageInit = Box<dyn Fn(&mut World)>;

/// Top-level lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Device not opened yet.
    Initializing,
    /// Loading frame showing until the configured budget elapses, then the
    /// stage init callback runs and managers register.
    Preparing,
    /// Normal frame loop.
    Running,
    /// Tearing down the current stage to enter the named one.
    ChangingStage { stage: String },
    /// Releasing device and storage.
    Ending,
    /// Terminal; further ticks are no-ops.
    Ended,
}

/// The frame scheduler.
pub struct Engine {
    world: World,
    state: EngineState,
    stages: FxHashMap<String, StageInit>,
    current_stage: String,
    registry: ManagerRegistry,
    /// Wall-clock seconds accumulated while `Preparing`.
    loading_elapsed: f32,
    released: bool,
}

impl Engine {
    /// Build an engine around host-supplied device and storage capabilities.
    pub fn new(device: DeviceBox, storage: StorageBox, config: EngineConfig) -> Self {
        let mut world = World::new();
        world.insert_non_send_resource(device);
        world.insert_non_send_resource(storage);
        world.insert_resource(config);
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(PendingStage::new());
        world.insert_resource(CloseRequested::default());
        world.insert_resource(CoreFailure::default());

        Engine {
            world,
            state: EngineState::Initializing,
            stages: FxHashMap::default(),
            current_stage: String::new(),
            registry: ManagerRegistry::new(),
            loading_elapsed: 0.0,
            released: false,
        }
    }

    /// Register a named stage and its init callback.
    pub fn add_stage(&mut self, name: impl Into<String>, init: impl Fn(&mut World) + 'static) {
        self.stages.insert(name.into(), Box::new(init));
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn current_stage(&self) -> &str {
        &self.current_stage
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Select the initial stage. Fails with [`CoreError::StageNotFound`] if
    /// it was never registered.
    pub fn boot(&mut self, initial: &str) -> CoreResult<()> {
        if !self.stages.contains_key(initial) {
            return Err(CoreError::StageNotFound(initial.to_string()));
        }
        self.current_stage = initial.to_string();
        Ok(())
    }

    /// Run until the engine ends or a manager fails. On failure the release
    /// pass still runs once before the error propagates.
    pub fn run(&mut self, initial: &str) -> CoreResult<()> {
        self.boot(initial)?;
        loop {
            match self.tick() {
                Ok(()) => {
                    if self.state == EngineState::Ended {
                        return Ok(());
                    }
                }
                Err(err) => {
                    self.release();
                    self.state = EngineState::Ended;
                    return Err(err);
                }
            }
        }
    }

    /// Advance the state machine by one step (one frame while running).
    pub fn tick(&mut self) -> CoreResult<()> {
        match self.state.clone() {
            EngineState::Initializing => {
                let config = self.world.resource::<EngineConfig>().clone();
                let mut device = self.world.non_send_resource_mut::<DeviceBox>();
                device.open(&config);
                // one empty frame pair forces window realization
                device.begin_frame();
                device.end_frame();
                info!("device opened, entering stage {:?}", self.current_stage);
                self.loading_elapsed = 0.0;
                self.state = EngineState::Preparing;
                Ok(())
            }
            EngineState::Preparing => {
                self.prepare_frame();
                let budget = self.world.resource::<EngineConfig>().loading_seconds;
                if self.loading_elapsed >= budget {
                    self.enter_stage();
                    self.state = EngineState::Running;
                }
                Ok(())
            }
            EngineState::Running => self.run_frame(),
            EngineState::ChangingStage { stage } => {
                if !self.stages.contains_key(&stage) {
                    // fail fast, current stage fully intact
                    return Err(CoreError::StageNotFound(stage));
                }
                self.teardown_stage();
                info!("stage change: {:?} -> {:?}", self.current_stage, stage);
                self.current_stage = stage;
                self.loading_elapsed = 0.0;
                self.state = EngineState::Preparing;
                Ok(())
            }
            EngineState::Ending => {
                self.release();
                self.state = EngineState::Ended;
                Ok(())
            }
            EngineState::Ended => Ok(()),
        }
    }

    /// One loading frame: accumulate the wall-clock budget and paint the
    /// loading text. Independent of the real frame rate by construction.
    fn prepare_frame(&mut self) {
        let (width, height) = self.world.resource::<EngineConfig>().window_size();
        let mut device = self.world.non_send_resource_mut::<DeviceBox>();
        self.loading_elapsed += device.frame_delta();
        device.begin_frame();
        device.draw_text(
            "Loading...",
            "default",
            Vec2::new(width as f32 * 0.5, height as f32 * 0.5),
            20.0,
            Color::WHITE,
        );
        device.end_frame();
    }

    /// Populate the world through the stage init callback, register every
    /// manager, and start the stage clock from zero.
    fn enter_stage(&mut self) {
        debug!("initializing stage {:?}", self.current_stage);
        let init = self
            .stages
            .get(&self.current_stage)
            .expect("current stage validated at boot/change time");
        init(&mut self.world);
        register_managers(&mut self.world, &mut self.registry);
        self.world.insert_resource(WorldTime::default());
        self.world.flush();
    }

    /// One frame of the running stage.
    fn run_frame(&mut self) -> CoreResult<()> {
        let dt = self.world.non_send_resource::<DeviceBox>().frame_delta();
        update_world_time(&mut self.world, dt);

        self.world
            .non_send_resource_mut::<DeviceBox>()
            .begin_frame();

        let ids: Vec<_> = self.registry.ordered().collect();
        let mut outcome = Ok(());
        for id in ids {
            let result = self
                .world
                .run_system(id)
                .expect("registered manager system missing");
            // deliver commands queued by observers (track spawns, follow-up
            // signals) before the next manager runs
            self.world.flush();
            if let Err(err) = result {
                outcome = Err(err);
                break;
            }
            // observers park their errors in the mailbox
            if let Err(err) = self.world.resource_mut::<CoreFailure>().take() {
                outcome = Err(err);
                break;
            }
        }

        self.world.non_send_resource_mut::<DeviceBox>().end_frame();
        outcome?;

        let close = self.world.non_send_resource::<DeviceBox>().should_close()
            || self.world.resource::<CloseRequested>().0;
        if close {
            self.state = EngineState::Ending;
            return Ok(());
        }
        if let Some(stage) = self.world.resource_mut::<PendingStage>().take() {
            self.state = EngineState::ChangingStage { stage };
        }
        Ok(())
    }

    /// Transactional stage teardown: by the next tick no manager can
    /// observe a half-cleared store.
    fn teardown_stage(&mut self) {
        // apply anything still queued so teardown sees the final stage state
        self.world.flush();
        self.stop_all_music();
        // removes stage entities, observers, and registered system entities
        self.world.clear_entities();
        self.registry.clear();
        self.world.resource_mut::<PendingStage>().reset();
        self.world.resource_mut::<CloseRequested>().0 = false;
        let _ = self.world.resource_mut::<CoreFailure>().take();
        self.world.insert_resource(InputState::default());
        self.world
            .non_send_resource_mut::<StorageBox>()
            .clear();
    }

    fn stop_all_music(&mut self) {
        let playing: Vec<String> = {
            let mut query = self.world.query::<&MusicTrack>();
            query
                .iter(&self.world)
                .filter(|track| track.state != PlayState::Stopped)
                .map(|track| track.name.clone())
                .collect()
        };
        let mut device = self.world.non_send_resource_mut::<DeviceBox>();
        for name in playing {
            device.stop_music(&name);
        }
    }

    /// Release storage and device exactly once, even on error paths.
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        info!("releasing storage and device");
        self.stop_all_music();
        self.world.non_send_resource_mut::<StorageBox>().clear();
        self.world.non_send_resource_mut::<DeviceBox>().close();
    }
}

/// Spawn every observer and register every manager system at its phase.
///
/// Called each time a stage enters `Running`; stage teardown clears both the
/// registry and the observer entities, so registration starts from scratch.
pub fn register_managers(world: &mut World, registry: &mut ManagerRegistry) {
    world.add_observer(observe_change_stage_event);
    world.add_observer(observe_game_close_event);
    world.add_observer(observe_music_cmd);
    world.add_observer(observe_sound_cmd);
    world.add_observer(observe_master_volume);
    world.add_observer(observe_pointer_move);
    world.add_observer(observe_pointer_button);

    let input = world.register_system(pump_input);
    let streams = world.register_system(pump_music_streams);
    registry.add(Phase::Input, input);
    registry.add(Phase::Input, streams);

    let animation = world.register_system(animate);
    let tilemaps = world.register_system(update_tilemaps);
    let ui = world.register_system(style_widgets);
    registry.add(Phase::Gameplay, animation);
    registry.add(Phase::Gameplay, tilemaps);
    registry.add(Phase::Gameplay, ui);

    let render = world.register_system(render_frame);
    registry.add(Phase::Presentation, render);
}
