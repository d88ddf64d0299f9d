//! Stage transition and shutdown events.
//!
//! Gameplay code never touches the scheduler directly. It triggers a
//! [`ChangeStageEvent`] or [`GameCloseEvent`] and the observers in this
//! module record the intent in [`PendingStage`] / [`CloseRequested`]; the
//! frame scheduler picks those up at the end of the frame, after the
//! frame's draw calls have been presented.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::stage::{CloseRequested, PendingStage};

/// Request to tear the current stage down and enter the named one.
///
/// The stage name is validated by the scheduler before any teardown
/// happens; an unknown name leaves the current stage fully intact.
#[derive(Event, Debug, Clone)]
pub struct ChangeStageEvent {
    pub stage: String,
}

impl ChangeStageEvent {
    pub fn new(stage: impl Into<String>) -> Self {
        ChangeStageEvent {
            stage: stage.into(),
        }
    }
}

/// Request an orderly engine shutdown at the end of the current frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameCloseEvent {}

/// Observer that records a requested stage transition.
pub fn observe_change_stage_event(
    trigger: On<ChangeStageEvent>,
    mut pending: Option<ResMut<PendingStage>>,
) {
    let stage = &trigger.event().stage;
    debug!("ChangeStageEvent triggered for {:?}", stage);
    if let Some(pending) = pending.as_deref_mut() {
        pending.set(stage.clone());
    } else {
        warn!("PendingStage resource missing in observe_change_stage_event");
    }
}

/// Observer that records a shutdown request.
pub fn observe_game_close_event(
    _trigger: On<GameCloseEvent>,
    mut close: Option<ResMut<CloseRequested>>,
) {
    debug!("GameCloseEvent triggered");
    if let Some(close) = close.as_deref_mut() {
        close.0 = true;
    } else {
        warn!("CloseRequested resource missing in observe_game_close_event");
    }
}
