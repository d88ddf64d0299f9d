//! Stage transition resources.
//!
//! These record intents raised through the stage events. The scheduler
//! consumes them at the end of each frame, after the device release pass,
//! so a transition never interrupts a frame halfway.

use bevy_ecs::prelude::Resource;

/// Representation of a requested stage transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NextStage {
    #[default]
    Unchanged,
    Pending(String),
}

/// Intent to tear down the current stage and enter another.
///
/// Use [`PendingStage::set`] to mark a transition as pending; the scheduler
/// validates the name, applies the transition, and resets the value.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PendingStage {
    next: NextStage,
}

impl PendingStage {
    pub fn new() -> Self {
        PendingStage {
            next: NextStage::Unchanged,
        }
    }

    pub fn get(&self) -> &NextStage {
        &self.next
    }

    /// Request a transition. A later request in the same frame wins.
    pub fn set(&mut self, stage: String) {
        self.next = NextStage::Pending(stage);
    }

    /// Consume the pending request, resetting to [`NextStage::Unchanged`].
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(&mut self.next) {
            NextStage::Unchanged => None,
            NextStage::Pending(stage) => Some(stage),
        }
    }

    pub fn reset(&mut self) {
        self.next = NextStage::Unchanged;
    }
}

impl Default for PendingStage {
    fn default() -> Self {
        Self::new()
    }
}

/// Set when an orderly shutdown was requested, either by the window or by a
/// [`GameCloseEvent`](crate::events::stage::GameCloseEvent).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CloseRequested(pub bool);
