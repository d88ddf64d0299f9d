//! First-error mailbox.
//!
//! Observers cannot return a [`CoreResult`], so when one hits a hard error
//! it records it here. The scheduler checks the mailbox after every manager
//! system and aborts the frame on the first recorded error.

use bevy_ecs::prelude::Resource;

use crate::error::{CoreError, CoreResult};

/// Holds the first error recorded during the current frame.
#[derive(Resource, Debug, Default)]
pub struct CoreFailure {
    first: Option<CoreError>,
}

impl CoreFailure {
    /// Record an error. Only the first one per frame is kept.
    pub fn record(&mut self, err: CoreError) {
        if self.first.is_none() {
            self.first = Some(err);
        }
    }

    /// Consume the recorded error, if any, as a result.
    pub fn take(&mut self) -> CoreResult<()> {
        match self.first.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}
