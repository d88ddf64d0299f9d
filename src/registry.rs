//! Manager registration glue.
//!
//! Managers run in three fixed phases; within a phase, registration order
//! holds. The registry stores registered [`SystemId`]s per phase and hands
//! the scheduler a flat, correctly ordered list each frame. Observers are
//! not tracked here: they live as entities in the world and are torn down
//! with everything else when the stage clears.

use bevy_ecs::system::SystemId;

use crate::error::CoreResult;

/// Execution phases, in the order they run each frame.
///
/// Input and audio state resolve before gameplay-adjacent managers, which
/// resolve before anything paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Input pumping and audio stream upkeep.
    Input,
    /// Animation, tiled maps, UI derivation.
    Gameplay,
    /// Rendering, always last.
    Presentation,
}

/// Id of a registered manager system.
pub type ManagerSystemId = SystemId<(), CoreResult<()>>;

/// Phase-ordered collection of registered manager systems.
#[derive(Default)]
pub struct ManagerRegistry {
    input: Vec<ManagerSystemId>,
    gameplay: Vec<ManagerSystemId>,
    presentation: Vec<ManagerSystemId>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manager system in a phase. Within a phase, systems run in
    /// the order they were added.
    pub fn add(&mut self, phase: Phase, id: ManagerSystemId) {
        match phase {
            Phase::Input => self.input.push(id),
            Phase::Gameplay => self.gameplay.push(id),
            Phase::Presentation => self.presentation.push(id),
        }
    }

    /// All registered systems in execution order.
    pub fn ordered(&self) -> impl Iterator<Item = ManagerSystemId> + '_ {
        self.input
            .iter()
            .chain(self.gameplay.iter())
            .chain(self.presentation.iter())
            .copied()
    }

    /// Drop every registration. The system entities themselves are removed
    /// by the stage teardown's world clear.
    pub fn clear(&mut self) {
        self.input.clear();
        self.gameplay.clear();
        self.presentation.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.gameplay.is_empty() && self.presentation.is_empty()
    }
}
