//! Error taxonomy for the runtime core.
//!
//! Every error here is fatal to the current tick or stage change: managers
//! return the first error they hit and the scheduler aborts the run loop with
//! it after a best-effort resource release. Idempotent audio no-ops (e.g.
//! `Pause` while stopped) are deliberately not represented here.

use std::fmt;

use thiserror::Error;

/// Kind of asset that failed a storage lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Sprite,
    Font,
    Music,
    Sound,
    Tilemap,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Sprite => "sprite",
            AssetKind::Font => "font",
            AssetKind::Music => "music",
            AssetKind::Sound => "sound",
            AssetKind::Tilemap => "tilemap",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by managers and the frame scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An entity's `Animation.current` names a sequence missing from its own
    /// sequence map. Configuration error; never silently falls back.
    #[error("animation sequence '{sequence}' not found on its owning entity")]
    AnimationNotFound { sequence: String },

    /// A stage-change signal named a stage that was never registered.
    #[error("stage '{0}' is not registered")]
    StageNotFound(String),

    /// An asset definition was missing from storage. Assets are expected to
    /// be preloaded before first use, so lookups are never retried.
    #[error("{kind} '{name}' not found in storage")]
    AssetNotFound { kind: AssetKind, name: String },
}

impl CoreError {
    pub fn asset(kind: AssetKind, name: impl Into<String>) -> Self {
        CoreError::AssetNotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Result alias used by manager systems.
pub type CoreResult<T> = Result<T, CoreError>;
