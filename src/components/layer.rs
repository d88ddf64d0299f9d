//! Render-depth annotation.
//!
//! Optional per-entity component consumed only at render time. Higher depths
//! paint first; entities without a [`Layer`] use a well-known default depth
//! below every explicit layer, so they paint after all annotated entities.

use bevy_ecs::prelude::Component;

/// Explicit render depth. Higher values paint earlier.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Layer(pub i32);

/// Depth used when an entity carries no [`Layer`], below every explicit one.
pub const DEFAULT_DEPTH: i64 = (i32::MIN as i64) - 1;

/// Effective depth of an entity for render ordering.
pub fn effective_depth(layer: Option<&Layer>) -> i64 {
    match layer {
        Some(layer) => layer.0 as i64,
        None => DEFAULT_DEPTH,
    }
}
