//! ECS components for entities.
//!
//! Submodules overview:
//! - [`anchor`] – world-space anchor point (pivot) for an entity
//! - [`animation`] – sequence definitions, desired state, and runtime state
//! - [`button`] – flat/gradient buttons and their cached hover colors
//! - [`layer`] – explicit render depth annotation
//! - [`music`] – per-track playback state entities owned by the music manager
//! - [`progressbar`] – bounded progress bar widget
//! - [`shapes`] – box outline/fill and line renderables
//! - [`sprite`] – renderable sprite reference (sheet + frame + transform)
//! - [`spritebutton`] – sprite-backed button swapping normal/hover frames
//! - [`text`] – plain text renderable
//! - [`tilemap`] – tiled-map marker and its materialized-tile bookkeeping
//! - [`tint`] – color modulation for sprites

pub mod anchor;
pub mod animation;
pub mod button;
pub mod layer;
pub mod music;
pub mod progressbar;
pub mod shapes;
pub mod sprite;
pub mod spritebutton;
pub mod text;
pub mod tilemap;
pub mod tint;
