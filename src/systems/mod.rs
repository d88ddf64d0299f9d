//! Per-tick manager systems and signal observers.
//!
//! The scheduler runs the systems in three phases, input first, then
//! gameplay, then presentation; within a phase, registration order holds.
//! Observers fire synchronously whenever their event is triggered, which may
//! be mid-system.
//!
//! Submodules:
//! - [`animation`] – sequence binding and frame advancement
//! - [`input`] – device polling and input edge events
//! - [`music`] / [`sound`] – audio state machines and dispatch
//! - [`render`] – depth-ordered draw composition
//! - [`tilemap`] – tile-sprite materialization and repositioning
//! - [`time`] – frame clock update
//! - [`ui`] – widget hover derivation and hit testing
pub mod animation;
pub mod input;
pub mod music;
pub mod render;
pub mod sound;
pub mod tilemap;
pub mod time;
pub mod ui;
