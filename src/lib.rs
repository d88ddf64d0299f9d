//! Ember Engine runtime core.
//!
//! The single-threaded frame core of a 2D engine built on:
//! - **bevy_ecs** for the shared entity/component store, signals, and systems
//! - capability traits ([`device::DeviceManager`], [`storage::StorageManager`])
//!   for everything that touches a window, GPU, audio stream, or decoded asset
//!
//! The [`engine::Engine`] owns the stage-lifecycle state machine
//! (`Initializing -> Preparing -> Running <-> ChangingStage -> Ending`) and
//! drives the registered managers once per frame in three fixed phases:
//! input/audio first, gameplay-adjacent managers second, rendering last.
//!
//! # Module map
//!
//! - [`components`] – ECS components (anchors, sprites, animation, UI widgets, ...)
//! - [`events`] – signals exchanged between managers and game code
//! - [`resources`] – ECS resources (time, config, pending stage, ...)
//! - [`systems`] – the per-tick managers and their signal observers
//! - [`engine`] – the frame scheduler and stage registry
//! - [`registry`] – phase-ordered manager registration glue
//! - [`collision`] – pure rectangle geometry shared by UI and gameplay
//! - [`device`] / [`storage`] – capability boundaries consumed by the core

pub mod collision;
pub mod color;
pub mod components;
pub mod device;
pub mod engine;
pub mod error;
pub mod events;
pub mod registry;
pub mod resources;
pub mod storage;
pub mod systems;
