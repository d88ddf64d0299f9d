//! Event types and observers used by the engine core.
//!
//! Events are the decoupling seam between managers: the input pump turns
//! device edges into pointer/key events, widgets answer with
//! [`ui::ButtonPressedEvent`], and gameplay code requests stage changes or
//! audio transitions without touching the scheduler directly.
//!
//! Submodules:
//! - [`audio`] – music/sound commands and music state notifications
//! - [`input`] – pointer and key edge events from the device layer
//! - [`stage`] – stage change and shutdown requests
//! - [`ui`] – widget activation notifications
pub mod audio;
pub mod input;
pub mod stage;
pub mod ui;
