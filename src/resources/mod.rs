//! Engine resources.
//!
//! Submodules:
//! - [`config`] – engine settings loaded from an INI file
//! - [`failure`] – first-error mailbox for observer failures
//! - [`input`] – last observed pointer position
//! - [`stage`] – pending stage transition and shutdown flags
//! - [`worldtime`] – frame clock
pub mod config;
pub mod failure;
pub mod input;
pub mod stage;
pub mod worldtime;
