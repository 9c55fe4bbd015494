//! Registration TUI - user registration form with field-level validation
//!
//! The form core lives in [`state`]: field values, the validator, the
//! submission builder, and the [`state::FormSession`] that ties them
//! together. The terminal front end (`app`, `ui`) only turns widget events
//! into [`state::EditEvent`]s and renders what the session exposes.

pub mod app;
pub mod config;
pub mod logging;
pub mod platform;
pub mod sink;
pub mod state;
pub mod ui;
