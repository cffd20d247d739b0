//! Pilotbridge - demo harness for the Userpilot SDK plugin bridge.
//!
//! Nine actions, each making one call on an injected [`plugin::UserpilotPlugin`]
//! and logging the outcome into append-only [`log_view::LogView`]s. SDK events
//! land in a second view once callbacks are registered.

pub mod bridge;
pub mod config;
pub mod fixtures;
pub mod log_view;
pub mod plugin;
pub mod ui;
