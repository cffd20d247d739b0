//! Bridge module - turns demo actions into plugin calls.
//!
//! The adapter owns the injected plugin capability (if any) and the two log
//! views. Each handler builds literal arguments, makes one call and logs the
//! outcome when the plugin reports back.

pub mod actions;
pub mod adapter;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use actions::DemoAction;
pub use adapter::BridgeAdapter;

/// Bridge errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Userpilot plugin not found. Make sure the plugin is installed.")]
    PluginUnavailable,
}
