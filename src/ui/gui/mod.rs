//! GUI Module
//!
//! egui window with the action buttons, the output view and the SDK
//! callbacks view.

mod app;
mod menu;
mod panels;
mod status_bar;
pub mod theme;

pub use app::BridgeApp;
