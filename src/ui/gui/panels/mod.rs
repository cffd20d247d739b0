//! GUI panel modules.
//!
//! Each panel is rendered as a separate egui panel.

pub mod actions;
pub mod console;
