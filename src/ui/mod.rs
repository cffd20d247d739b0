//! UI module - Command Line Interface and Graphical Interface
//!
//! Provides both CLI (reedline-based REPL) and GUI (egui) front ends over the
//! same bridge adapter.

pub mod cli;
pub mod gui;
