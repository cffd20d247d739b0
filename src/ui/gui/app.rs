//! Main application orchestrator for the demo window.
//!
//! Assembles the panels and forwards button clicks to the bridge adapter.
//! Plugin completions append to the shared log views from other threads, so
//! the window keeps repainting on a short interval.

use std::time::Duration;

use eframe::egui;

use super::menu::{self, MenuAction};
use super::panels::{actions, console};
use super::status_bar;
use super::theme::{self, catppuccin};
use crate::bridge::BridgeAdapter;

/// How often to repaint while idle, so late callbacks show up
const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Main application struct that implements eframe::App
pub struct BridgeApp {
    /// Adapter every button talks to
    adapter: BridgeAdapter,

    /// Last entry scrolled into view, per log view
    output_revealed: Option<usize>,
    callbacks_revealed: Option<usize>,

    show_about: bool,

    /// Theme initialization flag
    theme_initialized: bool,
}

impl BridgeApp {
    pub fn new(adapter: BridgeAdapter) -> Self {
        Self {
            adapter,
            output_revealed: None,
            callbacks_revealed: None,
            show_about: false,
            theme_initialized: false,
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::CopyOutput => {
                let text = self.adapter.output().to_text();
                ctx.output_mut(|o| o.copied_text = text);
            }
            MenuAction::CopyCallbacks => {
                let text = self.adapter.callbacks().to_text();
                ctx.output_mut(|o| o.copied_text = text);
            }
            MenuAction::ShowAbout => self.show_about = true,
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::None => {}
        }
    }

    fn render_about(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Pilotbridge v{}", env!("CARGO_PKG_VERSION")))
                        .color(catppuccin::LAVENDER)
                        .strong(),
                );
                ui.label("Demo harness for the Userpilot SDK plugin bridge.");
                ui.label("Each button makes one SDK call and logs the callback it receives.");
            });
    }
}

impl eframe::App for BridgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initialize theme on first frame
        if !self.theme_initialized {
            theme::init(ctx);
            self.theme_initialized = true;
        }

        let menu_action = menu::render(ctx);
        self.handle_menu_action(ctx, menu_action);

        status_bar::render(ctx, &self.adapter);

        if let Some(action) = actions::render(ctx, self.adapter.has_plugin()) {
            self.adapter.perform(action);
        }

        console::render_callbacks(ctx, self.adapter.callbacks(), &mut self.callbacks_revealed);
        console::render_output(ctx, self.adapter.output(), &mut self.output_revealed);

        self.render_about(ctx);

        ctx.request_repaint_after(REFRESH_INTERVAL);
    }
}
