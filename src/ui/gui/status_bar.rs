//! Status bar rendering at the bottom of the window.

use eframe::egui;

use super::theme::catppuccin;
use crate::bridge::BridgeAdapter;

/// Render the status bar at the very bottom.
pub fn render(ctx: &egui::Context, adapter: &BridgeAdapter) {
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(24.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (color, icon, text) = if adapter.has_plugin() {
                    (catppuccin::GREEN, "●", "Plugin available")
                } else {
                    (catppuccin::OVERLAY0, "○", "Plugin missing")
                };
                ui.label(egui::RichText::new(icon).color(color).small());
                ui.label(egui::RichText::new(text).color(color).small());

                ui.separator();

                let listeners = adapter.subscriptions().len();
                let (color, text) = if listeners > 0 {
                    (catppuccin::TEAL, format!("{} listeners", listeners))
                } else {
                    (catppuccin::OVERLAY0, "No listeners".to_string())
                };
                ui.label(egui::RichText::new(text).color(color).small());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Pilotbridge v{}", env!("CARGO_PKG_VERSION")))
                            .color(catppuccin::LAVENDER)
                            .small(),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "Output: {} | Callbacks: {}",
                            adapter.output().len(),
                            adapter.callbacks().len()
                        ))
                        .color(catppuccin::SUBTEXT0)
                        .small(),
                    );
                });
            });
        });
}
