//! Action panel - the nine SDK buttons.

use eframe::egui;

use crate::bridge::DemoAction;
use crate::ui::gui::theme::catppuccin;

/// Render the button column on the left.
///
/// Returns the action whose button was clicked this frame, if any.
pub fn render(ctx: &egui::Context, plugin_available: bool) -> Option<DemoAction> {
    let mut clicked = None;

    egui::SidePanel::left("actions_panel")
        .resizable(false)
        .exact_width(210.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("Userpilot SDK").color(catppuccin::LAVENDER));

            // Device-ready banner
            let (color, text) = if plugin_available {
                (catppuccin::GREEN, "● Device is ready")
            } else {
                (catppuccin::PEACH, "○ Plugin not installed")
            };
            ui.label(egui::RichText::new(text).color(color).small());
            ui.separator();

            let width = ui.available_width();
            for action in DemoAction::ALL {
                let button = egui::Button::new(action.label()).min_size(egui::vec2(width, 30.0));
                if ui.add(button).clicked() {
                    clicked = Some(action);
                }
            }
        });

    clicked
}
