//! Console panels - the output view and the SDK callbacks view.

use eframe::egui;

use crate::log_view::{EntryLevel, LogView};
use crate::ui::gui::theme::{self, catppuccin};

/// Render the callbacks view docked at the bottom.
pub fn render_callbacks(ctx: &egui::Context, view: &LogView, revealed: &mut Option<usize>) {
    egui::TopBottomPanel::bottom("callbacks_panel")
        .resizable(true)
        .default_height(240.0)
        .min_height(120.0)
        .show(ctx, |ui| {
            render_view(ui, "SDK Callbacks", catppuccin::MAUVE, view, revealed);
        });
}

/// Render the output view in the remaining space.
pub fn render_output(ctx: &egui::Context, view: &LogView, revealed: &mut Option<usize>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        render_view(ui, "Output", catppuccin::BLUE, view, revealed);
    });
}

/// `revealed` remembers the last entry scrolled into view, so a new entry
/// scrolls once and the user can still scroll back afterwards.
fn render_view(
    ui: &mut egui::Ui,
    title: &str,
    accent: egui::Color32,
    view: &LogView,
    revealed: &mut Option<usize>,
) {
    // Header with buttons
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(title).color(accent));
        ui.label(
            egui::RichText::new(format!("{} entries", view.len()))
                .color(catppuccin::OVERLAY0)
                .small(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("📋 Copy All").clicked() {
                let text = view.to_text();
                ui.output_mut(|o| o.copied_text = text);
            }
        });
    });
    ui.separator();

    let entries = view.entries();
    let anchor = entries.len().checked_sub(1);
    let reveal = anchor.filter(|_| anchor != *revealed);

    egui::ScrollArea::vertical()
        .id_source(title)
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (index, entry) in entries.iter().enumerate() {
                let response = ui
                    .horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{}]", entry.timestamp))
                                .color(catppuccin::OVERLAY0)
                                .monospace(),
                        );
                        if let Some(category) = entry.category {
                            ui.label(
                                egui::RichText::new(format!("{}:", category))
                                    .color(catppuccin::TEAL)
                                    .strong(),
                            );
                        }
                        let text = egui::RichText::new(&entry.message)
                            .color(theme::entry_color(entry.level));
                        let text = if entry.level == EntryLevel::Event {
                            text.monospace()
                        } else {
                            text
                        };
                        ui.label(text);
                    })
                    .response;

                if Some(index) == reveal {
                    response.scroll_to_me(Some(egui::Align::BOTTOM));
                }
            }
        });

}
