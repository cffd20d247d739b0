//! Menu bar rendering.

use eframe::egui;

/// Actions triggered from menu
pub enum MenuAction {
    CopyOutput,
    CopyCallbacks,
    ShowAbout,
    Exit,
    None,
}

/// Render the top menu bar.
///
/// Returns any action triggered by menu clicks.
pub fn render(ctx: &egui::Context) -> MenuAction {
    let mut action = MenuAction::None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    action = MenuAction::Exit;
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Copy Output").clicked() {
                    action = MenuAction::CopyOutput;
                    ui.close_menu();
                }
                if ui.button("Copy SDK Callbacks").clicked() {
                    action = MenuAction::CopyCallbacks;
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    action = MenuAction::ShowAbout;
                    ui.close_menu();
                }
            });
        });
    });

    action
}
