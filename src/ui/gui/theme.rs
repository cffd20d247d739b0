//! Catppuccin-inspired theme for the demo window.

use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Vec2};

use crate::log_view::EntryLevel;

/// Catppuccin Mocha palette (the subset the demo uses)
pub mod catppuccin {
    use super::Color32;

    pub const BASE: Color32 = Color32::from_rgb(30, 30, 46); // #1e1e2e
    pub const MANTLE: Color32 = Color32::from_rgb(24, 24, 37); // #181825
    pub const CRUST: Color32 = Color32::from_rgb(17, 17, 27); // #11111b
    pub const SURFACE0: Color32 = Color32::from_rgb(49, 50, 68); // #313244
    pub const SURFACE1: Color32 = Color32::from_rgb(69, 71, 90); // #45475a
    pub const SURFACE2: Color32 = Color32::from_rgb(88, 91, 112); // #585b70

    pub const TEXT: Color32 = Color32::from_rgb(205, 214, 244); // #cdd6f4
    pub const SUBTEXT1: Color32 = Color32::from_rgb(186, 194, 222); // #bac2de
    pub const SUBTEXT0: Color32 = Color32::from_rgb(166, 173, 200); // #a6adc8
    pub const OVERLAY0: Color32 = Color32::from_rgb(108, 112, 134); // #6c7086

    pub const MAUVE: Color32 = Color32::from_rgb(203, 166, 247); // #cba6f7
    pub const RED: Color32 = Color32::from_rgb(243, 139, 168); // #f38ba8
    pub const PEACH: Color32 = Color32::from_rgb(250, 179, 135); // #fab387
    pub const YELLOW: Color32 = Color32::from_rgb(249, 226, 175); // #f9e2af
    pub const GREEN: Color32 = Color32::from_rgb(166, 227, 161); // #a6e3a1
    pub const TEAL: Color32 = Color32::from_rgb(148, 226, 213); // #94e2d5
    pub const SAPPHIRE: Color32 = Color32::from_rgb(116, 199, 236); // #74c7ec
    pub const BLUE: Color32 = Color32::from_rgb(137, 180, 250); // #89b4fa
    pub const LAVENDER: Color32 = Color32::from_rgb(180, 190, 254); // #b4befe
}

/// Text color for a log entry
pub fn entry_color(level: EntryLevel) -> Color32 {
    match level {
        EntryLevel::Info => catppuccin::SUBTEXT1,
        EntryLevel::Success => catppuccin::GREEN,
        EntryLevel::Error => catppuccin::RED,
        EntryLevel::Diagnostic => catppuccin::YELLOW,
        EntryLevel::Event => catppuccin::MAUVE,
    }
}

/// Apply the palette to the egui context
pub fn apply_catppuccin_theme(ctx: &egui::Context) {
    use catppuccin::*;

    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = Vec2::new(10.0, 6.0);

    let small_rounding = Rounding::same(4.0);
    let mut visuals = egui::Visuals::dark();

    visuals.window_fill = BASE;
    visuals.window_stroke = Stroke::new(1.0, SURFACE0);
    visuals.window_rounding = Rounding::same(6.0);
    visuals.panel_fill = BASE;

    visuals.widgets.noninteractive.bg_fill = SURFACE0;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    visuals.widgets.noninteractive.rounding = small_rounding;

    visuals.widgets.inactive.bg_fill = SURFACE0;
    visuals.widgets.inactive.weak_bg_fill = SURFACE0;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, SUBTEXT1);
    visuals.widgets.inactive.rounding = small_rounding;

    visuals.widgets.hovered.bg_fill = SURFACE1;
    visuals.widgets.hovered.weak_bg_fill = SURFACE1;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT);
    visuals.widgets.hovered.rounding = small_rounding;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BLUE);

    visuals.widgets.active.bg_fill = SURFACE2;
    visuals.widgets.active.weak_bg_fill = SURFACE2;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT);
    visuals.widgets.active.rounding = small_rounding;
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, BLUE);

    visuals.selection.bg_fill = BLUE.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, BLUE);
    visuals.hyperlink_color = SAPPHIRE;
    visuals.extreme_bg_color = CRUST;
    visuals.code_bg_color = MANTLE;
    visuals.warn_fg_color = YELLOW;
    visuals.error_fg_color = RED;

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Configure text sizes
pub fn configure_fonts(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}

/// Initialize theme and fonts
pub fn init(ctx: &egui::Context) {
    apply_catppuccin_theme(ctx);
    configure_fonts(ctx);
}
