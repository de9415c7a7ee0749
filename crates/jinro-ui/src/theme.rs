//! UI theme constants

use egui::{Color32, CornerRadius, FontFamily, FontId, Stroke, TextStyle, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 24, 33);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(34, 37, 51);
pub const BG_USER: Color32 = Color32::from_rgb(45, 42, 74);
pub const BG_ERROR: Color32 = Color32::from_rgb(58, 22, 28);
pub const BG_CODE: Color32 = Color32::from_rgb(14, 15, 21);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 154, 176);
pub const ACCENT: Color32 = Color32::from_rgb(129, 140, 248);
pub const COUNSELOR: Color32 = Color32::from_rgb(45, 212, 191);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 10.0);
/// Transcript column width; the page is a single centered column.
pub const CONTENT_WIDTH: f32 = 720.0;

/// Appended to a reply while it is still streaming
pub const STREAMING_CURSOR: &str = "▌";

/// Dark theme with slightly larger body text; Hangul is hard to read small.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_CODE;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.corner_radius = BUBBLE_ROUNDING;
    style.visuals.widgets.hovered.bg_fill = BG_USER;
    style.visuals.widgets.hovered.corner_radius = BUBBLE_ROUNDING;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
