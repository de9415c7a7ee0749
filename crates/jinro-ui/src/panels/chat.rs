//! Chat panel: page header, transcript, in-flight reply and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use jinro_types::config::INPUT_HINT;
use jinro_types::message::{Message, Role};
use crate::markdown;
use crate::state::UiState;
use crate::theme::*;

pub const PAGE_TITLE: &str = "✨ 10대 진로 상담 챗봇: 진로 제미나이";
pub const PAGE_CAPTION: &str = "여러분의 꿈과 적성을 찾아주는 인공지능 진로 상담사입니다.";

/// Render the chat panel. Returns Some(message) when the user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, transcript: &[Message]) -> Option<String> {
    let mut submitted = None;

    ui.vertical(|ui| {
        header(ui, state);
        ui.separator();

        let available_height = ui.available_height() - 56.0;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in transcript {
                    render_message(ui, message);
                    ui.add_space(6.0);
                }

                if let Some(error) = &state.error_banner {
                    error_banner(ui, error);
                    ui.add_space(6.0);
                }

                if state.is_busy() {
                    render_streaming(ui, &state.streaming_text);
                }
            });

        ui.add_space(8.0);
        submitted = input_row(ui, state);
    });

    submitted
}

fn header(ui: &mut egui::Ui, state: &UiState) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new(PAGE_TITLE).color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let status_color = if state.is_busy() { WARNING } else { COUNSELOR };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });
    });
    ui.label(RichText::new(PAGE_CAPTION).color(TEXT_SECONDARY));
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;
    let busy = state.is_busy();
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text(INPUT_HINT)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(15.0));
        let response = ui.add_enabled(!busy, input);

        let send_enabled = !state.input_text.trim().is_empty() && !busy;
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("보내기").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SECONDARY })
                .corner_radius(BUBBLE_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || send_btn.clicked() {
            submitted = state.take_input();
            response.request_focus();
        }
    });
    submitted
}

fn role_style(role: &Role) -> (&'static str, egui::Color32, egui::Color32) {
    match role {
        Role::User => ("나", ACCENT, BG_USER),
        Role::Assistant => ("진로 제미나이", COUNSELOR, BG_SECONDARY),
        Role::Other => ("???", TEXT_SECONDARY, BG_SECONDARY),
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = role_style(&message.role);
    egui::Frame::default()
        .fill(bg)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label).color(label_color).strong().small());
            markdown::render(ui, &message.content);
        });
}

fn render_streaming(ui: &mut egui::Ui, text: &str) {
    let (label, label_color, bg) = role_style(&Role::Assistant);
    egui::Frame::default()
        .fill(bg)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label).color(label_color).strong().small());
            markdown::render(ui, &format!("{}{}", text, STREAMING_CURSOR));
        });
}

fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::default()
        .fill(BG_ERROR)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(ERROR));
        });
}
