//! Shown instead of the chat when startup configuration failed.

use egui::{self, RichText};
use jinro_types::ChatError;
use crate::theme::*;

/// The two lines an operator sees. Kept separate from rendering for tests.
pub fn fatal_lines(error: &ChatError) -> [String; 2] {
    let headline = match error {
        ChatError::Config(reason) => format!("❌ 오류: {}", reason),
        other => format!("⚠️ Gemini 클라이언트 초기화 실패: {}", other),
    };
    [
        headline,
        "👉 사이드바의 '실행 및 배포 방법' 섹션을 참고하여 API 키를 설정해주세요.".to_string(),
    ]
}

pub fn fatal_panel(ui: &mut egui::Ui, error: &ChatError) {
    ui.add_space(24.0);
    for line in fatal_lines(error) {
        egui::Frame::default()
            .fill(BG_ERROR)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(line).color(ERROR));
            });
        ui.add_space(6.0);
    }
}
