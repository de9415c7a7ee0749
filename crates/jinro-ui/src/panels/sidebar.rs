//! Sidebar: static build and deployment instructions. No state.

use egui::{self, RichText};
use crate::markdown;
use crate::theme::*;

pub const SIDEBAR_TITLE: &str = "실행 및 배포 방법";

pub const SETUP_GUIDE: &str = "\
### 1. 도구 설치
```
rustup target add wasm32-unknown-unknown
cargo install trunk
```

### 2. API 키 설정 (중요!)
빌드할 때 **`GEMINI_API_KEY`** 환경 변수에 API 키를 넣거나,
배포한 페이지에서 `window.GEMINI_API_KEY` 값으로 주입해주세요.

### 3. 앱 실행
```
GEMINI_API_KEY=... trunk serve
```
";

pub fn sidebar_panel(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.heading(RichText::new(SIDEBAR_TITLE).color(ACCENT).strong());
    ui.separator();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| markdown::render(ui, SETUP_GUIDE));
}
