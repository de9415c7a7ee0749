//! Main egui application: composes the panels and drives chat turns.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel, Vec2};

use jinro_core::event_bus::EventBus;
use jinro_core::ports::CompletionPort;
use jinro_core::runtime::ChatRuntime;
use jinro_platform::llm::GeminiProvider;
use jinro_platform::{assets, secrets};
use jinro_types::{ChatError, Result, session::Session};
use jinro_ui::panels::{chat, fatal, sidebar};
use jinro_ui::state::UiState;
use jinro_ui::theme;

const KOREAN_FONT_URL: &str = "assets/NotoSansKR-Regular.otf";
const KOREAN_FONT_NAME: &str = "noto_sans_kr";

/// Everything a working chat needs. Absent when startup configuration failed.
struct ChatContext {
    session: Rc<RefCell<Session>>,
    runtime: Rc<ChatRuntime>,
    llm: Rc<dyn CompletionPort>,
}

pub struct JinroApp {
    ui_state: UiState,
    chat: std::result::Result<ChatContext, ChatError>,
    first_frame: bool,
}

impl JinroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let chat = Self::connect();
        if let Err(e) = &chat {
            log::error!("Chat disabled: {}", e);
        }

        Self {
            ui_state: UiState::new(),
            chat,
            first_frame: true,
        }
    }

    /// Resolve the credential, build the client and open a session.
    fn connect() -> Result<ChatContext> {
        let config = secrets::load_config()?;
        let llm = GeminiProvider::new(config.clone()).map_err(|e| ChatError::Other(e.to_string()))?;

        let session = Session::start();
        log::info!("Session {} started at {}", session.id, session.created_at);

        Ok(ChatContext {
            session: Rc::new(RefCell::new(session)),
            runtime: Rc::new(ChatRuntime::new(config, EventBus::new())),
            llm: Rc::new(llm),
        })
    }

    /// Fetch a Hangul-capable font from the server and install it into egui
    fn load_korean_font(ctx: egui::Context) {
        wasm_bindgen_futures::spawn_local(async move {
            let bytes = match assets::fetch_bytes(KOREAN_FONT_URL).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Korean font unavailable, Hangul may not render: {}", e);
                    return;
                }
            };

            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                KOREAN_FONT_NAME.to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(KOREAN_FONT_NAME.to_owned());
            }

            ctx.set_fonts(fonts);
            ctx.request_repaint();
            log::info!("Korean font loaded");
        });
    }

    /// Commit the user's message now; stream and commit the reply in the background.
    fn dispatch_message(live: &ChatContext, text: String, ctx: &egui::Context) {
        let request = live
            .runtime
            .begin_turn(&mut live.session.borrow_mut(), &text);

        let runtime = live.runtime.clone();
        let llm = live.llm.clone();
        let session = live.session.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let reply = runtime.stream_reply(llm.as_ref(), request).await;
            runtime.finish_turn(&mut session.borrow_mut(), reply);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for JinroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            Self::load_korean_font(ctx.clone());
            self.first_frame = false;
        }

        if let Ok(live) = &self.chat {
            let events = live.runtime.event_bus().drain();
            if !events.is_empty() {
                self.ui_state.process_events(events);
                ctx.request_repaint();
            }
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.ui_state.show_sidebar, "☰")
                    .on_hover_text(sidebar::SIDEBAR_TITLE)
                    .clicked()
                {
                    self.ui_state.show_sidebar = !self.ui_state.show_sidebar;
                }
                ui.separator();
                ui.label(
                    RichText::new("진로 상담 제미나이 챗봇")
                        .strong()
                        .color(theme::ACCENT),
                );
                if let Ok(live) = &self.chat {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("Model: {}", live.runtime.config().model))
                                .color(theme::TEXT_SECONDARY)
                                .small(),
                        );
                    });
                }
            });
        });

        // ── Setup guide side panel ───────────────────────────
        if self.ui_state.show_sidebar {
            SidePanel::left("sidebar")
                .min_width(240.0)
                .max_width(320.0)
                .show(ctx, sidebar::sidebar_panel);
        }

        // ── Main column ──────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let width = available.x.min(theme::CONTENT_WIDTH);
            let margin = ((available.x - width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.allocate_ui(Vec2::new(width, available.y), |ui| match &self.chat {
                    Ok(live) => {
                        let session = live.session.borrow();
                        submitted = chat::chat_panel(ui, &mut self.ui_state, session.all());
                    }
                    Err(e) => fatal::fatal_panel(ui, e),
                });
            });
        });

        if let (Some(text), Ok(live)) = (submitted, &self.chat) {
            Self::dispatch_message(live, text, ctx);
        }
    }
}
