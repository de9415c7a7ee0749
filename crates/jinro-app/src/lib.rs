//! Jinro App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It resolves configuration, builds the Gemini adapter and hands
//! everything to the egui UI.

pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "jinro_canvas";

/// WASM entry point: called when the module is loaded by index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Jinro WASM starting...");

    let canvas = gloo_utils::document()
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::JinroApp::new(cc)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
