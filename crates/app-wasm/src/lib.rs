//! Crosshair configurator WASM build
//!
//! Exposes a `Configurator` to page scripts. Form controls send JSON
//! messages through `dispatch`; the preview canvas is redrawn and the
//! settings saved to localStorage on every change.

use crosshair_config::{presets, PersistedRecord};
use crosshair_frontend_core::{DrawBackend, FrontendError, Session};
use crosshair_ipc::encode_core_messages;
use tracing::Level;
use wasm_bindgen::prelude::*;

mod bridge;
mod canvas;
mod storage;

use canvas::Canvas2dBackend;
use storage::LocalStorageStore;

/// Page query parameter selecting the console log level
const LOG_QUERY_KEY: &str = "log";

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let level = log_level(&query);
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    tracing::info!("Crosshair WASM module initialized at {level} level");
}

/// Console log level from a `log=` page query parameter, `INFO` otherwise
fn log_level(query: &str) -> Level {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOG_QUERY_KEY)
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(Level::INFO)
}

/// One configurator bound to one preview canvas
#[wasm_bindgen]
pub struct Configurator {
    session: Session<LocalStorageStore>,
    backend: Canvas2dBackend,
}

#[wasm_bindgen]
impl Configurator {
    /// Bind to the canvas with the given id and draw the starting crosshair.
    ///
    /// Settings in the page URL win over saved ones.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Configurator, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let backend = Canvas2dBackend::from_element_id(&document, canvas_id).map_err(to_js)?;
        let query = window.location().search().unwrap_or_default();
        let session = Session::new(
            LocalStorageStore::from_window(&window),
            Some(&query),
            backend.size(),
        );

        let mut configurator = Self { session, backend };
        configurator.redraw()?;
        tracing::info!("Configurator bound to #{canvas_id}");
        Ok(configurator)
    }

    /// Handle a JSON `UiToCore` message and return the JSON replies.
    pub fn dispatch(&mut self, json: &str) -> Result<String, JsValue> {
        let replies = self.session.dispatch_json(json).map_err(to_js)?;
        self.redraw()?;
        bridge::emit(&replies);
        Ok(replies)
    }

    /// Current frame as a JSON reply list, for the first UI sync
    pub fn frame(&self) -> Result<String, JsValue> {
        encode_core_messages(&[self.session.frame().into_message()])
            .map_err(|e| to_js(e.into()))
    }

    /// Console command for the current crosshair
    pub fn command(&self) -> String {
        self.session.command().to_string()
    }

    /// Query string for a share link, without the leading `?`
    #[wasm_bindgen(js_name = shareQuery)]
    pub fn share_query(&self) -> String {
        self.session.share_query()
    }

    /// Full share link for the current page
    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let location = window.location();
        let base = format!("{}{}", location.origin()?, location.pathname()?);
        Ok(PersistedRecord::from_config(&self.session.config()).share_url(&base))
    }

    /// Preset ids in display order
    pub fn presets(&self) -> js_sys::Array {
        presets::ids().map(JsValue::from_str).collect()
    }
}

impl Configurator {
    fn redraw(&mut self) -> Result<(), JsValue> {
        self.session.present(&mut self.backend).map_err(to_js)
    }
}

fn to_js(e: FrontendError) -> JsValue {
    web_sys::console::error_1(&format!("{e}").into());
    JsValue::from_str(&e.to_string())
}
