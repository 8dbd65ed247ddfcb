//! Window event bridge
//!
//! Every batch of core replies is also announced as a `CustomEvent` on the
//! window, so page scripts other than the caller can follow along.

use wasm_bindgen::prelude::*;

/// Event name carrying core replies as a JSON string in `detail`
pub const CORE_TO_UI_EVENT: &str = "crosshair:core-to-ui";

/// Dispatch encoded replies to window listeners
pub fn emit(json: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(json));

    match web_sys::CustomEvent::new_with_event_init_dict(CORE_TO_UI_EVENT, &init) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                web_sys::console::error_1(&format!("Failed to dispatch event: {e:?}").into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to create event: {e:?}").into());
        }
    }
}
