//! Shopping List Frontend Helpers
//!
//! Strikethrough toggle for list entries marked for removal, exported to
//! page markup as `manageStrikethrough(this)`.

pub mod companion;
pub mod control;
pub mod error;
pub mod form;
pub mod models;
pub mod strikethrough;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub use control::{CompanionField, Control};
pub use error::{ToggleError, ToggleResult};
pub use form::DEFAULT_ITEM_PREFIX;
pub use models::{ItemState, MarkedItems};
pub use strikethrough::{StrikethroughPair, StrikethroughStyle};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Toggle the clicked button and its `<name>-hidden` field.
/// Returns `true` when the entry is now marked for deletion.
pub fn toggle_strikethrough(button: HtmlElement) -> ToggleResult<bool> {
    let id = Control::id(&button);
    let pair = StrikethroughPair::resolve(button).map_err(|e| {
        web_sys::console::error_1(&format!("[Strikethrough] {}: {}", id, e).into());
        e
    })?;
    let marked = pair.toggle()?;
    web_sys::console::log_1(&format!("[Strikethrough] {} -> {}", id, ItemState::from_marked(marked).as_field_value()).into());
    Ok(marked)
}

#[wasm_bindgen(js_name = manageStrikethrough)]
pub fn manage_strikethrough(button: HtmlElement) -> Result<bool, JsValue> {
    toggle_strikethrough(button).map_err(JsValue::from)
}

/// Ids of all entries currently marked for deletion, as `{ ids: number[] }`
#[wasm_bindgen(js_name = markedItemIds)]
pub fn marked_item_ids(prefix: Option<String>) -> Result<JsValue, JsValue> {
    let prefix = prefix.unwrap_or_else(|| DEFAULT_ITEM_PREFIX.to_string());
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ToggleError::NoDocument)?;
    let marked = form::collect_marked(&document, &prefix)?;
    web_sys::console::log_1(&format!("[MarkedItems] {} marked under {}", marked.ids.len(), prefix).into());
    serde_wasm_bindgen::to_value(&marked).map_err(|e| JsValue::from_str(&e.to_string()))
}
