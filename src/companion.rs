//! Companion Field Lookup
//!
//! A button `<name>-button` pairs with the hidden input `<name>-hidden`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::{ToggleError, ToggleResult};

const CONTROL_MARKER: &str = "button";
const COMPANION_MARKER: &str = "hidden";

/// Derive the companion id by replacing the first `"button"` with `"hidden"`
pub fn companion_id(control_id: &str) -> ToggleResult<String> {
    if !control_id.contains(CONTROL_MARKER) {
        return Err(ToggleError::MalformedId(control_id.to_string()));
    }
    Ok(control_id.replacen(CONTROL_MARKER, COMPANION_MARKER, 1))
}

/// Look up the hidden input paired with `control_id`
pub fn find_companion(document: &Document, control_id: &str) -> ToggleResult<HtmlInputElement> {
    let id = companion_id(control_id)?;
    let element = document
        .get_element_by_id(&id)
        .ok_or_else(|| ToggleError::CompanionNotFound(id.clone()))?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ToggleError::NotAnInput(id))
}
