//! Marked Items
//!
//! Reads the hidden fields of a list form the way the server does on submit:
//! every `<prefix>-<id>` field whose value is "delete".

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::{ToggleError, ToggleResult};
use crate::models::{ItemState, MarkedItems};

/// Field name prefix used by the shopping list and recipe forms
pub const DEFAULT_ITEM_PREFIX: &str = "ingredient-id";

const HIDDEN_INPUTS: &str = "input[type=hidden]";

/// Parse `<prefix>-<digits>` into the item id
pub fn parse_item_key(name: &str, prefix: &str) -> Option<u32> {
    let digits = name.strip_prefix(prefix)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Keep the ids of entries whose field value is "delete", preserving order
pub fn marked_ids<'a, I>(fields: I, prefix: &str) -> MarkedItems
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let ids = fields
        .into_iter()
        .filter(|(_, value)| ItemState::from_field_value(value) == Some(ItemState::Delete))
        .filter_map(|(name, _)| parse_item_key(name, prefix))
        .collect();
    MarkedItems { ids }
}

/// Scan every hidden input in `document`
pub fn collect_marked(document: &Document, prefix: &str) -> ToggleResult<MarkedItems> {
    let nodes = document
        .query_selector_all(HIDDEN_INPUTS)
        .map_err(ToggleError::dom)?;

    let mut fields = Vec::new();
    for i in 0..nodes.length() {
        if let Some(input) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlInputElement>().ok()) {
            fields.push((input.name(), input.value()));
        }
    }

    Ok(marked_ids(
        fields.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        prefix,
    ))
}
