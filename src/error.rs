//! Toggle Errors
//!
//! Failures raised while resolving or mutating a button/hidden-field pair.

use wasm_bindgen::JsValue;

pub type ToggleResult<T> = Result<T, ToggleError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleError {
    /// Control id does not follow the `<name>-button` convention
    MalformedId(String),
    /// No element carries the derived companion id
    CompanionNotFound(String),
    /// Element with the companion id exists but is not an `<input>`
    NotAnInput(String),
    /// Control is detached from any document
    NoDocument,
    /// A DOM call threw
    Dom(String),
}

impl ToggleError {
    pub(crate) fn dom(err: JsValue) -> Self {
        ToggleError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::MalformedId(id) => write!(f, "Malformed control id: {:?} (expected <name>-button)", id),
            ToggleError::CompanionNotFound(id) => write!(f, "Companion field not found: {}", id),
            ToggleError::NotAnInput(id) => write!(f, "Companion field is not an input: {}", id),
            ToggleError::NoDocument => write!(f, "Control is not attached to a document"),
            ToggleError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for ToggleError {}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
