//! Frontend Models
//!
//! Values shared between the toggle, the hidden form fields and the JS side.

use serde::{Deserialize, Serialize};

/// Hidden field value for an item that stays on the list
pub const KEEP: &str = "keep";
/// Hidden field value for an item the server should remove
pub const DELETE: &str = "delete";

/// Logical state of one list entry (matches the hidden field values the backend reads)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    #[default]
    Keep,
    Delete,
}

impl ItemState {
    pub fn from_marked(marked: bool) -> Self {
        if marked {
            ItemState::Delete
        } else {
            ItemState::Keep
        }
    }

    /// `true` when the entry is struck through
    pub fn is_marked(self) -> bool {
        self == ItemState::Delete
    }

    pub fn toggled(self) -> Self {
        Self::from_marked(!self.is_marked())
    }

    /// String written into the companion field
    pub fn as_field_value(self) -> &'static str {
        match self {
            ItemState::Keep => KEEP,
            ItemState::Delete => DELETE,
        }
    }

    pub fn from_field_value(value: &str) -> Option<Self> {
        match value {
            KEEP => Some(ItemState::Keep),
            DELETE => Some(ItemState::Delete),
            _ => None,
        }
    }
}

/// Item ids currently marked for deletion in a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkedItems {
    pub ids: Vec<u32>,
}
