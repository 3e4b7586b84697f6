//! Control Capabilities
//!
//! What the toggle needs from the button and from its hidden field.
//! DOM nodes are shared handles, so every operation takes `&self`.

use crate::error::{ToggleError, ToggleResult};

/// Inline style property that carries the marked state
pub const TEXT_DECORATION: &str = "text-decoration";

/// The clicked button
pub trait Control {
    fn id(&self) -> String;
    /// Current inline `text-decoration` value ("" when unset)
    fn text_decoration(&self) -> ToggleResult<String>;
    fn set_text_decoration(&self, value: &str) -> ToggleResult<()>;
    fn add_class(&self, class: &str) -> ToggleResult<()>;
    fn remove_class(&self, class: &str) -> ToggleResult<()>;
}

/// The hidden input submitted with the form
pub trait CompanionField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

impl Control for web_sys::HtmlElement {
    fn id(&self) -> String {
        web_sys::Element::id(self)
    }

    fn text_decoration(&self) -> ToggleResult<String> {
        self.style()
            .get_property_value(TEXT_DECORATION)
            .map_err(ToggleError::dom)
    }

    fn set_text_decoration(&self, value: &str) -> ToggleResult<()> {
        self.style()
            .set_property(TEXT_DECORATION, value)
            .map_err(ToggleError::dom)
    }

    fn add_class(&self, class: &str) -> ToggleResult<()> {
        self.class_list().add_1(class).map_err(ToggleError::dom)
    }

    fn remove_class(&self, class: &str) -> ToggleResult<()> {
        self.class_list().remove_1(class).map_err(ToggleError::dom)
    }
}

impl CompanionField for web_sys::HtmlInputElement {
    fn value(&self) -> String {
        web_sys::HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        web_sys::HtmlInputElement::set_value(self, value);
    }
}
