//! Strikethrough Toggle
//!
//! Flips a list entry between "keep" and "marked for deletion".
//! The button's inline `text-decoration` is the only source of truth;
//! the hidden field is written, never read.

use web_sys::{HtmlElement, HtmlInputElement};

use crate::companion::find_companion;
use crate::control::{CompanionField, Control};
use crate::error::{ToggleError, ToggleResult};
use crate::models::ItemState;

/// Class names and decoration applied for each state
#[derive(Debug, Clone, PartialEq)]
pub struct StrikethroughStyle {
    /// Button variant while the entry is kept
    pub keep_class: String,
    /// Button variant while the entry is marked
    pub delete_class: String,
    /// Marker class added while the entry is marked
    pub marker_class: String,
    pub decoration: String,
}

impl Default for StrikethroughStyle {
    fn default() -> Self {
        Self {
            keep_class: "btn-primary".to_string(),
            delete_class: "btn-secondary".to_string(),
            marker_class: "item-remove".to_string(),
            decoration: "line-through".to_string(),
        }
    }
}

/// A button bound to its hidden field
pub struct StrikethroughPair<C, F> {
    control: C,
    companion: F,
    style: StrikethroughStyle,
}

impl<C: Control, F: CompanionField> StrikethroughPair<C, F> {
    pub fn new(control: C, companion: F) -> Self {
        Self::with_style(control, companion, StrikethroughStyle::default())
    }

    pub fn with_style(control: C, companion: F, style: StrikethroughStyle) -> Self {
        Self { control, companion, style }
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn companion(&self) -> &F {
        &self.companion
    }

    pub fn is_marked(&self) -> ToggleResult<bool> {
        Ok(self.control.text_decoration()? == self.style.decoration)
    }

    pub fn state(&self) -> ToggleResult<ItemState> {
        self.is_marked().map(ItemState::from_marked)
    }

    /// Write `state` to both the button and the hidden field
    pub fn apply(&self, state: ItemState) -> ToggleResult<()> {
        let style = &self.style;
        match state {
            ItemState::Keep => {
                self.control.set_text_decoration("")?;
                self.control.remove_class(&style.delete_class)?;
                self.control.add_class(&style.keep_class)?;
                self.control.remove_class(&style.marker_class)?;
            }
            ItemState::Delete => {
                self.control.set_text_decoration(&style.decoration)?;
                self.control.add_class(&style.delete_class)?;
                self.control.remove_class(&style.keep_class)?;
                self.control.add_class(&style.marker_class)?;
            }
        }
        self.companion.set_value(state.as_field_value());
        Ok(())
    }

    /// Flip the state; returns `true` when the entry is now marked
    pub fn toggle(&self) -> ToggleResult<bool> {
        let next = self.state()?.toggled();
        self.apply(next)?;
        Ok(next.is_marked())
    }
}

impl StrikethroughPair<HtmlElement, HtmlInputElement> {
    /// Pair a button with the hidden input found through the id convention.
    /// Nothing is mutated here, so a failed lookup leaves the button as it was.
    pub fn resolve(control: HtmlElement) -> ToggleResult<Self> {
        let document = control.owner_document().ok_or(ToggleError::NoDocument)?;
        let companion = find_companion(&document, &Control::id(&control))?;
        Ok(Self::new(control, companion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct FakeButton {
        decoration: RefCell<String>,
        classes: RefCell<BTreeSet<String>>,
    }

    impl FakeButton {
        fn with(decoration: &str, classes: &[&str]) -> Self {
            Self {
                decoration: RefCell::new(decoration.to_string()),
                classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            }
        }

        fn classes(&self) -> Vec<String> {
            self.classes.borrow().iter().cloned().collect()
        }
    }

    impl Control for FakeButton {
        fn id(&self) -> String {
            "milk-button".to_string()
        }

        fn text_decoration(&self) -> ToggleResult<String> {
            Ok(self.decoration.borrow().clone())
        }

        fn set_text_decoration(&self, value: &str) -> ToggleResult<()> {
            *self.decoration.borrow_mut() = value.to_string();
            Ok(())
        }

        fn add_class(&self, class: &str) -> ToggleResult<()> {
            self.classes.borrow_mut().insert(class.to_string());
            Ok(())
        }

        fn remove_class(&self, class: &str) -> ToggleResult<()> {
            self.classes.borrow_mut().remove(class);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeField(RefCell<String>);

    impl FakeField {
        fn with(value: &str) -> Self {
            Self(RefCell::new(value.to_string()))
        }
    }

    impl CompanionField for FakeField {
        fn value(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_value(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    fn normal_pair() -> StrikethroughPair<FakeButton, FakeField> {
        StrikethroughPair::new(FakeButton::with("", &["btn-primary"]), FakeField::with("keep"))
    }

    fn marked_pair() -> StrikethroughPair<FakeButton, FakeField> {
        StrikethroughPair::new(
            FakeButton::with("line-through", &["btn-secondary", "item-remove"]),
            FakeField::with("delete"),
        )
    }

    fn assert_consistent(pair: &StrikethroughPair<FakeButton, FakeField>, marked: bool) {
        assert_eq!(pair.control().text_decoration().unwrap() == "line-through", marked);
        assert_eq!(pair.companion().value() == "delete", marked);
        assert_eq!(pair.is_marked().unwrap(), marked);
    }

    #[test]
    fn test_toggle_marks_normal_item() {
        let pair = normal_pair();

        assert!(pair.toggle().unwrap());
        assert_eq!(pair.control().text_decoration().unwrap(), "line-through");
        assert_eq!(pair.control().classes(), vec!["btn-secondary", "item-remove"]);
        assert_eq!(pair.companion().value(), "delete");
    }

    #[test]
    fn test_toggle_unmarks_marked_item() {
        let pair = marked_pair();

        assert!(!pair.toggle().unwrap());
        assert_eq!(pair.control().text_decoration().unwrap(), "");
        assert_eq!(pair.control().classes(), vec!["btn-primary"]);
        assert_eq!(pair.companion().value(), "keep");
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for pair in [normal_pair(), marked_pair()] {
            let decoration = pair.control().text_decoration().unwrap();
            let classes = pair.control().classes();
            let value = pair.companion().value();

            let first = pair.toggle().unwrap();
            let second = pair.toggle().unwrap();

            assert_ne!(first, second);
            assert_eq!(pair.control().text_decoration().unwrap(), decoration);
            assert_eq!(pair.control().classes(), classes);
            assert_eq!(pair.companion().value(), value);
        }
    }

    #[test]
    fn test_return_value_matches_button_and_field() {
        let pair = normal_pair();
        for _ in 0..5 {
            let marked = pair.toggle().unwrap();
            assert_consistent(&pair, marked);
        }
    }

    #[test]
    fn test_field_value_is_not_read() {
        // Field disagrees with the button; the button decides.
        let pair = StrikethroughPair::new(FakeButton::with("", &["btn-primary"]), FakeField::with("delete"));

        assert!(pair.toggle().unwrap());
        assert_eq!(pair.companion().value(), "delete");
        assert_consistent(&pair, true);
    }

    #[test]
    fn test_other_decorations_count_as_normal() {
        let pair = StrikethroughPair::new(FakeButton::with("underline", &[]), FakeField::default());

        assert_eq!(pair.state().unwrap(), ItemState::Keep);
        assert!(pair.toggle().unwrap());
        assert_eq!(pair.control().text_decoration().unwrap(), "line-through");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let pair = normal_pair();

        pair.apply(ItemState::Delete).unwrap();
        pair.apply(ItemState::Delete).unwrap();

        assert_consistent(&pair, true);
        assert_eq!(pair.control().classes(), vec!["btn-secondary", "item-remove"]);
    }

    #[test]
    fn test_custom_style() {
        let style = StrikethroughStyle {
            keep_class: "keep".to_string(),
            delete_class: "drop".to_string(),
            marker_class: "gone".to_string(),
            decoration: "line-through".to_string(),
        };
        let pair = StrikethroughPair::with_style(FakeButton::with("", &["keep"]), FakeField::default(), style);

        assert!(pair.toggle().unwrap());
        assert_eq!(pair.control().classes(), vec!["drop", "gone"]);
    }
}
