//! Select-style dropdown used for the contact form topic.
//!
//! Open/closed is a [`ToggleState<()>`]: one panel, so toggling it is the
//! same single-open rule the accordion uses.

use super::Key;
use super::toggle::ToggleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct Dropdown<'a> {
    options: &'a [DropdownOption],
    placeholder: &'a str,
    value: Option<String>,
    panel: ToggleState<()>,
}

impl<'a> Dropdown<'a> {
    pub fn new(options: &'a [DropdownOption], placeholder: &'a str) -> Self {
        Self {
            options,
            placeholder,
            value: None,
            panel: ToggleState::new(),
        }
    }

    /// Preselect `value`; ignored when it matches no option.
    pub fn with_value(mut self, value: &str) -> Self {
        self.select_value(value);
        self.panel.close();
        self
    }

    pub fn click(&mut self) {
        self.panel.toggle(());
    }

    /// Returns true when the key was handled.
    pub fn key(&mut self, key: Key) -> bool {
        match key {
            k if k.activates() => {
                self.click();
                true
            }
            Key::Escape => {
                self.panel.close();
                true
            }
            _ => false,
        }
    }

    pub fn click_outside(&mut self) {
        self.panel.close();
    }

    /// Select an option and close the list. Unknown values leave state untouched.
    pub fn select_value(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.value = Some(value.to_string());
            self.panel.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_any_open()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    pub fn options(&self) -> &'a [DropdownOption] {
        self.options
    }

    /// Selected option's label, or the placeholder.
    pub fn display_label(&self) -> &str {
        self.value
            .as_deref()
            .and_then(|v| self.options.iter().find(|o| o.value == v))
            .map(|o| o.label)
            .unwrap_or(self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TOPIC_OPTIONS;

    #[test]
    fn shows_placeholder_until_selected() {
        let dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select a topic");
        assert_eq!(dropdown.display_label(), "Select a topic");
        assert_eq!(dropdown.value(), None);
    }

    #[test]
    fn default_value_sets_label_and_stays_closed() {
        let dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select a topic").with_value("support");
        assert_eq!(dropdown.display_label(), "App support / Errand help");
        assert!(!dropdown.is_open());
    }

    #[test]
    fn click_toggles_and_select_closes() {
        let mut dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select");
        dropdown.click();
        assert!(dropdown.is_open());
        assert!(dropdown.select_value("press"));
        assert!(!dropdown.is_open());
        assert!(dropdown.is_selected("press"));
    }

    #[test]
    fn unknown_value_is_rejected() {
        let mut dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select").with_value("runner");
        dropdown.click();
        assert!(!dropdown.select_value("bogus"));
        assert!(dropdown.is_open());
        assert_eq!(dropdown.value(), Some("runner"));
    }

    #[test]
    fn keyboard_contract() {
        let mut dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select");
        assert!(dropdown.key(Key::Space));
        assert!(dropdown.is_open());
        assert!(dropdown.key(Key::Escape));
        assert!(!dropdown.is_open());
        assert!(dropdown.key(Key::Enter));
        assert!(dropdown.is_open());
        assert!(!dropdown.key(Key::Other));
        assert!(dropdown.is_open());
    }

    #[test]
    fn click_outside_closes() {
        let mut dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select");
        dropdown.click();
        dropdown.click_outside();
        assert!(!dropdown.is_open());
    }
}
