//! Single-open toggle state shared by a set of panels.
//!
//! Accordions, dropdowns, and the mobile submenus all use the same rule: at
//! most one key is open; toggling the open key collapses it; toggling any
//! other key replaces it.

use crate::types::{FaqCategory, FaqItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState<K> {
    open: Option<K>,
}

impl<K> Default for ToggleState<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> ToggleState<K> {
    /// All panels closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` open.
    pub fn with_open(key: K) -> Self {
        Self { open: Some(key) }
    }

    /// Collapse `key` if it is open, otherwise make it the open panel.
    pub fn toggle(&mut self, key: K) {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
        } else {
            self.open = Some(key);
        }
    }

    /// Open `key` unconditionally (hover intent).
    pub fn open(&mut self, key: K) {
        self.open = Some(key);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Replace the open panel with `default`, used when the visible set changes.
    pub fn reset(&mut self, default: Option<K>) {
        self.open = default;
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn open_key(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_any_open(&self) -> bool {
        self.open.is_some()
    }
}

/// FAQ list with category chips and a single open answer.
///
/// Panels are keyed by position in the *filtered* list, so changing the
/// category resets the open panel to the first visible item rather than
/// leaving a stale index open.
#[derive(Debug, Clone)]
pub struct FaqAccordion<'a> {
    items: &'a [FaqItem],
    category: FaqCategory,
    panels: ToggleState<usize>,
}

impl<'a> FaqAccordion<'a> {
    pub fn new(items: &'a [FaqItem]) -> Self {
        Self::with_category(items, FaqCategory::All)
    }

    pub fn with_category(items: &'a [FaqItem], category: FaqCategory) -> Self {
        Self {
            items,
            category,
            panels: ToggleState::with_open(0),
        }
    }

    pub fn select_category(&mut self, category: FaqCategory) {
        self.category = category;
        self.panels.reset(Some(0));
    }

    pub fn toggle(&mut self, index: usize) {
        self.panels.toggle(index);
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.panels.is_open(&index)
    }

    pub fn category(&self) -> FaqCategory {
        self.category
    }

    /// Items shown under the current chip, in catalog order.
    pub fn visible(&self) -> Vec<&'a FaqItem> {
        self.items
            .iter()
            .filter(|item| self.category == FaqCategory::All || item.category == self.category)
            .collect()
    }
}
