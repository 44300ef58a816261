//! Site navigation: the static nav tree, link resolution, highlight rules,
//! and the interactive menu state.
//!
//! ## Highlighting
//!
//! A link target either names an in-page section (`/`, `/#services`) or a
//! plain path (`/about`). Section links highlight when the home view is
//! showing and the tracker's active id matches; plain paths highlight when
//! they equal the current path. A submenu highlights when any child does.
//!
//! ## Menu state
//!
//! [`NavMenu`] is the single owner of which desktop dropdown is open, which
//! mobile submenu is expanded, whether the drawer is open, and the page
//! scroll lock. Desktop hover and click are two adapters over one
//! [`ToggleState`]: pointer enter/leave send open/close intents, click sends
//! toggle.

use crate::section::ActiveState;
use crate::types::{NavIcon, NavItem, NavMegaItem, SectionId};
use crate::widgets::{Key, ToggleState};
use std::borrow::Cow;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    #[error("duplicate nav label: {0}")]
    DuplicateLabel(String),
    #[error("duplicate submenu target: {0}")]
    DuplicateTarget(String),
}

fn mega(label: &str, target: &str, description: &str, icon: NavIcon) -> NavMegaItem {
    NavMegaItem {
        label: label.to_string(),
        target: target.to_string(),
        description: description.to_string(),
        icon,
    }
}

/// The site's navigation tree, header order.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::link("Features", "/#services"),
        NavItem::Submenu {
            label: "Company".to_string(),
            children: vec![
                mega("About", "/about", "Learn about our mission, vision, and values", NavIcon::Building),
                mega("Careers", "/careers", "Join our team and explore open roles", NavIcon::Briefcase),
                mega("Blog", "/blog", "Read the latest news and insights from GoQuick", NavIcon::Document),
            ],
        },
        NavItem::Submenu {
            label: "Help".to_string(),
            children: vec![
                mega("How it works", "/how-it-works", "See the 6 simple steps to get errands done", NavIcon::Steps),
                mega("FAQ", "/faq", "Find answers to common questions", NavIcon::Question),
                mega("Contact", "/contact", "Get in touch with our support team", NavIcon::Support),
            ],
        },
        NavItem::link("Contact Us", "/contact"),
    ]
}

/// Check the tree's uniqueness rules: top-level labels are distinct, and no
/// two submenu children share a target.
pub fn validate_nav(items: &[NavItem]) -> Result<(), NavError> {
    let mut labels = HashSet::new();
    let mut targets = HashSet::new();
    for item in items {
        if !labels.insert(item.label()) {
            return Err(NavError::DuplicateLabel(item.label().to_string()));
        }
        if let NavItem::Submenu { children, .. } = item {
            for child in children {
                if !targets.insert(child.target.as_str()) {
                    return Err(NavError::DuplicateTarget(child.target.clone()));
                }
            }
        }
    }
    Ok(())
}

/// Bare fragment targets (`#faq`) are rewritten to the home view so they
/// work from any page; everything else passes through.
pub fn resolve_href(target: &str) -> Cow<'_, str> {
    if target.starts_with('#') {
        Cow::Owned(format!("/{target}"))
    } else {
        Cow::Borrowed(target)
    }
}

/// Section a target scrolls to: `/` is `home`, `…#x` is `x`, plain paths
/// have none.
pub fn section_id_from_href(target: &str) -> Option<SectionId> {
    if target == "/" {
        return Some(SectionId::home());
    }
    match target.rsplit_once('#') {
        Some((_, id)) if !id.is_empty() => Some(SectionId::new(id)),
        _ => None,
    }
}

pub fn is_target_active(target: &str, path: &str, active: Option<&SectionId>) -> bool {
    match section_id_from_href(target) {
        Some(id) => path == "/" && active == Some(&id),
        None => path == target,
    }
}

pub fn is_item_active(item: &NavItem, path: &str, active: Option<&SectionId>) -> bool {
    item.targets()
        .into_iter()
        .any(|t| is_target_active(t, path, active))
}

/// Sections the tracker observes: `home` plus every fragment target, in
/// tree order without duplicates.
pub fn home_section_ids(items: &[NavItem]) -> Vec<SectionId> {
    let mut ids = vec![SectionId::home()];
    for target in items.iter().flat_map(NavItem::targets) {
        if let Some(id) = section_id_from_href(target)
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }
    ids
}

/// Children with duplicate labels removed, first occurrence kept.
pub fn unique_children(children: &[NavMegaItem]) -> Vec<&NavMegaItem> {
    let mut seen = HashSet::new();
    children
        .iter()
        .filter(|c| seen.insert(c.label.as_str()))
        .collect()
}

// =============================================================================
// Scroll lock
// =============================================================================

/// Page-side control over background scrolling.
pub trait ScrollHost {
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
}

/// Scroll lock with idempotent acquire/release. Dropping a held lock
/// releases it.
#[derive(Debug)]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    held: bool,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self { host, held: false }
    }

    pub fn acquire(&mut self) {
        if !self.held {
            self.host.lock_scroll();
            self.held = true;
        }
    }

    pub fn release(&mut self) {
        if self.held {
            self.host.unlock_scroll();
            self.held = false;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Menu state
// =============================================================================

/// Which control has keyboard focus when a key arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// A desktop submenu button.
    SubmenuToggle(String),
    /// A submenu button inside the drawer.
    MobileSubmenuToggle(String),
    /// The hamburger button.
    DrawerToggle,
}

#[derive(Debug)]
pub struct NavMenu<H: ScrollHost> {
    items: Vec<NavItem>,
    desktop: ToggleState<String>,
    mobile: ToggleState<String>,
    drawer_open: bool,
    scroll: ScrollLock<H>,
}

impl<H: ScrollHost> NavMenu<H> {
    pub fn new(items: Vec<NavItem>, host: H) -> Self {
        Self {
            items,
            desktop: ToggleState::new(),
            mobile: ToggleState::new(),
            drawer_open: false,
            scroll: ScrollLock::new(host),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    fn is_submenu(&self, label: &str) -> bool {
        self.items
            .iter()
            .any(|i| matches!(i, NavItem::Submenu { label: l, .. } if l == label))
    }

    // ---- desktop ----

    pub fn pointer_enter(&mut self, label: &str) {
        if self.is_submenu(label) {
            self.desktop.open(label.to_string());
        }
    }

    pub fn pointer_leave(&mut self, label: &str) {
        if self.desktop.is_open(&label.to_string()) {
            self.desktop.close();
        }
    }

    /// Touch fallback for hover.
    pub fn click_submenu(&mut self, label: &str) {
        if self.is_submenu(label) {
            self.desktop.toggle(label.to_string());
        }
    }

    pub fn click_outside(&mut self) {
        self.desktop.close();
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.desktop.open_key().map(String::as_str)
    }

    // ---- drawer ----

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
        self.scroll.acquire();
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
        self.scroll.release();
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer_open {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_held()
    }

    pub fn toggle_mobile_submenu(&mut self, label: &str) {
        if self.is_submenu(label) {
            self.mobile.toggle(label.to_string());
        }
    }

    pub fn expanded_mobile(&self) -> Option<&str> {
        self.mobile.open_key().map(String::as_str)
    }

    /// A link was followed: navigation away closes every overlay.
    pub fn follow_link(&mut self) {
        self.desktop.close();
        self.close_drawer();
    }

    /// Returns true when the key was handled.
    pub fn handle_key(&mut self, key: Key, focus: Option<&Focus>) -> bool {
        match (key, focus) {
            (Key::Escape, _) => {
                let was_open = self.desktop.is_any_open() || self.drawer_open;
                self.desktop.close();
                self.close_drawer();
                was_open
            }
            (k, Some(focus)) if k.activates() => {
                match focus {
                    Focus::SubmenuToggle(label) => self.click_submenu(label),
                    Focus::MobileSubmenuToggle(label) => self.toggle_mobile_submenu(label),
                    Focus::DrawerToggle => self.toggle_drawer(),
                }
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, item: &NavItem, path: &str, active: &ActiveState) -> bool {
        is_item_active(item, path, active.id())
    }
}
