//! Shared types used by navigation, rendering, and the HTTP layer.
//!
//! Navigation entries are serializable so `errand-site check` can dump the
//! resolved tree; the catalog types (`FaqItem`, `Role`) are static copy and
//! borrow `'static` strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an in-page scroll target, e.g. `home` or `services`.
///
/// Every section the home view renders with `id="{SectionId}"` can be
/// highlighted by the active-section tracker; a nav target whose section has
/// no matching element is simply never highlighted by scrolling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Identifier representing the top of the home view.
    pub const HOME: &'static str = "home";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self(Self::HOME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Icon shown on a mega-menu card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Building,
    Briefcase,
    Document,
    Steps,
    Question,
    Support,
}

/// A submenu entry: a link with a short description and an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavMegaItem {
    pub label: String,
    pub target: String,
    pub description: String,
    pub icon: NavIcon,
}

/// Navigation tree item: a plain link or a labelled submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Link {
        label: String,
        target: String,
    },
    Submenu {
        label: String,
        children: Vec<NavMegaItem>,
    },
}

impl NavItem {
    pub fn link(label: &str, target: &str) -> Self {
        NavItem::Link {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Link { label, .. } | NavItem::Submenu { label, .. } => label,
        }
    }

    /// Every link target reachable from this item (one for links, one per child for submenus).
    pub fn targets(&self) -> Vec<&str> {
        match self {
            NavItem::Link { target, .. } => vec![target.as_str()],
            NavItem::Submenu { children, .. } => {
                children.iter().map(|c| c.target.as_str()).collect()
            }
        }
    }
}

/// FAQ filter chip. `All` is the unfiltered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaqCategory {
    #[default]
    All,
    Requesters,
    Runners,
    Payments,
    Service,
}

impl FaqCategory {
    /// Chip order on the FAQ section.
    pub const CHIPS: [FaqCategory; 5] = [
        FaqCategory::All,
        FaqCategory::Requesters,
        FaqCategory::Runners,
        FaqCategory::Payments,
        FaqCategory::Service,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::All => "All",
            FaqCategory::Requesters => "For requesters",
            FaqCategory::Runners => "For runners",
            FaqCategory::Payments => "Payments",
            FaqCategory::Service => "Service & areas",
        }
    }

    /// Query-string value (`/faq?category=runners`).
    pub fn slug(self) -> &'static str {
        match self {
            FaqCategory::All => "all",
            FaqCategory::Requesters => "requesters",
            FaqCategory::Runners => "runners",
            FaqCategory::Payments => "payments",
            FaqCategory::Service => "service",
        }
    }

    /// Unknown slugs fall back to `All`.
    pub fn from_slug(slug: &str) -> Self {
        Self::CHIPS
            .into_iter()
            .find(|c| c.slug() == slug)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    /// Never `FaqCategory::All`.
    pub category: FaqCategory,
}

/// An open position listed on the careers page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Role {
    pub title: &'static str,
    pub department: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}
