//! # errand-site
//!
//! The GoQuick marketing site: server-rendered pages for an errand-delivery
//! service, a blog backed by a remote content API, a contact form that
//! forwards to the remote API, and a career application endpoint.
//!
//! # Architecture
//!
//! ```text
//! config ──► generate (maud pages) ──► server (axum)  ──► browser
//!                 ▲                └─► export (files)
//!                 │
//!   widgets, nav, section   (state machines: initial state + site.js params)
//!   form, careers, content  (submissions and remote reads)
//! ```
//!
//! Interactive behaviour is modelled as plain Rust state machines. The server
//! renders each widget in its initial state, and `static/site.js` drives the
//! same transitions in the browser with the parameters the page carries.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared value types: `NavItem`, `SectionId`, FAQ and role records |
//! | [`widgets`] | Toggle/accordion, dropdown, typing word, stat counter |
//! | [`section`] | Active-section tracker for the home view |
//! | [`nav`] | Navigation tree, active matching, desktop submenus, mobile drawer |
//! | [`form`] | Async form submitter, field sets, transports |
//! | [`careers`] | Career application endpoint (validate and acknowledge) |
//! | [`content`] | Blog API client with graceful degradation and a detail cache |
//! | [`catalog`] | Static copy: FAQs, roles, steps, services, legal text |
//! | [`config`] | Layered `site.toml` loading, env overrides, validation, theme CSS |
//! | [`generate`] | Page rendering with Maud |
//! | [`sitemap`] | `sitemap.xml` and `robots.txt` |
//! | [`server`] | HTTP routes and handlers |
//! | [`export`] | Static export of every page to a directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Server-Rendered Widgets
//!
//! Every page is complete HTML without JavaScript. Forms post back to the
//! server, which runs the same submitter the browser flow would and renders
//! the status inline. The script only adds transitions.
//!
//! ## Degrade, Don't Fail
//!
//! The content API is an external collaborator. A failed listing renders the
//! empty state; a failed detail fetch renders the not-found page. Nothing the
//! remote side does takes the site down.

pub mod careers;
pub mod catalog;
pub mod config;
pub mod content;
pub mod export;
pub mod form;
pub mod generate;
pub mod nav;
pub mod output;
pub mod section;
pub mod server;
pub mod sitemap;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_helpers;
