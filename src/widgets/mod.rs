//! Presentational widget state machines.
//!
//! Each widget is plain synchronous state: the server renders its initial
//! state, and `static/site.js` applies the same transitions in the browser.
//! Transitions run to completion; none of them can fail.
//!
//! | Module | Widget |
//! |--------|--------|
//! | [`toggle`] | Single-open toggle state, FAQ accordion |
//! | [`dropdown`] | Select-style dropdown (contact topic) |
//! | [`typing`] | Hero typing-word animation |
//! | [`counter`] | Animated stat counters |

pub mod counter;
pub mod dropdown;
pub mod toggle;
pub mod typing;

pub use toggle::{FaqAccordion, ToggleState};

/// Keyboard input relevant to the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Enter and Space activate a focused toggle like a pointer click.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}
