//! Hero typing-word animation.
//!
//! Cycles through a word list: type one character per `type_delay`, hold the
//! full word for two `pause` periods, delete one character per
//! `delete_delay`, then move to the next word (wrapping). The driver calls
//! [`TypingWord::pending_delay`], waits that long, then calls
//! [`TypingWord::advance`].

use std::time::Duration;

pub const WORDS: [&str; 4] = ["GoQuick", "Deliveries", "Queues", "Shopping"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_delay: Duration,
    pub pause: Duration,
    pub delete_delay: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            pause: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pause,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct TypingWord<'a> {
    words: &'a [&'a str],
    timings: TypingTimings,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl<'a> TypingWord<'a> {
    /// Returns `None` for an empty word list.
    pub fn new(words: &'a [&'a str], timings: TypingTimings) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            timings,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        })
    }

    fn word(&self) -> &'a str {
        self.words[self.index]
    }

    fn word_len(&self) -> usize {
        self.word().chars().count()
    }

    /// Delay before the next [`advance`](Self::advance) applies.
    pub fn pending_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing if self.visible >= self.word_len() => self.timings.pause,
            Phase::Typing => self.timings.type_delay,
            Phase::Pause => self.timings.pause,
            Phase::Deleting if self.visible == 0 => Duration::ZERO,
            Phase::Deleting => self.timings.delete_delay,
        }
    }

    pub fn advance(&mut self) {
        match self.phase {
            Phase::Typing if self.visible >= self.word_len() => self.phase = Phase::Pause,
            Phase::Typing => self.visible += 1,
            Phase::Pause => self.phase = Phase::Deleting,
            Phase::Deleting if self.visible == 0 => {
                self.index = (self.index + 1) % self.words.len();
                self.phase = Phase::Typing;
            }
            Phase::Deleting => self.visible -= 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.index
    }

    /// Currently visible prefix of the word.
    pub fn text(&self) -> &'a str {
        let word = self.word();
        match word.char_indices().nth(self.visible) {
            Some((byte, _)) => &word[..byte],
            None => word,
        }
    }
}
