//! Typewriter effect that types a word, holds it, erases it and moves on.

use crate::constants::{DELETE_DELAY_MS, NEXT_WORD_DELAY_MS, TYPE_DELAY_MS, WORD_HOLD_MS};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct TypingEffect {
    words: Vec<String>,
    word: usize,
    chars: usize,
    deleting: bool,
}

/// Text to display now and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay: Duration,
}

impl TypingEffect {
    /// `None` when there is nothing to type.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word]
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Add or remove one character and report the delay until the next call.
    pub fn step(&mut self) -> TypingStep {
        let len = self.current_word().chars().count();
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = self.current_word().chars().take(self.chars).collect();

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };
        if !self.deleting && self.chars == len {
            delay_ms = WORD_HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            delay_ms = NEXT_WORD_DELAY_MS;
        }
        TypingStep {
            text,
            delay: Duration::from_millis(delay_ms),
        }
    }
}
