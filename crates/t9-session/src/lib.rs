//! Stateful keypad session managing the digit buffer, candidate selection and
//! the confirmed sentence.
//!
//! `InputSession` owns the in-progress entry and processes each key press
//! against a shared, immutable `CandidateIndex`. Hosts that share one session
//! between threads must serialize key events themselves.

pub(crate) mod types;

mod key_handlers;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use t9_core::dict::CandidateIndex;

pub use types::{KeyEvent, KeyResponse, SessionError};

use types::CandidateState;

/// Keypad input session.
pub struct InputSession {
    index: Arc<CandidateIndex>,

    /// Digits typed since the last confirm or clear.
    digits: String,
    candidates: CandidateState,
    /// Confirmed words, oldest first.
    sentence: Vec<String>,
}

impl InputSession {
    pub fn new(index: Arc<CandidateIndex>) -> Self {
        Self {
            index,
            digits: String::new(),
            candidates: CandidateState::new(),
            sentence: Vec::new(),
        }
    }

    /// Process one key character and return the display string.
    ///
    /// An invalid key leaves the session untouched.
    pub fn push_key(&mut self, key: char) -> Result<String, SessionError> {
        let event = KeyEvent::try_from(key)?;
        Ok(self.handle_key(event)?.display)
    }

    /// Drop the pending digits and candidates. The sentence is kept.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.candidates.clear();
    }

    /// Hand the confirmed words to the caller and start a new sentence.
    pub fn take_sentence(&mut self) -> Vec<String> {
        std::mem::take(&mut self.sentence)
    }

    pub fn is_composing(&self) -> bool {
        !self.digits.is_empty()
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates.surfaces
    }

    /// Index of the displayed alternative within `candidates()`.
    pub fn selected(&self) -> usize {
        self.candidates.selected
    }

    pub fn sentence(&self) -> &[String] {
        &self.sentence
    }

    pub fn index(&self) -> &Arc<CandidateIndex> {
        &self.index
    }
}
