//! Keypad predictive-text engine.
//!
//! Re-exports the keypad encoder, candidate index and settings from
//! `t9_core`, and the key-driven `InputSession` from `t9_session`.
//! `T9Engine` owns one shared index and hands out independent sessions.

mod trace_init;

use std::path::Path;
use std::sync::Arc;

pub use t9_core::{dict, keypad, settings};
pub use t9_session::{InputSession, KeyEvent, KeyResponse, SessionError};
pub use trace_init::init_tracing;

use dict::{CandidateIndex, DictError};

/// Shared, immutable index plus a session factory.
#[derive(Clone)]
pub struct T9Engine {
    index: Arc<CandidateIndex>,
}

impl T9Engine {
    /// Build from dictionary words in order. Fails on the first malformed word.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_index(CandidateIndex::build(words)?))
    }

    /// Open a compiled index file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        Ok(Self::from_index(CandidateIndex::open(path)?))
    }

    pub fn from_index(index: CandidateIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    pub fn index(&self) -> &Arc<CandidateIndex> {
        &self.index
    }

    pub fn new_session(&self) -> InputSession {
        InputSession::new(Arc::clone(&self.index))
    }
}
