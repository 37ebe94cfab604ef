//! Candidate index storage.
//!
//! `CandidateIndex` is a digit-keyed prefix automaton built once from an
//! ordered word list. Every node lists the words whose key sequence passes
//! through it, so any typed prefix resolves to all compatible words.

mod candidate_index;
mod index_io;
#[cfg(test)]
mod tests;

pub use candidate_index::{CandidateIndex, IndexStats};
pub use index_io::is_index_file;

use std::io;

/// Errors raised while building, loading or saving a `CandidateIndex`.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("invalid dictionary word {word:?}: unexpected character {ch:?}")]
    InvalidWord { word: String, ch: char },

    #[error("dictionary too large: {0}")]
    TooLarge(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected T9IX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (expected {expected:#010x}, got {actual:#010x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("corrupt index: {0}")]
    Corrupt(String),
}
