//! Dictionary sources: plain word lists and compiled index files.

use std::fs;
use std::io;
use std::path::Path;

use t9_engine::dict::{is_index_file, CandidateIndex, DictError};

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not UTF-8 text")]
    NotText { path: String },

    #[error(transparent)]
    Dict(#[from] DictError),
}

/// Split word-list text into words: one per line, surrounding whitespace
/// trimmed, blank lines skipped, file order kept.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn read_word_list(path: &Path) -> Result<Vec<String>, DictSourceError> {
    let bytes = read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| DictSourceError::NotText {
        path: path.display().to_string(),
    })?;
    Ok(parse_word_list(&text))
}

/// Load an index from either a compiled `.t9ix` file or a plain word list,
/// detected by magic bytes.
pub fn load_index(path: &Path) -> Result<CandidateIndex, DictSourceError> {
    let bytes = read(path)?;
    if is_index_file(&bytes) {
        return Ok(CandidateIndex::from_bytes(&bytes)?);
    }
    let text = String::from_utf8(bytes).map_err(|_| DictSourceError::NotText {
        path: path.display().to_string(),
    })?;
    Ok(CandidateIndex::build(parse_word_list(&text))?)
}

fn read(path: &Path) -> Result<Vec<u8>, DictSourceError> {
    fs::read(path).map_err(|source| DictSourceError::Io {
        path: path.display().to_string(),
        source,
    })
}
