use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use super::DictError;
use crate::keypad::{digit_slot, key_slots, KEY_COUNT};

/// Child slot value meaning "no child". The root is node 0 and is never a child.
pub(super) const NO_CHILD: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct Node {
    /// Child node per key digit `2`..=`9`.
    pub(super) children: [u32; KEY_COUNT],
    /// Word ids reaching this depth along their own key path, in insertion order.
    pub(super) terminals: Vec<u32>,
}

/// Prefix automaton over key digit sequences.
///
/// Nodes live in a single arena and reference their children by index.
/// The index is immutable once built, so one instance can be shared across
/// sessions behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateIndex {
    pub(super) words: Vec<String>,
    pub(super) nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub words: usize,
    pub nodes: usize,
    /// Total terminal entries across all nodes (sum of word lengths).
    pub terminals: usize,
}

impl CandidateIndex {
    /// Build the index from words in dictionary order.
    ///
    /// That order is the candidate cycling order and is kept as-is. Duplicate
    /// words are kept too and surface as repeated candidates. An empty word is
    /// stored but has no key path, so it is never a candidate. A word with any
    /// character outside `a`..=`z` fails the whole build.
    pub fn build<I, S>(words: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _span = debug_span!("build_index").entered();

        let mut index = Self {
            words: Vec::new(),
            nodes: vec![Node::default()],
        };
        for word in words {
            index.insert(word.into())?;
        }

        debug!(
            words = index.words.len(),
            nodes = index.nodes.len(),
            terminals = index.stats().terminals
        );
        Ok(index)
    }

    fn insert(&mut self, word: String) -> Result<(), DictError> {
        let slots = match key_slots(&word) {
            Ok(slots) => slots,
            Err(ch) => return Err(DictError::InvalidWord { word, ch }),
        };
        let word_id =
            u32::try_from(self.words.len()).map_err(|_| DictError::TooLarge("word count"))?;

        let mut cur = 0usize;
        for slot in slots {
            let child = self.nodes[cur].children[slot];
            let next = if child == NO_CHILD {
                let id = u32::try_from(self.nodes.len())
                    .map_err(|_| DictError::TooLarge("node count"))?;
                self.nodes.push(Node::default());
                self.nodes[cur].children[slot] = id;
                id as usize
            } else {
                child as usize
            };
            // Every depth along the path, not only the last one.
            self.nodes[next].terminals.push(word_id);
            cur = next;
        }

        self.words.push(word);
        Ok(())
    }

    fn find(&self, digits: &str) -> Option<&Node> {
        let mut node = &self.nodes[0];
        for c in digits.chars() {
            let child = node.children[digit_slot(c)?];
            if child == NO_CHILD {
                return None;
            }
            node = &self.nodes[child as usize];
        }
        Some(node)
    }

    /// Words consistent with the typed digit prefix, in dictionary order.
    ///
    /// An unknown prefix, or one containing anything but `2`..=`9`, yields
    /// an empty list.
    pub fn lookup(&self, digits: &str) -> Vec<&str> {
        self.find(digits)
            .map(|node| {
                node.terminals
                    .iter()
                    .map(|&id| self.words[id as usize].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of candidates for a prefix without materializing them.
    pub fn lookup_count(&self, digits: &str) -> usize {
        self.find(digits).map_or(0, |node| node.terminals.len())
    }

    /// Whether any dictionary word's key sequence starts with `digits`.
    pub fn contains_prefix(&self, digits: &str) -> bool {
        self.lookup_count(digits) > 0
    }

    /// Dictionary words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.words.len(),
            nodes: self.nodes.len(),
            terminals: self.nodes.iter().map(|n| n.terminals.len()).sum(),
        }
    }
}
