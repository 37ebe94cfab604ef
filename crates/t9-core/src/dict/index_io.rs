use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::candidate_index::CandidateIndex;
use super::DictError;

const MAGIC: &[u8; 4] = b"T9IX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + payload_len + crc32 = 13

/// Whether `data` starts with the compiled index magic bytes.
pub fn is_index_file(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && &data[..MAGIC.len()] == MAGIC
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[at..at + 4]);
    u32::from_le_bytes(buf)
}

impl CandidateIndex {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let payload = bincode::serialize(self).map_err(DictError::Serialize)?;
        let payload_len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| DictError::TooLarge("payload exceeds u32::MAX"))?;
        let checksum = crc32fast::hash(&payload);

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&checksum.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if !is_index_file(data) {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let payload_len = read_u32(data, 5) as usize;
        let expected = read_u32(data, 9);
        if data.len() < HEADER_SIZE + payload_len {
            return Err(DictError::InvalidHeader);
        }
        if data.len() > HEADER_SIZE + payload_len {
            return Err(DictError::Corrupt(format!(
                "{} trailing bytes after payload",
                data.len() - HEADER_SIZE - payload_len
            )));
        }
        let payload = &data[HEADER_SIZE..HEADER_SIZE + payload_len];

        let actual = crc32fast::hash(payload);
        if actual != expected {
            return Err(DictError::ChecksumMismatch { expected, actual });
        }

        let index: CandidateIndex =
            bincode::deserialize(payload).map_err(DictError::Deserialize)?;
        index.validate()?;
        Ok(index)
    }

    /// Open a compiled index file through a read-only memory map.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }

    /// The arena must be exactly what `build` produces from the stored word
    /// list: one parent per node, and every terminal sitting on a prefix of
    /// its own word's key sequence.
    fn validate(&self) -> Result<(), DictError> {
        if self.nodes.is_empty() {
            return Err(DictError::Corrupt("missing root node".to_string()));
        }
        let rebuilt = CandidateIndex::build(self.words.iter().map(String::as_str))?;
        if rebuilt.nodes.len() != self.nodes.len() {
            return Err(DictError::Corrupt(format!(
                "expected {} nodes, found {}",
                rebuilt.nodes.len(),
                self.nodes.len()
            )));
        }
        if let Some(i) = (0..self.nodes.len()).find(|&i| rebuilt.nodes[i] != self.nodes[i]) {
            return Err(DictError::Corrupt(format!(
                "node {i} does not match the word list"
            )));
        }
        Ok(())
    }
}
