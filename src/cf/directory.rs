//! Directory of named row payloads.
//!
//! A directory is built once from a container and is read-only afterwards.
//! Rows whose body starts with the nested-container marker become
//! sub-directories; every other row becomes an opaque [`Payload`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use log::{debug, info, warn};

use super::reader::Container;
use super::types::error::{CfError, Result};
use super::types::models::{ContainerMode, UTF8_BOM};
use super::types::options::DecodeOptions;

/// Raw bytes of a row that is not itself a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the payload starts with a UTF-8 byte-order marker.
    pub fn has_bom(&self) -> bool {
        self.bytes.starts_with(UTF8_BOM)
    }

    /// The bytes reinterpreted as UTF-8 text, byte-order marker included.
    ///
    /// Borrows when the bytes are valid UTF-8; invalid sequences are
    /// replaced with U+FFFD otherwise, which shifts every later offset.
    /// A structural index built over the result addresses the returned
    /// text, not the payload bytes.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Decodes the payload as text, honouring and stripping a byte-order
    /// marker (UTF-8 when none is present).
    pub fn decode_text(&self) -> Cow<'_, str> {
        let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(&self.bytes);
        if had_errors {
            debug!("Payload text had invalid {} sequences", encoding.name());
        }
        text
    }
}

/// A directory slot: either a payload or a nested directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Payload(Payload),
    Directory(Directory),
}

impl Entry {
    pub fn as_payload(&self) -> Option<&Payload> {
        match self {
            Entry::Payload(payload) => Some(payload),
            Entry::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(directory) => Some(directory),
            Entry::Payload(_) => None,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }
}

/// Identifier-to-entry mapping decoded from one container level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Entry)>,
    by_id: HashMap<String, usize>,
}

impl Directory {
    /// Decode a top-level container (compressed bodies).
    pub fn open(bytes: &[u8]) -> Result<Self> {
        Self::open_with(bytes, &DecodeOptions::default())
    }

    /// Decode a container with explicit options.
    ///
    /// # Errors
    /// Any corrupted row aborts the whole build; no partially populated
    /// directory is returned.
    pub fn open_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
        let container = Container::new(bytes, options.mode);
        let directory = Self::build(&container, options, 0)?;
        info!("Directory decoded: {} top-level entries", directory.len());
        Ok(directory)
    }

    /// Read a container file and decode it (compressed bodies).
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_file_with(path, &DecodeOptions::default())
    }

    pub fn open_file_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening container file: {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::open_with(&bytes, options)
    }

    fn build(container: &Container<'_>, options: &DecodeOptions, depth: usize) -> Result<Self> {
        if depth > options.max_container_depth {
            return Err(CfError::NestingTooDeep {
                limit: options.max_container_depth,
            });
        }

        let mut directory = Self::default();
        for row in container.rows()? {
            let row = row?;
            let entry = if row.is_nested_container() {
                debug!("Row {:?} holds a nested container ({} bytes)", row.id, row.body.len());
                let nested = Container::new(&row.body, ContainerMode::Raw);
                Entry::Directory(Self::build(&nested, options, depth + 1)?)
            } else {
                Entry::Payload(Payload::new(row.body))
            };
            directory.insert(row.id, entry);
        }
        Ok(directory)
    }

    fn insert(&mut self, id: String, entry: Entry) {
        if let Some(&slot) = self.by_id.get(&id) {
            warn!("Duplicate row identifier {:?}; keeping the later row", id);
            self.entries[slot].1 = entry;
            return;
        }
        self.by_id.insert(id.clone(), self.entries.len());
        self.entries.push((id, entry));
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&slot| &self.entries[slot].1)
    }

    /// Look up a payload entry; `None` if absent or a sub-directory.
    pub fn payload(&self, id: &str) -> Option<&Payload> {
        self.get(id).and_then(Entry::as_payload)
    }

    /// Look up a sub-directory entry; `None` if absent or a payload.
    pub fn directory(&self, id: &str) -> Option<&Directory> {
        self.get(id).and_then(Entry::as_directory)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order the container's pointer table lists them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Identifiers in pointer-table order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}
