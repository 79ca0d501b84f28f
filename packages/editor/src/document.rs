//! # Document Handle
//!
//! A `Document` wraps one structogram and its editing state. Documents can
//! be:
//! - **Memory-backed**: temporary, for testing or in-memory operations
//! - **File-backed**: single-user editing with disk persistence
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Decode → Edit → Encode → Save
//!   ↓       ↓       ↓       ↓       ↓
//! File  Structogram Mutations Text File
//! ```

use std::path::PathBuf;

use structogram_ast::Structogram;
use tracing::debug;

use crate::errors::EditorError;
use crate::mutations::Mutation;

/// Editable structogram document
#[derive(Debug)]
pub struct Document {
    /// Path to the source file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for a document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { structogram: Structogram },

    /// File-backed (single-user editing)
    File {
        structogram: Structogram,
        dirty: bool,
    },
}

impl Document {
    /// Create a document from canonical text (memory-backed)
    pub fn from_source(path: PathBuf, source: &str) -> Result<Self, EditorError> {
        let structogram = Structogram::from_text(source)?;

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory { structogram },
        })
    }

    /// Wrap an already-built structogram (memory-backed)
    pub fn from_structogram(path: PathBuf, structogram: Structogram) -> Self {
        Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory { structogram },
        }
    }

    /// Load a document from a file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let structogram = Structogram::from_text(&source)?;
        debug!(path = %path.display(), "loaded document");

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                structogram,
                dirty: false,
            },
        })
    }

    /// Current structogram
    pub fn structogram(&self) -> &Structogram {
        match &self.storage {
            DocumentStorage::Memory { structogram } => structogram,
            DocumentStorage::File { structogram, .. } => structogram,
        }
    }

    /// Mutable structogram reference (marks file-backed documents dirty)
    pub fn structogram_mut(&mut self) -> &mut Structogram {
        match &mut self.storage {
            DocumentStorage::Memory { structogram } => structogram,
            DocumentStorage::File {
                structogram, dirty, ..
            } => {
                *dirty = true;
                structogram
            }
        }
    }

    /// Apply a mutation; on success the version increments and file-backed
    /// documents become dirty. A rejected mutation changes neither.
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, EditorError> {
        match &mut self.storage {
            DocumentStorage::Memory { structogram } => mutation.apply(structogram)?,
            DocumentStorage::File { structogram, dirty } => {
                mutation.apply(structogram)?;
                *dirty = true;
            }
        }
        self.version += 1;
        Ok(self.version)
    }

    /// Canonical text of the current tree
    pub fn to_text(&self) -> String {
        self.structogram().to_text()
    }

    /// Check whether the document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    /// Save the document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File {
                structogram, dirty, ..
            } => {
                std::fs::write(&self.path, structogram.to_text())?;
                *dirty = false;
                debug!(path = %self.path.display(), "saved document");
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }
}
