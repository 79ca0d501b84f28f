//! # Structogram Editor
//!
//! Path-addressed editing engine for structogram documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ structogram-ast: text ⇄ statement tree      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Resolve mappings (integer paths)         │
//! │  - Apply mutations with validation          │
//! │  - Load/save documents                      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The engine is single-threaded and synchronous: every mutation is a direct
//! in-place edit, and a document never shares its tree. Callers editing one
//! document from several threads must serialize access themselves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use structogram_editor::{Document, Mutation, parse_mapping};
//!
//! let mut doc = Document::load("sample.json".into())?;
//!
//! let mutation = Mutation::Swap {
//!     left: parse_mapping("0;1"),
//!     right: parse_mapping("0;2"),
//! };
//! doc.apply(mutation)?;
//!
//! doc.save()?;
//! ```

mod document;
mod errors;
mod mapping;
mod mutations;

pub use document::{Document, DocumentStorage};
pub use errors::{EditorError, MutationError};
pub use mapping::{parse_mapping, resolve, resolve_mut, Resolved, ResolvedMut, END};
pub use mutations::{
    ensure_mapping_valid, move_to_position, remove_by_mapping, set_by_mapping, swap_statements,
    Mutation, WriteValue,
};

// Re-export the model types for convenience
pub use structogram_ast::{CaseBlock, Statement, StatementKind, Structogram};
