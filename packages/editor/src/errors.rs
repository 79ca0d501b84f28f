//! Error types for the editor

use thiserror::Error;

/// Contract violations raised by the mutation engine.
///
/// Pure queries return `Option` instead; these errors are reserved for
/// mutating operations whose preconditions do not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("no statement at mapping {mapping:?}")]
    NotFound { mapping: Vec<usize> },

    #[error("mapping must contain at least one index")]
    InvalidMapping,

    #[error("statement at {mapping:?} cannot hold children without a branch or case index")]
    UnsupportedContainer { mapping: Vec<usize> },

    #[error("one of the statements is an array (mapping {mapping:?})")]
    TypeMismatch { mapping: Vec<usize> },
}

impl MutationError {
    pub fn not_found(mapping: &[usize]) -> Self {
        Self::NotFound {
            mapping: mapping.to_vec(),
        }
    }

    pub fn unsupported_container(mapping: &[usize]) -> Self {
        Self::UnsupportedContainer {
            mapping: mapping.to_vec(),
        }
    }

    pub fn type_mismatch(mapping: &[usize]) -> Self {
        Self::TypeMismatch {
            mapping: mapping.to_vec(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("parse error: {0}")]
    Parse(#[from] structogram_ast::ParseError),

    #[error("mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document is not file-backed")]
    NotFileBacked,
}
