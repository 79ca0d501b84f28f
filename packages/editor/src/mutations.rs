//! Path-addressed mutations of a structogram.
//!
//! Every operation takes one or more mappings and edits the tree in place.
//! Writes address the *container* named by all but the last mapping index and
//! the slot named by the last one: the top-level list for a one-index
//! mapping, a branch or case sequence, or a loop body reached through the
//! loop statement itself. `If` and `Switch` never act as containers without
//! the extra branch/case index, matching the resolver's addressing.
//!
//! ## Write semantics
//!
//! - An index past the end clamps to the last valid position; [`END`] always
//!   appends, whatever the insert flag says.
//! - Insert mode splices without removing; otherwise exactly one slot is
//!   replaced (a sequence value replaces one slot with many statements).
//! - A move is a delete followed by an insert against the already-deleted
//!   tree, so moving forward within one container lands one slot left of the
//!   pre-delete numbering. That ordering is part of the contract.
//! - A swap exchanges deep clones, never aliases.

use serde::{Deserialize, Serialize};
use structogram_ast::{Statement, Structogram};
use tracing::debug;

use crate::errors::MutationError;
use crate::mapping::{self, Resolved, ResolvedMut, END};

/// Value written by [`set_by_mapping`]: a single statement, a whole
/// sequence, or the absence marker that deletes one element.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteValue {
    Statement(Statement),
    Sequence(Vec<Statement>),
    Remove,
}

impl From<Statement> for WriteValue {
    fn from(statement: Statement) -> Self {
        WriteValue::Statement(statement)
    }
}

impl From<Vec<Statement>> for WriteValue {
    fn from(statements: Vec<Statement>) -> Self {
        WriteValue::Sequence(statements)
    }
}

fn container_mut<'a>(
    doc: &'a mut Structogram,
    parent: &[usize],
) -> Result<&'a mut Vec<Statement>, MutationError> {
    if parent.is_empty() {
        return Ok(&mut doc.statements);
    }
    match mapping::resolve_mut(doc, parent) {
        Some(ResolvedMut::Sequence(sequence)) => Ok(sequence),
        Some(ResolvedMut::Statement(statement)) => match statement {
            Statement::Loop { body, .. } | Statement::ReversedLoop { body, .. } => Ok(body),
            _ => Err(MutationError::unsupported_container(parent)),
        },
        None => Err(MutationError::not_found(parent)),
    }
}

fn container_len(doc: &Structogram, parent: &[usize]) -> Result<usize, MutationError> {
    if parent.is_empty() {
        return Ok(doc.statements.len());
    }
    match mapping::resolve(doc, parent) {
        Some(Resolved::Sequence(sequence)) => Ok(sequence.len()),
        Some(Resolved::Statement(
            Statement::Loop { body, .. } | Statement::ReversedLoop { body, .. },
        )) => Ok(body.len()),
        Some(Resolved::Statement(_)) => Err(MutationError::unsupported_container(parent)),
        None => Err(MutationError::not_found(parent)),
    }
}

fn write_at(container: &mut Vec<Statement>, index: usize, items: Vec<Statement>, insert: bool) {
    if insert || index == END || container.is_empty() {
        let at = index.min(container.len());
        container.splice(at..at, items);
    } else {
        let at = index.min(container.len() - 1);
        container.splice(at..=at, items);
    }
}

/// Write `value` at the slot addressed by `mapping`.
///
/// The container addressed by all but the last index must exist. `Remove`
/// deletes exactly one element and ignores the insert flag.
pub fn set_by_mapping(
    doc: &mut Structogram,
    mapping: &[usize],
    value: impl Into<WriteValue>,
    insert: bool,
) -> Result<(), MutationError> {
    let (&index, parent) = mapping.split_last().ok_or(MutationError::InvalidMapping)?;
    let container = container_mut(doc, parent)?;
    match value.into() {
        WriteValue::Remove => {
            if container.is_empty() {
                return Err(MutationError::not_found(mapping));
            }
            let at = index.min(container.len() - 1);
            container.remove(at);
        }
        WriteValue::Statement(statement) => write_at(container, index, vec![statement], insert),
        WriteValue::Sequence(statements) => write_at(container, index, statements, insert),
    }
    Ok(())
}

/// Delete exactly one element at `mapping`
pub fn remove_by_mapping(doc: &mut Structogram, mapping: &[usize]) -> Result<(), MutationError> {
    set_by_mapping(doc, mapping, WriteValue::Remove, false)
}

/// Relocate the node (or sequence) at `from` to `to`.
///
/// The deletion happens first; `to` is interpreted against the mutated tree.
/// When the destination write fails the removed node is reinserted at its
/// original position, so a failed move never loses data.
pub fn move_to_position(
    doc: &mut Structogram,
    from: &[usize],
    to: &[usize],
    insert: bool,
) -> Result<(), MutationError> {
    ensure_mapping_valid(doc, from)?;
    if to.is_empty() {
        return Err(MutationError::InvalidMapping);
    }
    let value = match mapping::resolve(doc, from) {
        Some(Resolved::Statement(statement)) => WriteValue::Statement(statement.clone()),
        Some(Resolved::Sequence(sequence)) => WriteValue::Sequence(sequence.to_vec()),
        None => return Err(MutationError::not_found(from)),
    };
    let restore = value.clone();
    set_by_mapping(doc, from, WriteValue::Remove, false)?;
    match set_by_mapping(doc, to, value, insert) {
        Ok(()) => Ok(()),
        Err(error) => {
            set_by_mapping(doc, from, restore, true)?;
            Err(error)
        }
    }
}

/// Exchange the two single statements at `left` and `right`.
///
/// Each side must resolve to a statement, not a branch/case sequence. The
/// exchange goes through deep clones so the two slots never alias.
pub fn swap_statements(
    doc: &mut Structogram,
    left: &[usize],
    right: &[usize],
) -> Result<(), MutationError> {
    ensure_mapping_valid(doc, left)?;
    ensure_mapping_valid(doc, right)?;
    let left_statement = match mapping::resolve(doc, left) {
        Some(Resolved::Statement(statement)) => statement.clone(),
        Some(Resolved::Sequence(_)) => return Err(MutationError::type_mismatch(left)),
        None => return Err(MutationError::not_found(left)),
    };
    let right_statement = match mapping::resolve(doc, right) {
        Some(Resolved::Statement(statement)) => statement.clone(),
        Some(Resolved::Sequence(_)) => return Err(MutationError::type_mismatch(right)),
        None => return Err(MutationError::not_found(right)),
    };
    set_by_mapping(doc, left, right_statement, false)?;
    set_by_mapping(doc, right, left_statement, false)
}

/// Precondition guard: the mapping must be non-empty and resolve to an
/// existing node or sequence.
pub fn ensure_mapping_valid(doc: &Structogram, mapping: &[usize]) -> Result<(), MutationError> {
    if mapping.is_empty() {
        return Err(MutationError::InvalidMapping);
    }
    if mapping::resolve(doc, mapping).is_none() {
        return Err(MutationError::not_found(mapping));
    }
    Ok(())
}

/// Serializable editing command mirroring the engine operations, so a front
/// end can queue and ship edits as data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Replace the slot at `mapping` with one statement
    Set {
        mapping: Vec<usize>,
        statement: Statement,
    },

    /// Replace the slot at `mapping` with a whole sequence
    SetMany {
        mapping: Vec<usize>,
        statements: Vec<Statement>,
    },

    /// Splice one statement in at `mapping`, shifting the rest right
    Insert {
        mapping: Vec<usize>,
        statement: Statement,
    },

    /// Delete the element at `mapping`
    Remove { mapping: Vec<usize> },

    /// Relocate the node at `from` to `to`
    Move {
        from: Vec<usize>,
        to: Vec<usize>,
        insert: bool,
    },

    /// Exchange the two single statements at `left` and `right`
    Swap {
        left: Vec<usize>,
        right: Vec<usize>,
    },
}

impl Mutation {
    /// Check preconditions without touching the document
    pub fn validate(&self, doc: &Structogram) -> Result<(), MutationError> {
        match self {
            Mutation::Set { mapping, .. }
            | Mutation::SetMany { mapping, .. }
            | Mutation::Insert { mapping, .. } => {
                let (_, parent) = mapping.split_last().ok_or(MutationError::InvalidMapping)?;
                container_len(doc, parent)?;
                Ok(())
            }
            Mutation::Remove { mapping } => {
                let (_, parent) = mapping.split_last().ok_or(MutationError::InvalidMapping)?;
                if container_len(doc, parent)? == 0 {
                    return Err(MutationError::not_found(mapping));
                }
                Ok(())
            }
            Mutation::Move { from, to, .. } => {
                ensure_mapping_valid(doc, from)?;
                if to.is_empty() {
                    return Err(MutationError::InvalidMapping);
                }
                Ok(())
            }
            Mutation::Swap { left, right } => {
                for mapping in [left, right] {
                    ensure_mapping_valid(doc, mapping)?;
                    if let Some(Resolved::Sequence(_)) = mapping::resolve(doc, mapping) {
                        return Err(MutationError::type_mismatch(mapping));
                    }
                }
                Ok(())
            }
        }
    }

    /// Validate, then apply this command to the document in place
    pub fn apply(&self, doc: &mut Structogram) -> Result<(), MutationError> {
        self.validate(doc)?;
        debug!(mutation = ?self, "applying mutation");

        match self {
            Mutation::Set { mapping, statement } => {
                set_by_mapping(doc, mapping, statement.clone(), false)
            }
            Mutation::SetMany {
                mapping,
                statements,
            } => set_by_mapping(doc, mapping, statements.clone(), false),
            Mutation::Insert { mapping, statement } => {
                set_by_mapping(doc, mapping, statement.clone(), true)
            }
            Mutation::Remove { mapping } => remove_by_mapping(doc, mapping),
            Mutation::Move { from, to, insert } => move_to_position(doc, from, to, *insert),
            Mutation::Swap { left, right } => swap_statements(doc, left, right),
        }
    }
}
