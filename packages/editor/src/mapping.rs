//! Path addressing over a structogram tree.
//!
//! A mapping is an ordered list of indices. The first index selects a
//! top-level statement; each later index descends into the node found so
//! far. Descent is deliberately asymmetric: an index into an `If` or
//! `Switch` selects a *branch/case sequence* (one more index is needed to
//! reach an element inside it), while an index into a loop selects an
//! element of the body *directly*. Callers depend on this addressing, so it
//! is never normalized.

use structogram_ast::{Statement, Structogram};

/// Sentinel mapping index: always addresses the position after the last
/// element when writing.
pub const END: usize = usize::MAX;

/// Result of resolving a mapping: either a single statement or one of the
/// sequences owned by an `If`/`Switch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Statement(&'a Statement),
    Sequence(&'a [Statement]),
}

/// Mutable counterpart of [`Resolved`]
#[derive(Debug)]
pub enum ResolvedMut<'a> {
    Statement(&'a mut Statement),
    Sequence(&'a mut Vec<Statement>),
}

/// Parse a human-typed mapping string: everything but digits and `;` is
/// stripped, the rest is split on `;` and parsed. Pieces that are empty
/// (stray or doubled delimiters) or too large for `usize` are dropped.
pub fn parse_mapping(input: &str) -> Vec<usize> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ';')
        .collect();
    cleaned
        .split(';')
        .filter_map(|piece| piece.parse().ok())
        .collect()
}

fn step<'a>(current: Resolved<'a>, index: usize) -> Option<Resolved<'a>> {
    match current {
        Resolved::Sequence(sequence) => sequence.get(index).map(Resolved::Statement),
        Resolved::Statement(statement) => match statement {
            Statement::If { branches, .. } => {
                branches.get(index).map(|branch| Resolved::Sequence(branch))
            }
            Statement::Switch { cases } => cases
                .get(index)
                .map(|case| Resolved::Sequence(&case.statements)),
            Statement::Loop { body, .. } | Statement::ReversedLoop { body, .. } => {
                body.get(index).map(Resolved::Statement)
            }
            Statement::Normal { .. } | Statement::Blank => None,
        },
    }
}

fn step_mut<'a>(current: ResolvedMut<'a>, index: usize) -> Option<ResolvedMut<'a>> {
    match current {
        ResolvedMut::Sequence(sequence) => sequence.get_mut(index).map(ResolvedMut::Statement),
        ResolvedMut::Statement(statement) => match statement {
            Statement::If { branches, .. } => {
                branches.get_mut(index).map(ResolvedMut::Sequence)
            }
            Statement::Switch { cases } => cases
                .get_mut(index)
                .map(|case| ResolvedMut::Sequence(&mut case.statements)),
            Statement::Loop { body, .. } | Statement::ReversedLoop { body, .. } => {
                body.get_mut(index).map(ResolvedMut::Statement)
            }
            Statement::Normal { .. } | Statement::Blank => None,
        },
    }
}

/// Resolve a mapping against the document. An empty mapping resolves to
/// nothing; resolution stops at the first failing step.
pub fn resolve<'a>(doc: &'a Structogram, mapping: &[usize]) -> Option<Resolved<'a>> {
    let (&first, rest) = mapping.split_first()?;
    let mut current = Resolved::Statement(doc.statements.get(first)?);
    for &index in rest {
        current = step(current, index)?;
    }
    Some(current)
}

/// Mutable variant of [`resolve`]
pub fn resolve_mut<'a>(doc: &'a mut Structogram, mapping: &[usize]) -> Option<ResolvedMut<'a>> {
    let (&first, rest) = mapping.split_first()?;
    let mut current = ResolvedMut::Statement(doc.statements.get_mut(first)?);
    for &index in rest {
        current = step_mut(current, index)?;
    }
    Some(current)
}
