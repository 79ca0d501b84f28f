//! Best-effort conversions between statement variants.
//!
//! Conversions are deterministic and lossy where the shapes do not line up;
//! pairs outside the table below signal [`ConversionError`] instead of
//! silently coercing.

use crate::ast::{CaseBlock, Statement, StatementKind};
use crate::error::ConversionError;

/// Convert any statement into an `If`.
///
/// A `Switch` contributes its first case as the condition and true branch;
/// the last case feeds the false branch only when it is labelled exactly
/// `"else"` and at least two cases exist. Loops contribute their condition
/// and body; a blank or normal statement yields an `If` with empty branches.
pub fn to_if(statement: &Statement) -> Statement {
    match statement {
        Statement::If { .. } => statement.clone(),
        Statement::Switch { cases } => {
            let content = cases.first().map(|case| case.label.clone());
            let true_branch = cases
                .first()
                .map(|case| case.statements.clone())
                .unwrap_or_default();
            let false_branch = match cases.last() {
                Some(last) if cases.len() >= 2 && last.label == "else" => {
                    last.statements.clone()
                }
                _ => Vec::new(),
            };
            Statement::If {
                content,
                branches: [true_branch, false_branch],
            }
        }
        Statement::Loop { content, body } | Statement::ReversedLoop { content, body } => {
            Statement::If {
                content: content.clone(),
                branches: [body.clone(), Vec::new()],
            }
        }
        Statement::Normal { content } => Statement::If {
            content: Some(content.clone()),
            branches: [Vec::new(), Vec::new()],
        },
        Statement::Blank => Statement::If {
            content: None,
            branches: [Vec::new(), Vec::new()],
        },
    }
}

/// Convert an `If`, `Normal` or `Blank` statement into a `Switch`.
pub fn to_switch(statement: &Statement) -> Result<Statement, ConversionError> {
    match statement {
        Statement::If { content, branches } => Ok(Statement::Switch {
            cases: vec![
                CaseBlock::new(content.clone().unwrap_or_default(), branches[0].clone()),
                CaseBlock::new("else", branches[1].clone()),
            ],
        }),
        Statement::Normal { .. } | Statement::Blank => {
            Ok(Statement::Switch { cases: Vec::new() })
        }
        other => Err(ConversionError::undefined(
            other.kind(),
            StatementKind::Switch,
        )),
    }
}

/// Convert a `ReversedLoop`, `Normal` or `Blank` statement into a pre-test loop.
pub fn to_loop(statement: &Statement) -> Result<Statement, ConversionError> {
    match statement {
        Statement::ReversedLoop { content, body } => Ok(Statement::Loop {
            content: content.clone(),
            body: body.clone(),
        }),
        Statement::Normal { content } => Ok(Statement::Loop {
            content: Some(content.clone()),
            body: Vec::new(),
        }),
        Statement::Blank => Ok(Statement::Loop {
            content: None,
            body: Vec::new(),
        }),
        other => Err(ConversionError::undefined(other.kind(), StatementKind::Loop)),
    }
}

/// Convert a `Loop`, `Normal` or `Blank` statement into a post-test loop.
pub fn to_reversed_loop(statement: &Statement) -> Result<Statement, ConversionError> {
    match statement {
        Statement::Loop { content, body } => Ok(Statement::ReversedLoop {
            content: content.clone(),
            body: body.clone(),
        }),
        Statement::Normal { content } => Ok(Statement::ReversedLoop {
            content: Some(content.clone()),
            body: Vec::new(),
        }),
        Statement::Blank => Ok(Statement::ReversedLoop {
            content: None,
            body: Vec::new(),
        }),
        other => Err(ConversionError::undefined(
            other.kind(),
            StatementKind::ReversedLoop,
        )),
    }
}

/// Decompose an `If` into a flat sequence: a loop wrapping the true branch
/// (same condition), followed by the false-branch statements promoted one
/// level up.
pub fn if_to_loop_scope(statement: &Statement) -> Result<Vec<Statement>, ConversionError> {
    match statement {
        Statement::If { content, branches } => {
            let mut scope = vec![Statement::Loop {
                content: content.clone(),
                body: branches[0].clone(),
            }];
            scope.extend(branches[1].iter().cloned());
            Ok(scope)
        }
        other => Err(ConversionError::undefined(other.kind(), StatementKind::Loop)),
    }
}
