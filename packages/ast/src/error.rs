use crate::ast::StatementKind;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the document root, found {found}")]
    UnexpectedRoot { found: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("no explicit conversion between {from} and {to}")]
    Undefined {
        from: StatementKind,
        to: StatementKind,
    },
}

impl ConversionError {
    pub fn undefined(from: StatementKind, to: StatementKind) -> Self {
        Self::Undefined { from, to }
    }
}
