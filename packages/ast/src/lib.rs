//! Statement variant model of a structogram, its canonical JSON text form,
//! and the best-effort conversions between variants.
//!
//! The editing engine (path addressing and mutations) lives in the companion
//! `structogram-editor` crate; this crate is purely the data model and its
//! wire contract.

pub mod ast;
pub mod convert;
pub mod error;

mod deserializer;
mod serializer;

pub use ast::{CaseBlock, Statement, StatementKind, Structogram};
pub use error::{ConversionError, ParseError, ParseResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip_smoke() {
        let text = r#"{"type":"normal","content":"KI: A"}"#;
        let statement = Statement::from_text(text).unwrap();
        assert_eq!(statement.to_text(), text);
    }
}
