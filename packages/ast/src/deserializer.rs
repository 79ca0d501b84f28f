//! Lenient decoding of the canonical textual form.
//!
//! Decoding never rejects a structurally odd statement: unknown or missing
//! type tags fall back to a blank (promoted to a normal statement when a
//! non-null `content` is present), missing child arrays decode as empty,
//! `if` blocks are cut or padded to exactly two branches, and a `switch` is
//! padded to the two-case minimum with a synthetic `else`. Only text that is
//! not valid JSON at all fails.

use crate::ast::{CaseBlock, Statement, StatementKind, Structogram};
use crate::error::{ParseError, ParseResult};
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde_json::Value;

fn content_of(value: &Value) -> Option<String> {
    value
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn sequence_of(value: &Value, key: &str) -> Vec<Statement> {
    match value.get(key) {
        Some(Value::Array(items)) => items.iter().map(Statement::from_value).collect(),
        _ => Vec::new(),
    }
}

fn case_of(value: &Value) -> CaseBlock {
    let label = value
        .get("case")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    CaseBlock::new(label, sequence_of(value, "statements"))
}

impl Statement {
    /// Decode a statement from an already-parsed JSON value
    pub fn from_value(value: &Value) -> Statement {
        let tag = value.get("type").and_then(Value::as_str).unwrap_or_default();
        match StatementKind::from_tag(tag) {
            StatementKind::Normal => Statement::Normal {
                content: content_of(value).unwrap_or_default(),
            },
            StatementKind::If => {
                let mut blocks: Vec<Vec<Statement>> = match value.get("blocks") {
                    Some(Value::Array(branches)) => branches
                        .iter()
                        .take(2)
                        .map(|branch| match branch {
                            Value::Array(items) => {
                                items.iter().map(Statement::from_value).collect()
                            }
                            _ => Vec::new(),
                        })
                        .collect(),
                    _ => Vec::new(),
                };
                blocks.resize(2, Vec::new());
                let false_branch = blocks.pop().unwrap_or_default();
                let true_branch = blocks.pop().unwrap_or_default();
                Statement::If {
                    content: content_of(value),
                    branches: [true_branch, false_branch],
                }
            }
            StatementKind::Switch => {
                let mut cases: Vec<CaseBlock> = match value.get("blocks") {
                    Some(Value::Array(blocks)) => blocks.iter().map(case_of).collect(),
                    _ => Vec::new(),
                };
                while cases.len() < 2 {
                    cases.push(CaseBlock::new("else", Vec::new()));
                }
                Statement::Switch { cases }
            }
            StatementKind::Loop => Statement::Loop {
                content: content_of(value),
                body: sequence_of(value, "statements"),
            },
            StatementKind::ReversedLoop => Statement::ReversedLoop {
                content: content_of(value),
                body: sequence_of(value, "statements"),
            },
            StatementKind::Blank => Statement::from_content(content_of(value)),
        }
    }

    /// Decode a statement from canonical text
    pub fn from_text(text: &str) -> ParseResult<Statement> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Statement::from_value(&value))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Structogram {
    /// Decode a whole document from an already-parsed JSON value
    pub fn from_value(value: &Value) -> ParseResult<Structogram> {
        if !value.is_object() {
            return Err(ParseError::UnexpectedRoot {
                found: json_type_name(value),
            });
        }
        let name = value
            .get("signature")
            .and_then(Value::as_str)
            .map(str::to_string);
        let mut structogram = Structogram::new(name, sequence_of(value, "statements"));
        structogram.render_start = value.get("renderStart") == Some(&Value::Bool(true));
        Ok(structogram)
    }

    /// Decode a whole document from canonical text
    pub fn from_text(text: &str) -> ParseResult<Structogram> {
        let value: Value = serde_json::from_str(text)?;
        Structogram::from_value(&value)
    }
}

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Statement::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for CaseBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(case_of(&value))
    }
}

impl<'de> Deserialize<'de> for Structogram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Structogram::from_value(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_blank() {
        assert_eq!(Statement::from_text("{}").unwrap(), Statement::Blank);
        assert_eq!(
            Statement::from_text(r#"{"type":"empty"}"#).unwrap(),
            Statement::Blank
        );
    }

    #[test]
    fn unknown_type_with_content_promotes_to_normal() {
        assert_eq!(
            Statement::from_text(r#"{"type":"whatever","content":"F"}"#).unwrap(),
            Statement::normal("F")
        );
        assert_eq!(
            Statement::from_text(r#"{"content":"F"}"#).unwrap(),
            Statement::normal("F")
        );
        assert_eq!(
            Statement::from_text(r#"{"type":"whatever","content":null}"#).unwrap(),
            Statement::Blank
        );
    }

    #[test]
    fn if_pads_missing_branches() {
        let statement = Statement::from_text(r#"{"type":"if","content":"C","blocks":[]}"#).unwrap();
        assert_eq!(
            statement,
            Statement::if_("C".to_string(), [vec![], vec![]])
        );

        let statement = Statement::from_text(
            r#"{"type":"if","content":"C","blocks":[[{"type":"normal","content":"A"}]]}"#,
        )
        .unwrap();
        assert_eq!(
            statement,
            Statement::if_("C".to_string(), [vec![Statement::normal("A")], vec![]])
        );
    }

    #[test]
    fn if_drops_extra_branches() {
        let statement = Statement::from_text(
            r#"{"type":"if","content":"C","blocks":[[],[],[{"type":"normal","content":"X"}]]}"#,
        )
        .unwrap();
        assert_eq!(statement, Statement::if_("C".to_string(), [vec![], vec![]]));
    }

    #[test]
    fn switch_pads_to_two_cases() {
        let statement = Statement::from_text(r#"{"type":"switch","blocks":[]}"#).unwrap();
        match &statement {
            Statement::Switch { cases } => {
                assert_eq!(cases.len(), 2);
                assert_eq!(cases[1].label, "else");
                assert!(cases[1].statements.is_empty());
            }
            other => panic!("expected switch, got {other:?}"),
        }

        let statement = Statement::from_text(
            r#"{"type":"switch","blocks":[{"case":"A = 1","statements":[]}]}"#,
        )
        .unwrap();
        match &statement {
            Statement::Switch { cases } => {
                assert_eq!(cases.len(), 2);
                assert_eq!(cases[0].label, "A = 1");
                assert_eq!(cases[1].label, "else");
            }
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn loop_without_statements_key_is_empty() {
        assert_eq!(
            Statement::from_text(r#"{"type":"loop","content":"i < N"}"#).unwrap(),
            Statement::loop_("i < N".to_string(), vec![])
        );
    }

    #[test]
    fn render_start_must_be_exactly_true() {
        let doc = Structogram::from_text(r#"{"signature":null,"renderStart":1,"statements":[]}"#)
            .unwrap();
        assert!(!doc.render_start);
        let doc = Structogram::from_text(r#"{"signature":null,"renderStart":true,"statements":[]}"#)
            .unwrap();
        assert!(doc.render_start);
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(Structogram::from_text("[1,2]").is_err());
        assert!(Structogram::from_text("not json").is_err());
    }
}
