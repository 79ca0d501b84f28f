//! Canonical textual encoding of statements and structograms.
//!
//! The wire form is compact JSON with a fixed key order (`type`, `content`,
//! `blocks`/`statements`), so equal trees always serialize to equal text.
//! `serde::Serialize` is implemented by hand on top of [`Statement::to_value`]
//! because a derive cannot express the per-variant key layout.

use crate::ast::{CaseBlock, Statement, Structogram};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

fn sequence_to_value(statements: &[Statement]) -> Value {
    Value::Array(statements.iter().map(Statement::to_value).collect())
}

fn optional_text(content: &Option<String>) -> Value {
    match content {
        Some(text) => Value::String(text.clone()),
        None => Value::Null,
    }
}

impl Statement {
    /// Canonical JSON value for this statement
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.kind().as_tag().to_string()));
        match self {
            Statement::Blank => {}
            Statement::Normal { content } => {
                map.insert("content".to_string(), Value::String(content.clone()));
            }
            Statement::If { content, branches } => {
                map.insert("content".to_string(), optional_text(content));
                let blocks = branches.iter().map(|branch| sequence_to_value(branch)).collect();
                map.insert("blocks".to_string(), Value::Array(blocks));
            }
            Statement::Switch { cases } => {
                let blocks = cases.iter().map(CaseBlock::to_value).collect();
                map.insert("blocks".to_string(), Value::Array(blocks));
            }
            Statement::Loop { content, body } | Statement::ReversedLoop { content, body } => {
                map.insert("content".to_string(), optional_text(content));
                map.insert("statements".to_string(), sequence_to_value(body));
            }
        }
        Value::Object(map)
    }

    /// Canonical text form; pure, no side effects
    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }
}

impl CaseBlock {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("case".to_string(), Value::String(self.label.clone()));
        map.insert("statements".to_string(), sequence_to_value(&self.statements));
        Value::Object(map)
    }
}

impl Structogram {
    /// Canonical JSON value for the whole document
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("signature".to_string(), optional_text(&self.name));
        map.insert("renderStart".to_string(), Value::Bool(self.render_start));
        map.insert("statements".to_string(), sequence_to_value(&self.statements));
        Value::Object(map)
    }

    /// Canonical text form; pure, no side effects
    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for CaseBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for Structogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_has_no_content_key() {
        assert_eq!(Statement::Blank.to_text(), r#"{"type":"empty"}"#);
    }

    #[test]
    fn normal_keeps_key_order() {
        assert_eq!(
            Statement::normal("KI: A").to_text(),
            r#"{"type":"normal","content":"KI: A"}"#
        );
    }

    #[test]
    fn if_serializes_both_branches() {
        let statement = Statement::if_(
            "A > B".to_string(),
            [vec![Statement::normal("KI: A")], vec![]],
        );
        assert_eq!(
            statement.to_text(),
            r#"{"type":"if","content":"A > B","blocks":[[{"type":"normal","content":"KI: A"}],[]]}"#
        );
    }

    #[test]
    fn null_condition_serializes_as_json_null() {
        let statement = Statement::loop_(None::<String>, vec![]);
        assert_eq!(
            statement.to_text(),
            r#"{"type":"loop","content":null,"statements":[]}"#
        );
    }

    #[test]
    fn reversed_loop_uses_its_own_tag() {
        let statement = Statement::reversed_loop("i < 10".to_string(), vec![Statement::Blank]);
        assert_eq!(
            statement.to_text(),
            r#"{"type":"loop-reverse","content":"i < 10","statements":[{"type":"empty"}]}"#
        );
    }

    #[test]
    fn structogram_uses_signature_key() {
        let structogram = Structogram::new(Some("test".to_string()), vec![]);
        assert_eq!(
            structogram.to_text(),
            r#"{"signature":"test","renderStart":false,"statements":[]}"#
        );
    }
}
