use std::fmt;

/// A single node of a structogram: one pseudocode statement.
///
/// The tree is built from plain owned sequences; a statement is always owned
/// by exactly one container (a branch, a case, a loop body, or the
/// structogram's top-level list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Placeholder with no content
    Blank,

    /// A single textual action
    Normal { content: String },

    /// Binary junction: branch 0 is the true part, branch 1 the false part.
    /// Both branches always exist, either may be empty.
    If {
        content: Option<String>,
        branches: [Vec<Statement>; 2],
    },

    /// Multi-way junction; the discriminant lives in each case's label
    Switch { cases: Vec<CaseBlock> },

    /// Repetition with the condition tested before each pass
    Loop {
        content: Option<String>,
        body: Vec<Statement>,
    },

    /// Repetition with the condition tested after each pass
    ReversedLoop {
        content: Option<String>,
        body: Vec<Statement>,
    },
}

/// One labelled alternative of a `Switch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBlock {
    pub label: String,
    pub statements: Vec<Statement>,
}

/// Type tag of a statement, as it appears in the serialized form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Blank,
    Normal,
    If,
    Switch,
    Loop,
    ReversedLoop,
}

/// Root document: a named, ordered list of top-level statements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Structogram {
    pub name: Option<String>,
    pub render_start: bool,
    pub statements: Vec<Statement>,
}

impl Statement {
    /// Build a statement from optional content alone: `None` is a blank,
    /// anything else a normal statement.
    pub fn from_content(content: Option<String>) -> Self {
        match content {
            Some(content) => Statement::Normal { content },
            None => Statement::Blank,
        }
    }

    pub fn normal(content: impl Into<String>) -> Self {
        Statement::Normal {
            content: content.into(),
        }
    }

    pub fn if_(content: impl Into<Option<String>>, branches: [Vec<Statement>; 2]) -> Self {
        Statement::If {
            content: content.into(),
            branches,
        }
    }

    pub fn switch(cases: Vec<CaseBlock>) -> Self {
        Statement::Switch { cases }
    }

    pub fn loop_(content: impl Into<Option<String>>, body: Vec<Statement>) -> Self {
        Statement::Loop {
            content: content.into(),
            body,
        }
    }

    pub fn reversed_loop(content: impl Into<Option<String>>, body: Vec<Statement>) -> Self {
        Statement::ReversedLoop {
            content: content.into(),
            body,
        }
    }

    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Blank => StatementKind::Blank,
            Statement::Normal { .. } => StatementKind::Normal,
            Statement::If { .. } => StatementKind::If,
            Statement::Switch { .. } => StatementKind::Switch,
            Statement::Loop { .. } => StatementKind::Loop,
            Statement::ReversedLoop { .. } => StatementKind::ReversedLoop,
        }
    }

    /// Textual content of the statement, if its variant carries one
    pub fn content(&self) -> Option<&str> {
        match self {
            Statement::Normal { content } => Some(content),
            Statement::If { content, .. }
            | Statement::Loop { content, .. }
            | Statement::ReversedLoop { content, .. } => content.as_deref(),
            Statement::Blank | Statement::Switch { .. } => None,
        }
    }
}

impl StatementKind {
    /// Serialized type string for this kind
    pub fn as_tag(self) -> &'static str {
        match self {
            StatementKind::Blank => "empty",
            StatementKind::Normal => "normal",
            StatementKind::If => "if",
            StatementKind::Switch => "switch",
            StatementKind::Loop => "loop",
            StatementKind::ReversedLoop => "loop-reverse",
        }
    }

    /// Kind for a serialized type string; unknown tags map to `Blank`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "normal" => StatementKind::Normal,
            "if" => StatementKind::If,
            "switch" => StatementKind::Switch,
            "loop" => StatementKind::Loop,
            "loop-reverse" => StatementKind::ReversedLoop,
            _ => StatementKind::Blank,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl CaseBlock {
    pub fn new(label: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self {
            label: label.into(),
            statements,
        }
    }
}

impl Structogram {
    pub fn new(name: Option<String>, statements: Vec<Statement>) -> Self {
        Self {
            name,
            render_start: false,
            statements,
        }
    }
}
