//! Declared field types for a questionnaire.

use std::fmt;

use serde::Serialize;

/// The value kind a questionnaire field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// One token from the closed response set (Yes/No/N/A/PNTA/Dont_know).
    Response,
    /// A coded answer from a field-specific list. Response tokens are recognised.
    Choice,
    /// Free text.
    Text,
    Integer,
    /// Multi-select; the value is a set of options.
    Selection,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Response => "response",
            FieldKind::Choice => "choice",
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Selection => "selection",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Ordered field declarations for one questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.field(name).map(|spec| spec.kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
