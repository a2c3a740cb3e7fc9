//! Validation failure taxonomy.
//!
//! Every violated rule produces one [`ValidationError`] keyed by the field the
//! data-entry user has to correct, or by no field for form-level failures.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A conditionally required field is empty.
    RequiredFieldMissing,
    /// A substantive value where N/A is required, or N/A where an answer is required.
    FieldNotApplicable,
    /// Mutually exclusive multi-select options were chosen together.
    ExclusiveSelection,
    /// "Other" was chosen without the explanation text.
    OtherSpecifyMissing,
    /// An inconsistent combination across fields.
    LogicalContradiction,
    /// A prerequisite study record is absent. Validation cannot proceed.
    ContextNotFound,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::RequiredFieldMissing => "required_field_missing",
            ErrorKind::FieldNotApplicable => "field_not_applicable",
            ErrorKind::ExclusiveSelection => "exclusive_selection",
            ErrorKind::OtherSpecifyMissing => "other_specify_missing",
            ErrorKind::LogicalContradiction => "logical_contradiction",
            ErrorKind::ContextNotFound => "context_not_found",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::RequiredFieldMissing => "Required field missing",
            ErrorKind::FieldNotApplicable => "Field not applicable",
            ErrorKind::ExclusiveSelection => "Exclusive selection",
            ErrorKind::OtherSpecifyMissing => "Other specify missing",
            ErrorKind::LogicalContradiction => "Logical contradiction",
            ErrorKind::ContextNotFound => "Context not found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required.";
pub(crate) const APPLICABLE_MESSAGE: &str = "This field is applicable.";
pub(crate) const NOT_APPLICABLE_MESSAGE: &str = "This field is not applicable.";

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", keyed(.field, .message))]
pub struct ValidationError {
    kind: ErrorKind,
    field: Option<String>,
    message: String,
}

fn keyed(field: &Option<String>, message: &str) -> String {
    match field {
        Some(field) => format!("{field}: {message}"),
        None => message.to_string(),
    }
}

impl ValidationError {
    pub fn new(kind: ErrorKind, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(ErrorKind::RequiredFieldMissing, Some(field), REQUIRED_MESSAGE)
    }

    /// N/A was given where an answer is expected.
    pub fn applicable(field: &str) -> Self {
        Self::new(ErrorKind::FieldNotApplicable, Some(field), APPLICABLE_MESSAGE)
    }

    /// An answer was given where only N/A is allowed.
    pub fn not_applicable(field: &str) -> Self {
        Self::new(
            ErrorKind::FieldNotApplicable,
            Some(field),
            NOT_APPLICABLE_MESSAGE,
        )
    }

    pub fn exclusive_selection(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExclusiveSelection, Some(field), message)
    }

    pub fn other_specify(field_other: &str) -> Self {
        Self::new(
            ErrorKind::OtherSpecifyMissing,
            Some(field_other),
            REQUIRED_MESSAGE,
        )
    }

    pub fn contradiction(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LogicalContradiction, Some(field), message)
    }

    /// A contradiction reported against the form as a whole.
    pub fn form_level(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LogicalContradiction, None, message)
    }

    pub fn context_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContextNotFound, None, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for failures that stop validation of the whole submission.
    pub fn is_hard_stop(&self) -> bool {
        self.kind == ErrorKind::ContextNotFound
    }
}

/// Outcome of running every rule of a rule set against one submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub rule_set: String,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(rule_set: impl Into<String>) -> Self {
        Self {
            rule_set: rule_set.into(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors keyed by a given field.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |error| error.field() == Some(field))
    }

    /// The first error, if any, as a fail-fast result.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
