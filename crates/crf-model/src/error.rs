use thiserror::Error;

use crate::schema::FieldKind;

/// Shape failures detected while building a typed record from a raw submission.
///
/// These are data-entry defects caught before any business rule runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{field}` expects {expected} but got {found}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        found: &'static str,
    },
    #[error("field `{field}` holds `{token}` which is not a recognised response")]
    InvalidToken { field: String, token: String },
    #[error("selection on `{field}` has an option without a short name")]
    InvalidSelection { field: String },
    #[error("invalid subject identifier `{0}`")]
    InvalidSubjectId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
