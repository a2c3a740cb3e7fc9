use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Study subject identifier, used for both caregivers and children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidSubjectId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SubjectId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

/// The maternal visit a submission was captured at.
///
/// Only the keys needed to reach other study records are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRef {
    pub subject_identifier: SubjectId,
    pub schedule_name: String,
    #[serde(default)]
    pub visit_code: Option<String>,
}

impl VisitRef {
    pub fn new(subject_identifier: SubjectId, schedule_name: impl Into<String>) -> Self {
        Self {
            subject_identifier,
            schedule_name: schedule_name.into(),
            visit_code: None,
        }
    }

    #[must_use]
    pub fn with_visit_code(mut self, visit_code: impl Into<String>) -> Self {
        self.visit_code = Some(visit_code.into());
        self
    }
}
