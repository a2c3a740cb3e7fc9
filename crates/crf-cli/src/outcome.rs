//! Running the questionnaire rule set over one loaded submission.

use anyhow::{Context, Result};
use serde::Serialize;

use crf_model::{FormRecord, RawSubmission};
use crf_validate::{
    InMemoryStudyStore, RuleEngine, RuleSetOptions, StudyContext, ValidationError,
    relationship_father_involvement,
};

/// Whether to stop at the first violated rule or run them all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    FailFast,
    Collect,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub rule_set: String,
    pub subject_identifier: String,
    pub visit_code: Option<String>,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Shape-check the submission, then validate it against the study context.
///
/// Malformed submissions are returned as `Err`; rule violations, including a
/// missing study record, are part of the outcome.
pub fn validate_submission(
    raw: RawSubmission,
    store: &InMemoryStudyStore,
    options: &RuleSetOptions,
    mode: ValidationMode,
) -> Result<ValidationOutcome> {
    let engine = RuleEngine::new(
        relationship_father_involvement::rule_set(options),
        StudyContext::from_store(store),
    );
    let record =
        FormRecord::from_raw(&engine.rule_set().schema, raw).context("check submission shape")?;

    let errors = match mode {
        ValidationMode::FailFast => engine.validate(&record).err().into_iter().collect(),
        ValidationMode::Collect => match engine.report(&record) {
            Ok(report) => report.errors,
            Err(error) => vec![error],
        },
    };

    let visit = record.visit();
    Ok(ValidationOutcome {
        rule_set: engine.rule_set().name.to_string(),
        subject_identifier: visit.subject_identifier.to_string(),
        visit_code: visit.visit_code.clone(),
        valid: errors.is_empty(),
        errors,
    })
}
