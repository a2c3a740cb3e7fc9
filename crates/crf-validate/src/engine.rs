//! Rule engine executing one rule set against one submission.
//!
//! Derived facts the rule set needs are resolved first, so a missing upstream
//! record surfaces before any field-level rule runs.

use tracing::{debug, info, info_span, warn};

use crf_model::FormRecord;

use crate::context::{ExternalStatusContext, StudyContext};
use crate::error::{ValidationError, ValidationReport};
use crate::rules::RuleSet;

/// Runs one rule set against submissions, looking up study records through
/// the borrowed collaborators.
pub struct RuleEngine<'a> {
    rule_set: RuleSet,
    context: StudyContext<'a>,
}

impl<'a> RuleEngine<'a> {
    /// Create an engine for a rule set and the study records it may consult.
    pub fn new(rule_set: RuleSet, context: StudyContext<'a>) -> Self {
        Self { rule_set, context }
    }

    /// The rule set this engine runs.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Resolve the derived facts this rule set reads, fresh for this call.
    pub fn resolve_context(
        &self,
        record: &FormRecord,
    ) -> Result<ExternalStatusContext, ValidationError> {
        self.context
            .resolve(record.visit(), self.rule_set.requirements)
    }

    /// Run every rule in order and stop at the first violation.
    pub fn validate(&self, record: &FormRecord) -> Result<(), ValidationError> {
        let span = info_span!(
            "validate",
            rule_set = self.rule_set.name,
            visit = record.visit().visit_code.as_deref().unwrap_or("-")
        );
        let _guard = span.enter();

        let context = self.resolve_context(record).inspect_err(log_failure)?;
        for rule in &self.rule_set.rules {
            debug!(rule = rule.name(), "running rule");
            rule.run(record, &context).inspect_err(log_failure)?;
        }
        info!(rules = self.rule_set.len(), "submission passed");
        Ok(())
    }

    /// Run every rule and collect one error per violated rule.
    ///
    /// A missing upstream record still stops the run and is returned as `Err`.
    pub fn report(&self, record: &FormRecord) -> Result<ValidationReport, ValidationError> {
        let span = info_span!(
            "report",
            rule_set = self.rule_set.name,
            visit = record.visit().visit_code.as_deref().unwrap_or("-")
        );
        let _guard = span.enter();

        let context = self.resolve_context(record).inspect_err(log_failure)?;
        let mut report = ValidationReport::new(self.rule_set.name);
        for rule in &self.rule_set.rules {
            debug!(rule = rule.name(), "running rule");
            match rule.run(record, &context) {
                Ok(()) => {}
                Err(error) if error.is_hard_stop() => {
                    log_failure(&error);
                    return Err(error);
                }
                Err(error) => {
                    debug!(
                        rule = rule.name(),
                        field = error.field(),
                        code = error.code(),
                        "rule violated"
                    );
                    report.errors.push(error);
                }
            }
        }
        info!(errors = report.error_count(), "submission checked");
        Ok(report)
    }
}

fn log_failure(error: &ValidationError) {
    if error.is_hard_stop() {
        warn!(code = error.code(), message = error.message(), "study context missing");
    } else {
        info!(
            code = error.code(),
            field = error.field().unwrap_or("-"),
            "submission rejected"
        );
    }
}
