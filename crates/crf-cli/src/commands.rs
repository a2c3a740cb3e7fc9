use anyhow::Result;
use tracing::info;

use crf_validate::{RuleSetOptions, relationship_father_involvement};

use crate::cli::ValidateArgs;
use crf_cli::input::{load_study, load_submission};
use crf_cli::outcome::{ValidationMode, ValidationOutcome, validate_submission};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let raw = load_submission(&args.record)?;
    let store = load_study(&args.study)?;
    let options = RuleSetOptions {
        positive_mother_disclosure: args.positive_mother_disclosure,
    };
    let mode = if args.collect {
        ValidationMode::Collect
    } else {
        ValidationMode::FailFast
    };
    let outcome = validate_submission(raw, &store, &options, mode)?;
    info!(
        subject = %outcome.subject_identifier,
        valid = outcome.valid,
        errors = outcome.error_count(),
        "submission validated"
    );
    Ok(outcome)
}

pub fn run_fields() {
    crf_cli::summary::print_fields(&relationship_father_involvement::schema());
}
