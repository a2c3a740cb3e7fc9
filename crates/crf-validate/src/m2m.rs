//! Checks on multi-select (set-valued) fields.
//!
//! Option membership is tested by short name. The study-wide tokens N/A and
//! PNTA appear in option catalogs under their response wire strings.

use crf_model::{FormRecord, Response};

use crate::error::ValidationError;

/// Short name of the N/A option.
pub const NOT_APPLICABLE: &str = "N/A";
/// Short name of the prefer-not-to-answer option.
pub const PNTA: &str = "PNTA";

/// N/A must not be selected while the field applies.
///
/// The field not applying while N/A is absent is left unchecked.
pub fn m2m_applicable_if_true(
    record: &FormRecord,
    condition: bool,
    m2m_field: &str,
) -> Result<(), ValidationError> {
    let Some(selected) = record.selection(m2m_field) else {
        return Ok(());
    };
    if condition && selected.contains(NOT_APPLICABLE) {
        return Err(ValidationError::contradiction(
            m2m_field,
            "This field is applicable",
        ));
    }
    Ok(())
}

/// Any of `exclusive` must be the only selection when chosen.
pub fn m2m_single_selection_if(
    record: &FormRecord,
    exclusive: &[&str],
    m2m_field: &str,
) -> Result<(), ValidationError> {
    let Some(selected) = record.selection(m2m_field) else {
        return Ok(());
    };
    if selected.len() <= 1 {
        return Ok(());
    }
    if let Some(option) = exclusive.iter().copied().find(|option| selected.contains(option)) {
        let label = selected.label(option).unwrap_or(option);
        return Err(ValidationError::exclusive_selection(
            m2m_field,
            format!("Invalid combination. '{label}' may not be combined with other selections"),
        ));
    }
    Ok(())
}

/// `field_other` must be filled in when any of `triggers` is selected.
pub fn m2m_other_specify(
    record: &FormRecord,
    triggers: &[&str],
    m2m_field: &str,
    field_other: &str,
) -> Result<(), ValidationError> {
    let selected = record
        .selection(m2m_field)
        .is_some_and(|selected| selected.contains_any(triggers));
    if selected && !record.is_present(field_other) {
        return Err(ValidationError::other_specify(field_other));
    }
    Ok(())
}

/// `na_response` must not be selected when `field` holds one of `responses`.
pub fn m2m_response_na(
    record: &FormRecord,
    responses: &[Response],
    field: &str,
    na_response: &str,
    m2m_field: &str,
) -> Result<(), ValidationError> {
    if !record.is_one_of(field, responses) {
        return Ok(());
    }
    let selected = record
        .selection(m2m_field)
        .is_some_and(|selected| selected.contains(na_response));
    if selected {
        let allowed = responses
            .iter()
            .map(Response::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ValidationError::contradiction(
            m2m_field,
            format!("Can not select {na_response} as a response. {field} is either {allowed}."),
        ));
    }
    Ok(())
}
