//! Conditional checks on single-valued fields.
//!
//! Each check passes silently or returns the violation for the dependent
//! field. None of them constrain the dependent field when the trigger does
//! not hold.

use crf_model::{FormRecord, Response};

use crate::error::ValidationError;

/// `field_required` must be present when `field` holds `trigger`.
pub fn required_if(
    record: &FormRecord,
    trigger: Response,
    field: &str,
    field_required: &str,
) -> Result<(), ValidationError> {
    required_if_true(record, record.equals(field, trigger), field_required)
}

/// `field_required` must be present when `condition` holds.
pub fn required_if_true(
    record: &FormRecord,
    condition: bool,
    field_required: &str,
) -> Result<(), ValidationError> {
    if condition && !record.is_present(field_required) {
        return Err(ValidationError::required(field_required));
    }
    Ok(())
}

/// `field_applicable` must hold a substantive answer when `field` holds `trigger`.
///
/// The opposite direction (N/A when the trigger is absent) is not checked.
pub fn applicable_if(
    record: &FormRecord,
    trigger: Response,
    field: &str,
    field_applicable: &str,
) -> Result<(), ValidationError> {
    if !record.equals(field, trigger) {
        return Ok(());
    }
    if record.is_not_applicable(field_applicable) {
        return Err(ValidationError::applicable(field_applicable));
    }
    if !record.is_present(field_applicable) {
        return Err(ValidationError::required(field_applicable));
    }
    Ok(())
}

/// `field_applicable` must be exactly N/A when `field` holds `trigger`.
///
/// N/A is not forbidden when the trigger is absent.
pub fn not_applicable_if(
    record: &FormRecord,
    trigger: Response,
    field: &str,
    field_applicable: &str,
) -> Result<(), ValidationError> {
    if record.equals(field, trigger) && !record.is_not_applicable(field_applicable) {
        return Err(ValidationError::not_applicable(field_applicable));
    }
    Ok(())
}

/// `field` must be empty or N/A.
pub fn not_applicable(record: &FormRecord, field: &str) -> Result<(), ValidationError> {
    if record.is_substantive(field) {
        return Err(ValidationError::not_applicable(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crf_model::{SubjectId, VisitRef};

    fn record() -> FormRecord {
        FormRecord::new(VisitRef::new(
            SubjectId::new("B142-040990001-6").unwrap(),
            "a_quarterly1_schedule1",
        ))
    }

    #[test]
    fn required_if_only_applies_on_trigger() {
        let missing = record().with("partner_present", Response::Yes);
        let error = required_if(&missing, Response::Yes, "partner_present", "living_with_partner")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::RequiredFieldMissing);
        assert_eq!(error.field(), Some("living_with_partner"));

        let absent = record().with("partner_present", Response::No);
        assert!(
            required_if(&absent, Response::Yes, "partner_present", "living_with_partner").is_ok()
        );
        // Trigger field itself empty.
        assert!(required_if(&record(), Response::Yes, "partner_present", "x").is_ok());
    }

    #[test]
    fn required_if_accepts_not_applicable_as_present() {
        let record = record()
            .with("partner_present", Response::Yes)
            .with("living_with_partner", Response::NotApplicable);
        assert!(
            required_if(&record, Response::Yes, "partner_present", "living_with_partner").is_ok()
        );
    }

    #[test]
    fn required_if_true_treats_blank_text_as_missing() {
        let record = record().with_text("partner_cell", "  ");
        assert!(required_if_true(&record, true, "partner_cell").is_err());
        assert!(required_if_true(&record, false, "partner_cell").is_ok());
    }

    #[test]
    fn applicable_if_rejects_not_applicable_and_empty() {
        let na = record()
            .with("disclosure_to_partner", Response::Yes)
            .with("discussion_with_partner", Response::NotApplicable);
        let error = applicable_if(
            &na,
            Response::Yes,
            "disclosure_to_partner",
            "discussion_with_partner",
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::FieldNotApplicable);
        assert_eq!(error.message(), "This field is applicable.");

        let empty = record().with("disclosure_to_partner", Response::Yes);
        let error = applicable_if(
            &empty,
            Response::Yes,
            "disclosure_to_partner",
            "discussion_with_partner",
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn applicable_if_ignores_inverse_case() {
        let record = record()
            .with("disclosure_to_partner", Response::No)
            .with("discussion_with_partner", Response::Yes);
        assert!(
            applicable_if(
                &record,
                Response::Yes,
                "disclosure_to_partner",
                "discussion_with_partner",
            )
            .is_ok()
        );
    }

    #[test]
    fn not_applicable_if_is_asymmetric() {
        let forced = record()
            .with("partner_present", Response::No)
            .with("disclosure_to_partner", Response::Yes);
        let error = not_applicable_if(
            &forced,
            Response::No,
            "partner_present",
            "disclosure_to_partner",
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::FieldNotApplicable);
        assert_eq!(error.message(), "This field is not applicable.");

        let na_without_trigger = record()
            .with("partner_present", Response::Yes)
            .with("disclosure_to_partner", Response::NotApplicable);
        assert!(
            not_applicable_if(
                &na_without_trigger,
                Response::No,
                "partner_present",
                "disclosure_to_partner",
            )
            .is_ok()
        );
    }

    #[test]
    fn not_applicable_allows_empty_or_na() {
        assert!(not_applicable(&record(), "disclose_status").is_ok());
        let na = record().with("disclose_status", Response::NotApplicable);
        assert!(not_applicable(&na, "disclose_status").is_ok());
        let answered = record().with("disclose_status", Response::No);
        assert!(not_applicable(&answered, "disclose_status").is_err());
    }
}
