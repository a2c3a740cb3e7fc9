//! Quantified properties of the relationship rule set.

mod common;

use proptest::prelude::*;
use proptest::sample::select;

use common::{delivered_store, engine, pregnant_store, valid_record};
use crf_model::{HivStatus, Response};
use crf_validate::ErrorKind;
use crf_validate::relationship_father_involvement::{
    ACTIVITY_FIELDS, EXCLUSIVE_ACTIVITY_OPTIONS, PARTNER_PRESENT_REQUIRED,
};

proptest! {
    #[test]
    fn missing_partner_field_is_required(index in 0..PARTNER_PRESENT_REQUIRED.len()) {
        let store = delivered_store(HivStatus::Pos);
        let field = PARTNER_PRESENT_REQUIRED[index];
        let record = valid_record().with_choice(field, "");

        let error = engine(&store).validate(&record).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::RequiredFieldMissing);
        prop_assert_eq!(error.field(), Some(field));
    }

    #[test]
    fn partner_fields_optional_unless_partner_present(
        partner_present in select(vec![
            Response::No,
            Response::Pnta,
            Response::DontKnow,
            Response::NotApplicable,
        ]),
        cleared in 0u32..(1 << 17),
    ) {
        let store = delivered_store(HivStatus::Pos);
        let mut record = valid_record()
            .with("partner_present", partner_present)
            .with_text("why_partner_absent", "Partner passed away")
            .with("disclosure_to_partner", Response::NotApplicable);
        for (bit, field) in PARTNER_PRESENT_REQUIRED.iter().enumerate() {
            if cleared & (1 << bit) != 0 {
                record = record.with_choice(field, "");
            }
        }

        prop_assert_eq!(engine(&store).validate(&record), Ok(()));
    }

    #[test]
    fn exclusive_options_stand_alone(
        index in 0..ACTIVITY_FIELDS.len(),
        exclusive in select(EXCLUSIVE_ACTIVITY_OPTIONS.to_vec()),
        companion in select(vec!["mother", "grandparent", "sibling"]),
    ) {
        let store = pregnant_store(HivStatus::Pos);
        let field = ACTIVITY_FIELDS[index];
        let record = valid_record().with_selection(field, [exclusive, companion]);

        let error = engine(&store).validate(&record).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::ExclusiveSelection);
        prop_assert_eq!(error.field(), Some(field));
    }

    #[test]
    fn father_option_needs_living_father(
        index in 0..ACTIVITY_FIELDS.len(),
        father_alive in select(vec![Response::No, Response::Pnta, Response::DontKnow]),
    ) {
        let store = delivered_store(HivStatus::Pos);
        let mut record = valid_record()
            .with("is_partner_the_father", Response::No)
            .with("biological_father_alive", father_alive);
        for activity in ACTIVITY_FIELDS {
            record = record.with_selection(activity, ["mother"]);
        }
        let field = ACTIVITY_FIELDS[index];
        let record = record.with_selection(field, ["father", "mother"]);

        let error = engine(&store).validate(&record).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::LogicalContradiction);
        prop_assert_eq!(error.field(), Some(field));
    }
}
