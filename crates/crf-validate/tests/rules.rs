//! Relationship and father-involvement rule set, run through the engine.

mod common;

use common::{delivered_store, delivery, engine, engine_with, pregnant_store, valid_record};
use crf_model::{HivStatus, Response};
use crf_validate::relationship_father_involvement::{
    CHILD_NOT_DELIVERED_MESSAGE, PARTNER_IS_FATHER_MESSAGE,
};
use crf_validate::{ErrorKind, RuleSetOptions, ValidationError};

fn partner_absent_record() -> crf_model::FormRecord {
    common::valid_record()
        .with("partner_present", Response::No)
        .with_text("why_partner_absent", "Partner works in another city")
        .with("disclosure_to_partner", Response::NotApplicable)
}

#[test]
fn complete_submission_passes() {
    let store = delivered_store(HivStatus::Pos);
    assert_eq!(engine(&store).validate(&valid_record()), Ok(()));
}

#[test]
fn partner_present_requires_relationship_questions() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record().with_choice("quarrel_frequency", "");

    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RequiredFieldMissing);
    assert_eq!(error.field(), Some("quarrel_frequency"));
}

#[test]
fn partner_absent_requires_reason_only() {
    let store = delivered_store(HivStatus::Pos);
    let engine = engine(&store);
    let mut record = partner_absent_record();
    for field in ["duration_with_partner", "kissing_partner", "partner_age_in_years"] {
        record = record.with_choice(field, "");
    }
    assert_eq!(engine.validate(&record), Ok(()));

    let record = record.with_text("why_partner_absent", "");
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::required("why_partner_absent"))
    );
}

#[test]
fn single_conditional_requirements() {
    let store = delivered_store(HivStatus::Pos);
    let engine = engine(&store);

    let record = valid_record().with("living_with_partner", Response::No);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::required("why_not_living_with_partner"))
    );

    let record = valid_record().with("ever_separated", Response::Yes);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::required("times_separated"))
    );
    assert_eq!(engine.validate(&record.with_integer("times_separated", 2)), Ok(()));

    let record = valid_record().with("contact_info", Response::Yes);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::required("partner_cell"))
    );
    let record = record.with_text("partner_cell", "+267 71 234 567");
    assert_eq!(engine.validate(&record), Ok(()));
}

#[test]
fn partner_is_father_requires_living_father() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record().with("biological_father_alive", Response::No);

    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.field(), Some("biological_father_alive"));
    assert_eq!(error.kind(), ErrorKind::LogicalContradiction);
    assert_eq!(error.message(), PARTNER_IS_FATHER_MESSAGE);
}

#[test]
fn partner_is_father_rejects_unanswered_father_alive() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record().with_text("biological_father_alive", "");

    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.field(), Some("biological_father_alive"));
    assert_eq!(error.kind(), ErrorKind::LogicalContradiction);
}

#[test]
fn negative_mother_disclosure_is_not_applicable() {
    let store = delivered_store(HivStatus::Neg);
    let engine = engine(&store);

    let error = engine.validate(&valid_record()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::FieldNotApplicable);
    assert_eq!(error.field(), Some("disclosure_to_partner"));

    let record = valid_record()
        .with("disclosure_to_partner", Response::NotApplicable)
        .with("discussion_with_partner", Response::NotApplicable);
    assert_eq!(engine.validate(&record), Ok(()));

    let record = record.with("disclose_status", Response::Yes);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::not_applicable("disclose_status"))
    );
}

#[test]
fn absent_partner_forces_disclosure_not_applicable() {
    let store = delivered_store(HivStatus::Pos);
    let record = partner_absent_record().with("disclosure_to_partner", Response::Yes);

    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::FieldNotApplicable);
    assert_eq!(error.field(), Some("disclosure_to_partner"));
}

#[test]
fn disclosure_answer_drives_follow_up_questions() {
    let store = delivered_store(HivStatus::DontKnow);
    let engine = engine(&store);

    let record = valid_record().with("discussion_with_partner", Response::NotApplicable);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::applicable("discussion_with_partner"))
    );

    let record = valid_record().with("disclosure_to_partner", Response::No);
    assert_eq!(
        engine.validate(&record),
        Err(ValidationError::required("disclose_status"))
    );
    let record = record.with_choice("disclose_status", "not_ready");
    assert_eq!(engine.validate(&record), Ok(()));
}

#[test]
fn father_involvement_required_after_delivery_with_living_father() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record().with_choice("fathers_financial_support", "");
    assert_eq!(
        engine(&store).validate(&record),
        Err(ValidationError::required("fathers_financial_support"))
    );
}

#[test]
fn father_involvement_not_required_before_delivery() {
    let store = pregnant_store(HivStatus::Pos);
    let record = valid_record()
        .with_choice("father_child_contact", "")
        .with_choice("fathers_financial_support", "");
    assert_eq!(engine(&store).validate(&record), Ok(()));
}

#[test]
fn child_left_alone_must_be_zero_before_delivery() {
    let store = pregnant_store(HivStatus::Pos);
    let engine = engine(&store);

    let record = valid_record().with_integer("child_left_alone", 3);
    let error = engine.validate(&record).unwrap_err();
    assert_eq!(error.field(), None);
    insta::assert_snapshot!(error.to_string(), @"Field can not be > 0, child not delivered.");
    assert_eq!(error.message(), CHILD_NOT_DELIVERED_MESSAGE);

    let report = engine.report(&record.with_integer("child_left_alone", 0)).unwrap();
    assert!(report.is_valid());
}

#[test]
fn child_left_alone_is_unconstrained_after_delivery() {
    let store = pregnant_store(HivStatus::Pos).with_delivery(delivery());
    let record = valid_record().with_integer("child_left_alone", 3);
    assert_eq!(engine(&store).validate(&record), Ok(()));
}

#[test]
fn activity_na_contradicts_delivered_child() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record().with_selection("sang_songs", ["N/A"]);
    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LogicalContradiction);
    assert_eq!(error.field(), Some("sang_songs"));
}

#[test]
fn activity_na_allowed_before_delivery() {
    let store = pregnant_store(HivStatus::Pos);
    let mut record = valid_record();
    for field in [
        "read_books",
        "told_stories",
        "sang_songs",
        "took_child_outside",
        "played_with_child",
        "named_with_child",
    ] {
        record = record.with_selection(field, ["N/A"]);
    }
    assert_eq!(engine(&store).validate(&record), Ok(()));
}

#[test]
fn exclusive_activity_options() {
    let store = pregnant_store(HivStatus::Pos);
    let record = valid_record().with_selection("read_books", ["N/A", "no_one"]);
    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExclusiveSelection);
    assert_eq!(error.field(), Some("read_books"));
    insta::assert_snapshot!(
        error.to_string(),
        @"read_books: Invalid combination. 'N/A' may not be combined with other selections"
    );
}

#[test]
fn other_activity_needs_specification() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record()
        .with_selection("read_books", ["other"])
        .with_text("read_books_other", "");
    assert_eq!(
        engine(&store).validate(&record),
        Err(ValidationError::other_specify("read_books_other"))
    );

    let record = record.with_text("read_books_other", "A neighbour");
    assert_eq!(engine(&store).validate(&record), Ok(()));
}

#[test]
fn father_cannot_do_activities_when_not_alive() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record()
        .with("is_partner_the_father", Response::No)
        .with("biological_father_alive", Response::No)
        .with_selection("read_books", ["mother"])
        .with_selection("told_stories", ["mother"])
        .with_selection("sang_songs", ["mother"])
        .with_selection("played_with_child", ["father"]);

    let error = engine(&store).validate(&record).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LogicalContradiction);
    assert_eq!(error.field(), Some("played_with_child"));
    insta::assert_snapshot!(
        error.message(),
        @"Can not select father as a response. biological_father_alive is either No, PNTA, Dont_know."
    );
}

#[test]
fn report_collects_one_error_per_rule() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record()
        .with_choice("quarrel_frequency", "")
        .with("contact_info", Response::Yes)
        .with_selection("read_books", ["other"])
        .with_selection("sang_songs", ["PNTA", "mother"]);

    let report = engine(&store).report(&record).unwrap();
    let fields: Vec<_> = report.errors.iter().map(|error| error.field()).collect();
    assert_eq!(
        fields,
        [
            Some("quarrel_frequency"),
            Some("partner_cell"),
            Some("read_books_other"),
            Some("sang_songs"),
        ]
    );
    assert_eq!(report.rule_set, "relationship_father_involvement");
    assert_eq!(
        report.into_result(),
        Err(ValidationError::required("quarrel_frequency"))
    );
}

#[test]
fn positive_mother_disclosure_flag_requires_disclosure() {
    let store = delivered_store(HivStatus::Pos);
    let record = valid_record()
        .with_choice("disclosure_to_partner", "")
        .with_choice("discussion_with_partner", "");

    assert_eq!(engine(&store).validate(&record), Ok(()));

    let options = RuleSetOptions {
        positive_mother_disclosure: true,
    };
    assert_eq!(
        engine_with(&store, options).validate(&record),
        Err(ValidationError::required("disclosure_to_partner"))
    );
}
