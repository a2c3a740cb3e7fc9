//! Caregiver relationship and father-involvement questionnaire.
//!
//! Rules run in this order and the first violation stops a fail-fast run:
//!
//! 1. relationship questions required when the partner is present
//! 2. single conditional requirements (absent partner, separation, contact)
//! 3. partner-is-father consistency with the biological father being alive
//! 4. HIV disclosure questions, gated on the mother's HIV status
//! 5. father involvement, required once delivered with a living father
//! 6. no child left alone before delivery
//! 7. one group per caregiver activity multi-select

use crf_model::{FieldKind, FieldSpec, FormRecord, FormSchema, HivStatus, Response};

use crate::context::{ContextRequirements, ExternalStatusContext};
use crate::error::ValidationError;
use crate::m2m::{
    NOT_APPLICABLE, PNTA, m2m_applicable_if_true, m2m_other_specify, m2m_response_na,
    m2m_single_selection_if,
};
use crate::scalar::{
    applicable_if, not_applicable, not_applicable_if, required_if, required_if_true,
};

use super::{Rule, RuleSet, RuleSetOptions};

pub const NAME: &str = "relationship_father_involvement";

pub const PARTNER_PRESENT: &str = "partner_present";
pub const WHY_PARTNER_ABSENT: &str = "why_partner_absent";
pub const IS_PARTNER_THE_FATHER: &str = "is_partner_the_father";
pub const LIVING_WITH_PARTNER: &str = "living_with_partner";
pub const WHY_NOT_LIVING_WITH_PARTNER: &str = "why_not_living_with_partner";
pub const EVER_SEPARATED: &str = "ever_separated";
pub const TIMES_SEPARATED: &str = "times_separated";
pub const CONTACT_INFO: &str = "contact_info";
pub const PARTNER_CELL: &str = "partner_cell";
pub const BIOLOGICAL_FATHER_ALIVE: &str = "biological_father_alive";
pub const DISCLOSURE_TO_PARTNER: &str = "disclosure_to_partner";
pub const DISCUSSION_WITH_PARTNER: &str = "discussion_with_partner";
pub const DISCLOSE_STATUS: &str = "disclose_status";
pub const CHILD_LEFT_ALONE: &str = "child_left_alone";

/// Relationship questions answered only when the partner is present.
pub const PARTNER_PRESENT_REQUIRED: [&str; 17] = [
    IS_PARTNER_THE_FATHER,
    "duration_with_partner",
    "partner_age_in_years",
    LIVING_WITH_PARTNER,
    "partners_support",
    EVER_SEPARATED,
    "separation_consideration",
    "leave_after_fight",
    "relationship_progression",
    "confide_in_partner",
    "relationship_regret",
    "quarrel_frequency",
    "bothering_partner",
    "kissing_partner",
    "engage_in_interests",
    "happiness_in_relationship",
    "future_relationship",
];

pub const HIV_DISCLOSURE_FIELDS: [&str; 3] =
    [DISCLOSURE_TO_PARTNER, DISCUSSION_WITH_PARTNER, DISCLOSE_STATUS];

pub const FATHER_INVOLVEMENT_FIELDS: [&str; 2] =
    ["father_child_contact", "fathers_financial_support"];

/// Multi-select questions on who does activities with the child.
pub const ACTIVITY_FIELDS: [&str; 6] = [
    "read_books",
    "told_stories",
    "sang_songs",
    "took_child_outside",
    "played_with_child",
    "named_with_child",
];

/// Options that must be the only selection on an activity field.
pub const EXCLUSIVE_ACTIVITY_OPTIONS: [&str; 3] = [NOT_APPLICABLE, PNTA, "no_one"];
pub const OTHER_OPTION: &str = "other";
pub const FATHER_OPTION: &str = "father";

/// Answers meaning the biological father cannot be doing activities with the child.
pub const FATHER_UNAVAILABLE: [Response; 3] = [Response::No, Response::Pnta, Response::DontKnow];

pub const PARTNER_IS_FATHER_MESSAGE: &str = "Currently living with the father, check question 5";
pub const CHILD_NOT_DELIVERED_MESSAGE: &str = "Field can not be > 0, child not delivered.";

pub fn schema() -> FormSchema {
    let mut fields = vec![
        FieldSpec::new(PARTNER_PRESENT, FieldKind::Response),
        FieldSpec::new(WHY_PARTNER_ABSENT, FieldKind::Text),
        FieldSpec::new(IS_PARTNER_THE_FATHER, FieldKind::Response),
        FieldSpec::new("duration_with_partner", FieldKind::Choice),
        FieldSpec::new("partner_age_in_years", FieldKind::Integer),
        FieldSpec::new(LIVING_WITH_PARTNER, FieldKind::Response),
        FieldSpec::new(WHY_NOT_LIVING_WITH_PARTNER, FieldKind::Text),
        FieldSpec::new("partners_support", FieldKind::Choice),
        FieldSpec::new(EVER_SEPARATED, FieldKind::Response),
        FieldSpec::new(TIMES_SEPARATED, FieldKind::Integer),
        FieldSpec::new("separation_consideration", FieldKind::Choice),
        FieldSpec::new("leave_after_fight", FieldKind::Choice),
        FieldSpec::new("relationship_progression", FieldKind::Choice),
        FieldSpec::new("confide_in_partner", FieldKind::Choice),
        FieldSpec::new("relationship_regret", FieldKind::Choice),
        FieldSpec::new("quarrel_frequency", FieldKind::Choice),
        FieldSpec::new("bothering_partner", FieldKind::Choice),
        FieldSpec::new("kissing_partner", FieldKind::Choice),
        FieldSpec::new("engage_in_interests", FieldKind::Choice),
        FieldSpec::new("happiness_in_relationship", FieldKind::Choice),
        FieldSpec::new("future_relationship", FieldKind::Choice),
        FieldSpec::new(DISCLOSURE_TO_PARTNER, FieldKind::Response),
        FieldSpec::new(DISCUSSION_WITH_PARTNER, FieldKind::Response),
        FieldSpec::new(DISCLOSE_STATUS, FieldKind::Choice),
        FieldSpec::new(CONTACT_INFO, FieldKind::Response),
        FieldSpec::new(PARTNER_CELL, FieldKind::Text),
        FieldSpec::new(BIOLOGICAL_FATHER_ALIVE, FieldKind::Response),
        FieldSpec::new("father_child_contact", FieldKind::Choice),
        FieldSpec::new("fathers_financial_support", FieldKind::Choice),
        FieldSpec::new(CHILD_LEFT_ALONE, FieldKind::Integer),
    ];
    for (activity, other) in ACTIVITY_FIELDS.into_iter().zip(ACTIVITY_OTHER_FIELDS) {
        fields.push(FieldSpec::new(activity, FieldKind::Selection));
        fields.push(FieldSpec::new(other, FieldKind::Text));
    }
    FormSchema::new(NAME, fields)
}

/// Free-text companions of each activity's "other" option, paired by position.
pub const ACTIVITY_OTHER_FIELDS: [&str; 6] = [
    "read_books_other",
    "told_stories_other",
    "sang_songs_other",
    "took_child_outside_other",
    "played_with_child_other",
    "named_with_child_other",
];

pub fn rule_set(options: &RuleSetOptions) -> RuleSet {
    let mut rules = vec![
        Rule::new("partner_present_required", partner_present_required),
        Rule::new("conditional_required", conditional_required),
        Rule::new("partner_is_father", partner_is_father),
        Rule::new("hiv_disclosure", hiv_disclosure),
    ];
    if options.positive_mother_disclosure {
        rules.push(Rule::new(
            "positive_mother_disclosure",
            positive_mother_disclosure,
        ));
    }
    rules.push(Rule::new("father_involvement", father_involvement));
    rules.push(Rule::new("child_left_alone", child_left_alone));
    for (activity, other) in ACTIVITY_FIELDS.into_iter().zip(ACTIVITY_OTHER_FIELDS) {
        rules.push(Rule::new(
            format!("activity:{activity}"),
            move |record: &FormRecord, context: &ExternalStatusContext| {
                activity_selection(record, context, activity, other)
            },
        ));
    }

    RuleSet {
        name: NAME,
        schema: schema(),
        requirements: ContextRequirements::ALL,
        rules,
    }
}

fn partner_present_required(
    record: &FormRecord,
    _context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    for field in PARTNER_PRESENT_REQUIRED {
        required_if(record, Response::Yes, PARTNER_PRESENT, field)?;
    }
    Ok(())
}

fn conditional_required(
    record: &FormRecord,
    _context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    required_if(record, Response::No, PARTNER_PRESENT, WHY_PARTNER_ABSENT)?;
    required_if(
        record,
        Response::No,
        LIVING_WITH_PARTNER,
        WHY_NOT_LIVING_WITH_PARTNER,
    )?;
    required_if(record, Response::Yes, PARTNER_PRESENT, IS_PARTNER_THE_FATHER)?;
    required_if(record, Response::Yes, EVER_SEPARATED, TIMES_SEPARATED)?;
    required_if(record, Response::Yes, CONTACT_INFO, PARTNER_CELL)
}

/// A partner who is the father implies the biological father is alive.
///
/// An empty `biological_father_alive` fails too: the check does not wait for
/// both questions to be answered.
fn partner_is_father(
    record: &FormRecord,
    _context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    if record.equals(IS_PARTNER_THE_FATHER, Response::Yes)
        && !record.equals(BIOLOGICAL_FATHER_ALIVE, Response::Yes)
    {
        return Err(ValidationError::contradiction(
            BIOLOGICAL_FATHER_ALIVE,
            PARTNER_IS_FATHER_MESSAGE,
        ));
    }
    Ok(())
}

fn hiv_disclosure(
    record: &FormRecord,
    context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    if context.hiv_status()? == HivStatus::Neg {
        for field in HIV_DISCLOSURE_FIELDS {
            not_applicable(record, field)?;
        }
        return Ok(());
    }
    not_applicable_if(record, Response::No, PARTNER_PRESENT, DISCLOSURE_TO_PARTNER)?;
    applicable_if(
        record,
        Response::Yes,
        DISCLOSURE_TO_PARTNER,
        DISCUSSION_WITH_PARTNER,
    )?;
    applicable_if(record, Response::No, DISCLOSURE_TO_PARTNER, DISCLOSE_STATUS)
}

fn positive_mother_disclosure(
    record: &FormRecord,
    context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    required_if_true(
        record,
        context.hiv_status()? == HivStatus::Pos,
        DISCLOSURE_TO_PARTNER,
    )?;
    required_if(
        record,
        Response::Yes,
        DISCLOSURE_TO_PARTNER,
        DISCUSSION_WITH_PARTNER,
    )?;
    required_if(record, Response::No, DISCLOSURE_TO_PARTNER, DISCLOSE_STATUS)
}

fn father_involvement(
    record: &FormRecord,
    context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    let condition =
        context.has_delivered()? && record.equals(BIOLOGICAL_FATHER_ALIVE, Response::Yes);
    for field in FATHER_INVOLVEMENT_FIELDS {
        required_if_true(record, condition, field)?;
    }
    Ok(())
}

fn child_left_alone(
    record: &FormRecord,
    context: &ExternalStatusContext,
) -> Result<(), ValidationError> {
    let left_alone = record.integer(CHILD_LEFT_ALONE).unwrap_or(0);
    if !context.has_delivered()? && left_alone > 0 {
        return Err(ValidationError::form_level(CHILD_NOT_DELIVERED_MESSAGE));
    }
    Ok(())
}

fn activity_selection(
    record: &FormRecord,
    context: &ExternalStatusContext,
    activity: &str,
    other: &str,
) -> Result<(), ValidationError> {
    m2m_applicable_if_true(record, context.has_delivered()?, activity)?;
    m2m_single_selection_if(record, &EXCLUSIVE_ACTIVITY_OPTIONS, activity)?;
    m2m_other_specify(record, &[OTHER_OPTION], activity, other)?;
    m2m_response_na(
        record,
        &FATHER_UNAVAILABLE,
        BIOLOGICAL_FATHER_ALIVE,
        FATHER_OPTION,
        activity,
    )
}
