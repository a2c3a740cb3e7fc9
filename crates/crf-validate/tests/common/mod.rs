//! Shared fixtures for rule engine tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};

use crf_model::{FormRecord, HivStatus, Response, SubjectId, VisitRef};
use crf_validate::relationship_father_involvement::{self, PARTNER_PRESENT_REQUIRED};
use crf_validate::{
    ChildConsent, DeliveryRecord, InMemoryStudyStore, RuleEngine, RuleSetOptions,
    ScheduleMembership, StudyContext,
};

pub const MOTHER: &str = "B142-040990001-6";
pub const CHILD: &str = "B142-040990001-6-10";
pub const SCHEDULE: &str = "a_quarterly1_schedule1";

pub fn subject(id: &str) -> SubjectId {
    SubjectId::new(id).expect("subject id")
}

pub fn visit() -> VisitRef {
    VisitRef::new(subject(MOTHER), SCHEDULE).with_visit_code("2001M")
}

pub fn membership() -> ScheduleMembership {
    ScheduleMembership {
        subject_identifier: subject(MOTHER),
        schedule_name: SCHEDULE.to_string(),
        child_subject_identifier: subject(CHILD),
    }
}

pub fn consent(preg_enroll: bool, day: u32) -> ChildConsent {
    ChildConsent {
        child_subject_identifier: subject(CHILD),
        consent_datetime: Utc.with_ymd_and_hms(2021, 3, day, 10, 0, 0).unwrap(),
        preg_enroll,
    }
}

/// A store where the mother enrolled after delivery, so she has delivered.
pub fn delivered_store(hiv_status: HivStatus) -> InMemoryStudyStore {
    InMemoryStudyStore::new()
        .with_hiv_status(subject(MOTHER), hiv_status)
        .with_membership(membership())
        .with_consent(consent(false, 1))
}

/// A store where the mother enrolled while pregnant and has no delivery yet.
pub fn pregnant_store(hiv_status: HivStatus) -> InMemoryStudyStore {
    InMemoryStudyStore::new()
        .with_hiv_status(subject(MOTHER), hiv_status)
        .with_membership(membership())
        .with_consent(consent(true, 1))
}

pub fn delivery() -> DeliveryRecord {
    DeliveryRecord {
        subject_identifier: subject(MOTHER),
        child_subject_identifier: subject(CHILD),
    }
}

pub fn engine(store: &InMemoryStudyStore) -> RuleEngine<'_> {
    engine_with(store, RuleSetOptions::default())
}

pub fn engine_with(store: &InMemoryStudyStore, options: RuleSetOptions) -> RuleEngine<'_> {
    RuleEngine::new(
        relationship_father_involvement::rule_set(&options),
        StudyContext::from_store(store),
    )
}

/// A complete submission from an HIV-positive mother living with the child's father.
pub fn valid_record() -> FormRecord {
    let mut record = FormRecord::new(visit()).with("partner_present", Response::Yes);
    for field in PARTNER_PRESENT_REQUIRED {
        record = record.with_choice(field, "answered");
    }
    record
        .with("is_partner_the_father", Response::Yes)
        .with("living_with_partner", Response::Yes)
        .with("ever_separated", Response::No)
        .with_integer("partner_age_in_years", 34)
        .with("contact_info", Response::No)
        .with("biological_father_alive", Response::Yes)
        .with("disclosure_to_partner", Response::Yes)
        .with("discussion_with_partner", Response::Yes)
        .with_choice("father_child_contact", "daily")
        .with_choice("fathers_financial_support", "very_supportive")
        .with_integer("child_left_alone", 0)
        .with_selection("read_books", ["mother"])
        .with_selection("told_stories", ["father", "grandparent"])
        .with_selection("sang_songs", ["mother", "father"])
        .with_selection("took_child_outside", ["no_one"])
        .with_selection("played_with_child", ["father"])
        .with_selection("named_with_child", ["sibling"])
}
