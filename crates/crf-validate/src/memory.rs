//! In-memory study store.
//!
//! Serves every collaborator lookup from plain collections, loadable from a
//! JSON fixture. Used by the command-line tool and by tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crf_model::{HivStatus, SubjectId, VisitRef};

use crate::context::{
    ChildConsent, ChildConsentStore, DeliveryRecordStore, MaternalStatusResolver,
    ScheduleMembership, ScheduleMembershipStore,
};

/// A completed maternal delivery for a caregiver/child pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub subject_identifier: SubjectId,
    pub child_subject_identifier: SubjectId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryStudyStore {
    /// HIV status per caregiver. Subjects without an entry resolve to `Dont_know`.
    #[serde(default)]
    pub hiv_status: BTreeMap<SubjectId, HivStatus>,
    #[serde(default)]
    pub schedule_memberships: Vec<ScheduleMembership>,
    #[serde(default)]
    pub child_consents: Vec<ChildConsent>,
    #[serde(default)]
    pub deliveries: Vec<DeliveryRecord>,
}

impl InMemoryStudyStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hiv_status(mut self, subject_identifier: SubjectId, status: HivStatus) -> Self {
        self.hiv_status.insert(subject_identifier, status);
        self
    }

    #[must_use]
    pub fn with_membership(mut self, membership: ScheduleMembership) -> Self {
        self.schedule_memberships.push(membership);
        self
    }

    #[must_use]
    pub fn with_consent(mut self, consent: ChildConsent) -> Self {
        self.child_consents.push(consent);
        self
    }

    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryRecord) -> Self {
        self.deliveries.push(delivery);
        self
    }
}

impl MaternalStatusResolver for InMemoryStudyStore {
    fn hiv_status(&self, visit: &VisitRef) -> HivStatus {
        self.hiv_status
            .get(&visit.subject_identifier)
            .copied()
            .unwrap_or(HivStatus::DontKnow)
    }
}

impl ScheduleMembershipStore for InMemoryStudyStore {
    fn lookup(
        &self,
        subject_identifier: &SubjectId,
        schedule_name: &str,
    ) -> Option<ScheduleMembership> {
        self.schedule_memberships
            .iter()
            .find(|membership| {
                &membership.subject_identifier == subject_identifier
                    && membership.schedule_name == schedule_name
            })
            .cloned()
    }
}

impl ChildConsentStore for InMemoryStudyStore {
    fn latest_consent(&self, child_subject_identifier: &SubjectId) -> Option<ChildConsent> {
        self.child_consents
            .iter()
            .filter(|consent| &consent.child_subject_identifier == child_subject_identifier)
            .max_by_key(|consent| consent.consent_datetime)
            .cloned()
    }
}

impl DeliveryRecordStore for InMemoryStudyStore {
    fn exists(&self, subject_identifier: &SubjectId, child_subject_identifier: &SubjectId) -> bool {
        self.deliveries.iter().any(|delivery| {
            &delivery.subject_identifier == subject_identifier
                && &delivery.child_subject_identifier == child_subject_identifier
        })
    }
}
