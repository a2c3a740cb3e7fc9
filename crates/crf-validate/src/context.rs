//! Facts about the subject that live outside the submitted record.
//!
//! Collaborators are injected as trait objects; nothing is looked up by name
//! at call time. Facts are resolved fresh for every validation call and never
//! cached across calls.
//!
//! Delivery status follows the enrollment chain:
//!
//! 1. visit → subject identifier and schedule name
//! 2. schedule membership → child subject identifier
//! 3. latest consent on behalf of the child → pregnancy-enrollment flag
//! 4. pregnancy enrollment → a delivery record must exist; otherwise the
//!    mother enrolled after delivery and has delivered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crf_model::{HivStatus, SubjectId, VisitRef};

use crate::error::ValidationError;

pub const SCHEDULE_MEMBERSHIP_NOT_FOUND: &str = "Onschedule does not exist.";
pub const CHILD_CONSENT_NOT_FOUND: &str = "Caregiver consent on behalf of child does not exist.";

/// Links a caregiver on an enrollment schedule to the child they are paired with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMembership {
    pub subject_identifier: SubjectId,
    pub schedule_name: String,
    pub child_subject_identifier: SubjectId,
}

/// Consent given by the caregiver on behalf of a child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildConsent {
    pub child_subject_identifier: SubjectId,
    pub consent_datetime: DateTime<Utc>,
    /// Caregiver enrolled while pregnant with this child.
    pub preg_enroll: bool,
}

/// Resolves the mother's HIV status as of a visit.
pub trait MaternalStatusResolver {
    fn hiv_status(&self, visit: &VisitRef) -> HivStatus;
}

/// Looks up a caregiver's enrollment on a named schedule.
pub trait ScheduleMembershipStore {
    fn lookup(
        &self,
        subject_identifier: &SubjectId,
        schedule_name: &str,
    ) -> Option<ScheduleMembership>;
}

/// Consents given on behalf of a child.
pub trait ChildConsentStore {
    /// Most recent consent by `consent_datetime`.
    fn latest_consent(&self, child_subject_identifier: &SubjectId) -> Option<ChildConsent>;
}

/// Delivery records linking a mother to a delivered child.
pub trait DeliveryRecordStore {
    /// True if the mother has a delivery record for the child.
    fn exists(&self, subject_identifier: &SubjectId, child_subject_identifier: &SubjectId) -> bool;
}

/// Which derived facts a rule set reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextRequirements {
    pub hiv_status: bool,
    pub delivery: bool,
}

impl ContextRequirements {
    /// Rules read nothing outside the record.
    pub const NONE: Self = Self {
        hiv_status: false,
        delivery: false,
    };
    /// Rules read the HIV status and the delivery status.
    pub const ALL: Self = Self {
        hiv_status: true,
        delivery: true,
    };
}

/// Delivery facts for the child linked to the visit's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryStatus {
    pub child_subject_identifier: SubjectId,
    pub preg_enroll: bool,
    pub has_delivered: bool,
}

/// Derived facts available to rules during one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalStatusContext {
    hiv_status: Option<HivStatus>,
    delivery: Option<DeliveryStatus>,
}

impl ExternalStatusContext {
    /// Create a context with nothing resolved.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hiv_status(mut self, hiv_status: HivStatus) -> Self {
        self.hiv_status = Some(hiv_status);
        self
    }

    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryStatus) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// The mother's HIV status, if the rule set asked for it.
    pub fn hiv_status(&self) -> Result<HivStatus, ValidationError> {
        self.hiv_status
            .ok_or_else(|| ValidationError::context_not_found("HIV status was not resolved."))
    }

    /// The delivery facts, if the rule set asked for them.
    pub fn delivery(&self) -> Result<&DeliveryStatus, ValidationError> {
        self.delivery
            .as_ref()
            .ok_or_else(|| ValidationError::context_not_found("Delivery status was not resolved."))
    }

    pub fn has_delivered(&self) -> Result<bool, ValidationError> {
        self.delivery().map(|delivery| delivery.has_delivered)
    }

    /// Whether the mother enrolled while pregnant with the linked child.
    pub fn preg_enroll(&self) -> Result<bool, ValidationError> {
        self.delivery().map(|delivery| delivery.preg_enroll)
    }
}

/// The study records a validation call may consult.
#[derive(Clone, Copy)]
pub struct StudyContext<'a> {
    maternal_status: &'a dyn MaternalStatusResolver,
    schedules: &'a dyn ScheduleMembershipStore,
    consents: &'a dyn ChildConsentStore,
    deliveries: &'a dyn DeliveryRecordStore,
}

impl<'a> StudyContext<'a> {
    /// Create a context from one collaborator per lookup.
    pub fn new(
        maternal_status: &'a dyn MaternalStatusResolver,
        schedules: &'a dyn ScheduleMembershipStore,
        consents: &'a dyn ChildConsentStore,
        deliveries: &'a dyn DeliveryRecordStore,
    ) -> Self {
        Self {
            maternal_status,
            schedules,
            consents,
            deliveries,
        }
    }

    /// Use one store for every lookup.
    pub fn from_store<S>(store: &'a S) -> Self
    where
        S: MaternalStatusResolver
            + ScheduleMembershipStore
            + ChildConsentStore
            + DeliveryRecordStore,
    {
        Self::new(store, store, store, store)
    }

    /// The mother's HIV status for the visit.
    pub fn hiv_status(&self, visit: &VisitRef) -> HivStatus {
        self.maternal_status.hiv_status(visit)
    }

    /// Whether the latest consent for the child records a pregnancy enrollment.
    pub fn is_preg_enroll(
        &self,
        child_subject_identifier: &SubjectId,
    ) -> Result<bool, ValidationError> {
        self.consents
            .latest_consent(child_subject_identifier)
            .map(|consent| consent.preg_enroll)
            .ok_or_else(|| ValidationError::context_not_found(CHILD_CONSENT_NOT_FOUND))
    }

    /// Follow the enrollment chain for the visit.
    ///
    /// Fails with `ContextNotFound` when the schedule membership or the child
    /// consent is missing.
    pub fn delivery_status(&self, visit: &VisitRef) -> Result<DeliveryStatus, ValidationError> {
        let subject_identifier = &visit.subject_identifier;
        let membership = self
            .schedules
            .lookup(subject_identifier, &visit.schedule_name)
            .ok_or_else(|| ValidationError::context_not_found(SCHEDULE_MEMBERSHIP_NOT_FOUND))?;
        let child_subject_identifier = membership.child_subject_identifier;

        let preg_enroll = self.is_preg_enroll(&child_subject_identifier)?;
        let has_delivered = if preg_enroll {
            self.deliveries
                .exists(subject_identifier, &child_subject_identifier)
        } else {
            true
        };
        debug!(
            schedule = %visit.schedule_name,
            preg_enroll,
            has_delivered,
            "resolved delivery status"
        );

        Ok(DeliveryStatus {
            child_subject_identifier,
            preg_enroll,
            has_delivered,
        })
    }

    /// Resolve the facts named by `requirements`.
    pub fn resolve(
        &self,
        visit: &VisitRef,
        requirements: ContextRequirements,
    ) -> Result<ExternalStatusContext, ValidationError> {
        let mut context = ExternalStatusContext::new();
        if requirements.hiv_status {
            context = context.with_hiv_status(self.hiv_status(visit));
        }
        if requirements.delivery {
            context = context.with_delivery(self.delivery_status(visit)?);
        }
        Ok(context)
    }
}
