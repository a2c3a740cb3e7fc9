//! Conditional validation for caregiver relationship case report forms.
//!
//! Generic scalar and multi-select checks are composed into an ordered
//! [`RuleSet`] per questionnaire and run by a [`RuleEngine`], which resolves
//! facts held in other study records through injected collaborators.

pub mod context;
pub mod engine;
pub mod error;
pub mod m2m;
pub mod memory;
pub mod rules;
pub mod scalar;

pub use context::{
    ChildConsent, ChildConsentStore, ContextRequirements, DeliveryRecordStore, DeliveryStatus,
    ExternalStatusContext, MaternalStatusResolver, ScheduleMembership, ScheduleMembershipStore,
    StudyContext,
};
pub use engine::RuleEngine;
pub use error::{ErrorKind, ValidationError, ValidationReport};
pub use memory::{DeliveryRecord, InMemoryStudyStore};
pub use rules::{Rule, RuleSet, RuleSetOptions, relationship_father_involvement};
