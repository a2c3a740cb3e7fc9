//! Rule sets: ordered, named checks for one questionnaire.

pub mod relationship_father_involvement;

use std::fmt;

use serde::{Deserialize, Serialize};

use crf_model::{FormRecord, FormSchema};

use crate::context::{ContextRequirements, ExternalStatusContext};
use crate::error::ValidationError;

type Check =
    dyn Fn(&FormRecord, &ExternalStatusContext) -> Result<(), ValidationError> + Send + Sync;

/// A single named check. Passes silently or returns the first violation it finds.
pub struct Rule {
    name: String,
    check: Box<Check>,
}

impl Rule {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&FormRecord, &ExternalStatusContext) -> Result<(), ValidationError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(
        &self,
        record: &FormRecord,
        context: &ExternalStatusContext,
    ) -> Result<(), ValidationError> {
        (self.check)(record, context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Deployment switches for a rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetOptions {
    /// Require disclosure answers for HIV-positive mothers. Off by default.
    #[serde(default)]
    pub positive_mother_disclosure: bool,
}

/// The questionnaire schema, the facts its rules read, and the rules in execution order.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    pub schema: FormSchema,
    pub requirements: ContextRequirements,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
