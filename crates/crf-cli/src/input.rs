//! Loading submissions and study fixtures from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crf_model::RawSubmission;
use crf_validate::InMemoryStudyStore;

pub fn load_submission(path: &Path) -> Result<RawSubmission> {
    let submission: RawSubmission = read_json(path).context("load submission")?;
    debug!(
        fields = submission.fields.len(),
        path = %path.display(),
        "loaded submission"
    );
    Ok(submission)
}

pub fn load_study(path: &Path) -> Result<InMemoryStudyStore> {
    let store: InMemoryStudyStore = read_json(path).context("load study context")?;
    debug!(
        memberships = store.schedule_memberships.len(),
        consents = store.child_consents.len(),
        deliveries = store.deliveries.len(),
        path = %path.display(),
        "loaded study context"
    );
    Ok(store)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}
