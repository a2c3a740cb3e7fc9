//! Closed token sets used by questionnaire answers and derived status.
//!
//! Wire strings follow the study's shared constants (`"Yes"`, `"N/A"`,
//! `"Dont_know"`, ...). Parsing is case-insensitive and also accepts the
//! symbolic spellings (`YES`, `NOT_APPLICABLE`, `DONT_KNOW`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single-choice response drawn from the study-wide constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Response {
    Yes,
    No,
    /// The question does not apply given the subject's current state.
    NotApplicable,
    /// Prefer not to answer.
    Pnta,
    DontKnow,
}

impl Response {
    pub const ALL: [Response; 5] = [
        Response::Yes,
        Response::No,
        Response::NotApplicable,
        Response::Pnta,
        Response::DontKnow,
    ];

    /// Canonical wire string, also used as a selection option short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Response::Yes => "Yes",
            Response::No => "No",
            Response::NotApplicable => "N/A",
            Response::Pnta => "PNTA",
            Response::DontKnow => "Dont_know",
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Response::NotApplicable)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Response {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "YES" => Ok(Response::Yes),
            "NO" => Ok(Response::No),
            "N/A" | "NA" | "NOT_APPLICABLE" => Ok(Response::NotApplicable),
            "PNTA" => Ok(Response::Pnta),
            "DONT_KNOW" | "DONT KNOW" => Ok(Response::DontKnow),
            _ => Err(format!("Unknown response: {s}")),
        }
    }
}

impl TryFrom<String> for Response {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Response> for String {
    fn from(value: Response) -> Self {
        value.as_str().to_string()
    }
}

/// Resolved HIV status of the mother, used to gate disclosure questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HivStatus {
    Pos,
    Neg,
    DontKnow,
    Pnta,
}

impl HivStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HivStatus::Pos => "POS",
            HivStatus::Neg => "NEG",
            HivStatus::DontKnow => "Dont_know",
            HivStatus::Pnta => "PNTA",
        }
    }
}

impl fmt::Display for HivStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HivStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "POS" | "POSITIVE" => Ok(HivStatus::Pos),
            "NEG" | "NEGATIVE" => Ok(HivStatus::Neg),
            "DONT_KNOW" | "DONT KNOW" | "UNK" => Ok(HivStatus::DontKnow),
            "PNTA" => Ok(HivStatus::Pnta),
            _ => Err(format!("Unknown HIV status: {s}")),
        }
    }
}

impl TryFrom<String> for HivStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HivStatus> for String {
    fn from(value: HivStatus) -> Self {
        value.as_str().to_string()
    }
}
