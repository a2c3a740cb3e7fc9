//! Typed, read-only view of one form submission.
//!
//! A [`FormRecord`] is built once per submission, either programmatically or
//! from a [`RawSubmission`] checked against a [`FormSchema`]. The shape check
//! runs before any business rule, so rules can rely on each field holding the
//! kind its schema declares.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Response;
use crate::error::{ModelError, Result};
use crate::ids::VisitRef;
use crate::schema::{FieldKind, FormSchema};
use crate::selection::{SelectionOption, SelectionSet};

/// The value held by one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Response(Response),
    Choice(String),
    Text(String),
    Integer(i64),
    Selection(SelectionSet),
}

impl FieldValue {
    /// Non-blank text, a non-empty selection, or any token/number.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Choice(value) | FieldValue::Text(value) => !value.trim().is_empty(),
            FieldValue::Selection(set) => !set.is_empty(),
            FieldValue::Response(_) | FieldValue::Integer(_) => true,
        }
    }

    pub fn as_response(&self) -> Option<Response> {
        match self {
            FieldValue::Response(response) => Some(*response),
            _ => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        self.as_response()
            .is_some_and(|response| response.is_not_applicable())
    }
}

impl From<Response> for FieldValue {
    fn from(value: Response) -> Self {
        FieldValue::Response(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<SelectionSet> for FieldValue {
    fn from(value: SelectionSet) -> Self {
        FieldValue::Selection(value)
    }
}

/// Submission as received from the data-entry client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubmission {
    pub maternal_visit: VisitRef,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    visit: VisitRef,
    values: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    pub fn new(visit: VisitRef) -> Self {
        Self {
            visit,
            values: BTreeMap::new(),
        }
    }

    /// Set a field value, replacing any previous one.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Set a free-text field.
    #[must_use]
    pub fn with_text(self, field: &str, value: impl Into<String>) -> Self {
        self.with(field, FieldValue::Text(value.into()))
    }

    /// Set a coded-choice field.
    #[must_use]
    pub fn with_choice(self, field: &str, value: impl Into<String>) -> Self {
        self.with(field, FieldValue::Choice(value.into()))
    }

    #[must_use]
    pub fn with_integer(self, field: &str, value: i64) -> Self {
        self.with(field, FieldValue::Integer(value))
    }

    /// Set a multi-select field from option short names.
    #[must_use]
    pub fn with_selection<I, S>(self, field: &str, short_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(field, SelectionSet::from_short_names(short_names))
    }

    /// Build a record from a raw submission, checking every field against the schema.
    pub fn from_raw(schema: &FormSchema, raw: RawSubmission) -> Result<Self> {
        let mut record = FormRecord::new(raw.maternal_visit);
        for (name, value) in raw.fields {
            let spec = schema
                .field(&name)
                .ok_or_else(|| ModelError::UnknownField(name.clone()))?;
            if let Some(value) = parse_value(&name, spec.kind, value)? {
                record.values.insert(name, value);
            }
        }
        Ok(record)
    }

    pub fn visit(&self) -> &VisitRef {
        &self.visit
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn response(&self, field: &str) -> Option<Response> {
        self.get(field).and_then(FieldValue::as_response)
    }

    /// True if the field holds exactly the given response token.
    pub fn equals(&self, field: &str, response: Response) -> bool {
        self.response(field) == Some(response)
    }

    /// True if the field holds one of the given response tokens.
    pub fn is_one_of(&self, field: &str, responses: &[Response]) -> bool {
        self.response(field)
            .is_some_and(|response| responses.contains(&response))
    }

    pub fn is_present(&self, field: &str) -> bool {
        self.get(field).is_some_and(FieldValue::is_present)
    }

    pub fn is_not_applicable(&self, field: &str) -> bool {
        self.get(field).is_some_and(FieldValue::is_not_applicable)
    }

    /// Present and not `N/A`.
    pub fn is_substantive(&self, field: &str) -> bool {
        self.is_present(field) && !self.is_not_applicable(field)
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.get(field) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(FieldValue::Text(value) | FieldValue::Choice(value)) => Some(value),
            _ => None,
        }
    }

    pub fn selection(&self, field: &str) -> Option<&SelectionSet> {
        match self.get(field) {
            Some(FieldValue::Selection(set)) => Some(set),
            _ => None,
        }
    }

    /// Field names holding a value, in name order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Parse one JSON value into the declared kind. Null and empty values are absent.
fn parse_value(field: &str, kind: FieldKind, value: Value) -> Result<Option<FieldValue>> {
    let mismatch = |value: &Value| ModelError::KindMismatch {
        field: field.to_string(),
        expected: kind,
        found: json_kind(value),
    };

    if value.is_null() {
        return Ok(None);
    }

    match kind {
        FieldKind::Response => {
            let Value::String(token) = &value else {
                return Err(mismatch(&value));
            };
            if token.trim().is_empty() {
                return Ok(None);
            }
            token
                .parse::<Response>()
                .map(|response| Some(FieldValue::Response(response)))
                .map_err(|_| ModelError::InvalidToken {
                    field: field.to_string(),
                    token: token.clone(),
                })
        }
        FieldKind::Choice => {
            let choice = match value {
                Value::String(choice) => choice,
                other => return Err(mismatch(&other)),
            };
            if choice.trim().is_empty() {
                return Ok(None);
            }
            Ok(Some(match choice.parse::<Response>() {
                Ok(response) => FieldValue::Response(response),
                Err(_) => FieldValue::Choice(choice),
            }))
        }
        FieldKind::Text => match value {
            Value::String(text) if text.is_empty() => Ok(None),
            Value::String(text) => Ok(Some(FieldValue::Text(text))),
            other => Err(mismatch(&other)),
        },
        FieldKind::Integer => value
            .as_i64()
            .map(|number| Some(FieldValue::Integer(number)))
            .ok_or_else(|| mismatch(&value)),
        FieldKind::Selection => {
            let Value::Array(items) = &value else {
                return Err(mismatch(&value));
            };
            let mut set = SelectionSet::new();
            for item in items {
                set.insert(parse_option(field, item)?);
            }
            if set.is_empty() {
                Ok(None)
            } else {
                Ok(Some(FieldValue::Selection(set)))
            }
        }
    }
}

/// Options arrive either as bare short names or as `{short_name, name}` objects.
///
/// Short names spelling a response token are stored under the token's wire
/// string, so `NOT_APPLICABLE` and `n/a` both select `N/A`.
fn parse_option(field: &str, item: &Value) -> Result<SelectionOption> {
    let invalid = || ModelError::InvalidSelection {
        field: field.to_string(),
    };
    match item {
        Value::String(short_name) if !short_name.trim().is_empty() => {
            let short_name = canonical_short_name(short_name);
            Ok(SelectionOption::new(short_name.clone(), short_name))
        }
        Value::Object(object) => {
            let short_name = object
                .get("short_name")
                .and_then(Value::as_str)
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(invalid)?;
            let name = object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(short_name);
            Ok(SelectionOption::new(canonical_short_name(short_name), name))
        }
        _ => Err(invalid()),
    }
}

fn canonical_short_name(short_name: &str) -> String {
    match short_name.parse::<Response>() {
        Ok(response) => response.as_str().to_string(),
        Err(_) => short_name.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
