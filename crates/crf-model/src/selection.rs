//! Multi-select answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One option of a multi-select catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionOption {
    /// Canonical key (e.g. `"father"`, `"N/A"`).
    pub short_name: String,
    /// Display label.
    pub name: String,
}

impl SelectionOption {
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            name: name.into(),
        }
    }
}

/// The options chosen for one multi-select field, keyed by short name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    options: BTreeMap<String, String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from bare short names, using the short name as label.
    pub fn from_short_names<I, S>(short_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        short_names
            .into_iter()
            .map(|short_name| {
                let short_name = short_name.into();
                SelectionOption::new(short_name.clone(), short_name)
            })
            .collect()
    }

    /// Add an option. A repeated short name keeps the first label.
    pub fn insert(&mut self, option: SelectionOption) {
        self.options
            .entry(option.short_name)
            .or_insert(option.name);
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.options.contains_key(short_name)
    }

    /// True if any of the given short names is selected.
    pub fn contains_any(&self, short_names: &[&str]) -> bool {
        short_names.iter().any(|name| self.contains(name))
    }

    /// Display label of a selected option.
    pub fn label(&self, short_name: &str) -> Option<&str> {
        self.options.get(short_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<SelectionOption> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = SelectionOption>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}
