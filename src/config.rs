// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resolved `designate.conf` assignments.
//!
//! A [`ResolvedConfig`] is an ordered list of `(section, key) -> value` assignments.
//! Order is the order the resolver emitted them, which is also the order they are
//! rendered in. Assigning a key twice replaces the value in place.

use crate::constants::SERVICE_DEFAULT;
use crate::ini;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// Value of a single config directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigValue {
    /// Literal string value
    String(String),
    /// Boolean flag, written the way oslo.config spells it (`True` / `False`)
    Bool(bool),
    /// Keep the service's built-in default; never written literally
    ServiceDefault,
}

impl ConfigValue {
    /// True if this value defers to the service default
    #[must_use]
    pub const fn is_service_default(&self) -> bool {
        matches!(self, Self::ServiceDefault)
    }

    /// Maps `None`, or a value spelled as the sentinel, to [`ConfigValue::ServiceDefault`]
    #[must_use]
    pub fn or_service_default(value: Option<String>) -> Self {
        value.map_or(Self::ServiceDefault, Self::from)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::ServiceDefault => f.write_str(SERVICE_DEFAULT),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::ServiceDefault => serializer.serialize_str(SERVICE_DEFAULT),
        }
    }
}

// A string equal to the sentinel always means "keep the service default".
impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        if value == SERVICE_DEFAULT {
            Self::ServiceDefault
        } else {
            Self::String(value.to_string())
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        if value == SERVICE_DEFAULT {
            Self::ServiceDefault
        } else {
            Self::String(value)
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One `section/key = value` assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub section: String,
    pub key: String,
    pub value: ConfigValue,
}

impl ConfigEntry {
    #[must_use]
    pub fn new(section: &str, key: &str, value: impl Into<ConfigValue>) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            value: value.into(),
        }
    }

    /// `section/key` path, the way config resources are titled
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.section, self.key)
    }
}

/// Ordered set of config assignments produced by one resolver evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    entries: Vec<ConfigEntry>,
}

impl ResolvedConfig {
    /// Assigns `section/key`, replacing an earlier assignment in place.
    pub(crate) fn set(&mut self, section: &str, key: &str, value: impl Into<ConfigValue>) {
        let value = value.into();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.section == section && e.key == key)
        {
            existing.value = value;
        } else {
            self.entries.push(ConfigEntry::new(section, key, value));
        }
    }

    /// Value assigned to `section/key`, if any
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|e| e.section == section && e.key == key)
            .map(|e| &e.value)
    }

    /// True if at least one key is assigned in `section`
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.entries.iter().any(|e| e.section == section)
    }

    /// Section names in first-appearance order
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !sections.contains(&entry.section.as_str()) {
                sections.push(&entry.section);
            }
        }
        sections
    }

    /// Assignments in emission order
    #[must_use]
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Assignments belonging to `section`, in emission order
    pub fn section_entries<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a ConfigEntry> + 'a {
        self.entries.iter().filter(move |e| e.section == section)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA-256 of the rendered config file, as 64 lowercase hex characters.
    ///
    /// Two configs with the same fingerprint render byte-identical files, so callers
    /// can compare fingerprints to decide whether the service needs a restart.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let rendered = ini::render(self);
        let mut hasher = Sha256::new();
        hasher.update(rendered.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl FromIterator<ConfigEntry> for ResolvedConfig {
    fn from_iter<I: IntoIterator<Item = ConfigEntry>>(iter: I) -> Self {
        let mut config = Self::default();
        for entry in iter {
            config.set(&entry.section, &entry.key, entry.value);
        }
        config
    }
}
