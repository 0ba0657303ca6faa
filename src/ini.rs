// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! INI rendering and in-place application of a [`ResolvedConfig`].
//!
//! Two ways to get a resolved config onto disk:
//!
//! - [`render`] produces a fresh file containing only the resolved directives.
//! - [`IniDocument::apply`] edits an existing file the way a config resource
//!   provider does: keys are set in place, missing sections and keys are appended,
//!   keys resolved to the service default are removed, and every other line
//!   (comments, unrelated sections, other services' options) is left untouched.
//!   A key repeated within a section, or across repeated headers of the same
//!   section, is collapsed to a single assignment.
//!
//! A value equal to the service default is never written literally.

use crate::config::{ConfigEntry, ResolvedConfig};
use crate::errors::IniError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Renders a resolved config as a standalone INI file.
///
/// Sections appear in first-appearance order separated by a blank line. Service
/// default values are written as commented-out `#key = <SERVICE DEFAULT>` lines.
#[must_use]
pub fn render(config: &ResolvedConfig) -> String {
    let mut out = String::new();

    for (index, section) in config.sections().into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{section}]\n"));
        for entry in config.section_entries(section) {
            out.push_str(&render_entry(entry));
            out.push('\n');
        }
    }

    out
}

fn render_entry(entry: &ConfigEntry) -> String {
    if entry.value.is_service_default() {
        format!("#{} = {}", entry.key, entry.value)
    } else {
        format!("{} = {}", entry.key, entry.value)
    }
}

/// Paths touched by [`IniDocument::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// `section/key` paths whose value was added or changed
    pub changed: Vec<String>,
    /// `section/key` paths removed because they resolved to the service default
    pub removed: Vec<String>,
}

impl ApplyReport {
    /// True if the document was modified
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.changed.is_empty() || !self.removed.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Line {
    Section(String),
    Entry { key: String, raw: String },
    Other(String),
}

impl Line {
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            return Self::Other(raw.to_string());
        }
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            return Self::Section(trimmed[1..trimmed.len() - 1].trim().to_string());
        }
        match trimmed.split_once('=') {
            Some((key, _)) => Self::Entry {
                key: key.trim().to_string(),
                raw: raw.to_string(),
            },
            None => Self::Other(raw.to_string()),
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            Self::Entry { raw, .. } => raw.split_once('=').map(|(_, v)| v.trim().to_string()),
            _ => None,
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Section(name) => format!("[{name}]"),
            Self::Entry { raw, .. } | Self::Other(raw) => raw.clone(),
        }
    }
}

/// An INI file held line by line so edits preserve everything they do not touch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniDocument {
    lines: Vec<Line>,
}

impl IniDocument {
    /// Parses INI text. Parsing never fails; unrecognised lines are kept verbatim.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.lines().map(Line::parse).collect(),
        }
    }

    /// Effective value of `section/key`, trimmed.
    ///
    /// When the key is repeated, the last occurrence wins, matching how oslo.config
    /// reads the file.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        let index = *self.find_entries(section, key).last()?;
        self.lines[index].value()
    }

    /// Applies every assignment of `config` to the document.
    ///
    /// Applying the same config a second time reports no changes.
    pub fn apply(&mut self, config: &ResolvedConfig) -> ApplyReport {
        let mut report = ApplyReport::default();

        for entry in config.entries() {
            let existing = self.find_entries(&entry.section, &entry.key);

            if entry.value.is_service_default() {
                if !existing.is_empty() {
                    self.remove_lines(&existing);
                    report.removed.push(entry.path());
                }
                continue;
            }

            let desired = entry.value.to_string();
            match existing.split_first() {
                Some((&first, duplicates)) => {
                    let stale = self.lines[first].value().as_deref() != Some(desired.as_str());
                    if stale {
                        self.lines[first] = entry_line(&entry.key, &desired);
                    }
                    // Later copies would override the first one when the file is read.
                    self.remove_lines(duplicates);
                    if stale || !duplicates.is_empty() {
                        report.changed.push(entry.path());
                    }
                }
                None => {
                    self.insert_entry(&entry.section, &entry.key, &desired);
                    report.changed.push(entry.path());
                }
            }
        }

        debug!(
            changed = report.changed.len(),
            removed = report.removed.len(),
            "Applied resolved config to INI document"
        );

        report
    }

    /// Index of the first header for `section`
    fn find_section(&self, section: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| matches!(line, Line::Section(name) if name == section))
    }

    /// Line range holding the body of the section whose header is at `header`
    fn section_body(&self, header: usize) -> std::ops::Range<usize> {
        let end = self.lines[header + 1..]
            .iter()
            .position(|line| matches!(line, Line::Section(_)))
            .map_or(self.lines.len(), |offset| header + 1 + offset);
        header + 1..end
    }

    /// Indices of every `key` assignment under any header for `section`, ascending
    fn find_entries(&self, section: &str, key: &str) -> Vec<usize> {
        let mut current: Option<&str> = None;
        let mut found = Vec::new();

        for (index, line) in self.lines.iter().enumerate() {
            match line {
                Line::Section(name) => current = Some(name.as_str()),
                Line::Entry { key: k, .. } if current == Some(section) && k == key => {
                    found.push(index);
                }
                _ => {}
            }
        }

        found
    }

    /// Removes the lines at `indices`, which must be ascending
    fn remove_lines(&mut self, indices: &[usize]) {
        for &index in indices.iter().rev() {
            self.lines.remove(index);
        }
    }

    fn insert_entry(&mut self, section: &str, key: &str, value: &str) {
        let line = entry_line(key, value);

        if let Some(header) = self.find_section(section) {
            let at = self
                .section_body(header)
                .rev()
                .find(|&i| matches!(self.lines[i], Line::Entry { .. }))
                .map_or(header + 1, |i| i + 1);
            self.lines.insert(at, line);
            return;
        }

        if self
            .lines
            .last()
            .is_some_and(|last| !matches!(last, Line::Other(raw) if raw.trim().is_empty()))
        {
            self.lines.push(Line::Other(String::new()));
        }
        self.lines.push(Line::Section(section.to_string()));
        self.lines.push(line);
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.raw())?;
        }
        Ok(())
    }
}

fn entry_line(key: &str, value: &str) -> Line {
    Line::Entry {
        key: key.to_string(),
        raw: format!("{key} = {value}"),
    }
}

/// Applies `config` to the INI file at `path`, creating it if missing.
///
/// The file is only rewritten when the report shows a change.
///
/// # Errors
///
/// Returns [`IniError::Read`] if an existing file cannot be read and
/// [`IniError::Write`] if the updated file cannot be written.
pub fn apply_to_file<P: AsRef<Path>>(
    path: P,
    config: &ResolvedConfig,
) -> Result<ApplyReport, IniError> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(IniError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut document = IniDocument::parse(&contents);
    let report = document.apply(config);

    if report.is_changed() {
        std::fs::write(path, document.to_string()).map_err(|source| IniError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            changed = ?report.changed,
            removed = ?report.removed,
            "Updated config file"
        );
    } else {
        debug!(path = %path.display(), "Config file already up to date");
    }

    Ok(report)
}
