// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Designate API manifest resolver.
//!
//! This module provides specialized error types for:
//! - Resolving parameters into a manifest (unsupported platforms)
//! - Loading parameter files from disk
//! - Reading and writing the INI config file
//!
//! Resolution itself has exactly one failure mode. Everything else a caller can get
//! wrong in the parameters is covered by documented defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a resolver evaluation.
///
/// No partial manifest is ever produced alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The OS family tag has no entry in the profile table
    ///
    /// Returned when fact discovery reports a platform whose package and service
    /// naming conventions are unknown. Add a profile entry to support it.
    #[error("Unsupported OS family '{os_family}' (supported: {supported})")]
    UnsupportedOsFamily {
        /// The OS family tag as supplied by the caller
        os_family: String,
        /// Comma separated list of supported tags, for the error message
        supported: String,
    },
}

/// Errors that can occur while loading an [`ApiParams`](crate::params::ApiParams) file.
#[derive(Error, Debug)]
pub enum ParamsError {
    /// Parameter file does not exist
    #[error("Parameter file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Parameter file could not be read
    #[error("Failed to read parameter file {}: {source}", path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// YAML parameters are malformed or contain unknown fields
    #[error("Invalid YAML parameters: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parameters are malformed or contain unknown fields
    #[error("Invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while applying a resolved config to an INI file.
#[derive(Error, Debug)]
pub enum IniError {
    /// Existing config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be written
    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
