// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Package and service resource builders
//!
//! This module provides functions to build the package and service descriptors
//! handed to the host's package and service managers. All functions are pure and
//! easily testable.

use crate::constants::{API_PACKAGE_TITLE, API_SERVICE_TITLE};
use crate::os_family::OsFamilyProfile;
use crate::params::ApiParams;
use crate::tags::{package_tags, service_tags};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Package to install for the API server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageSpec {
    /// Resource title, stable across platforms
    pub title: String,
    /// Platform package name
    pub name: String,
    /// `present`, `latest`, `absent` or a version string
    pub ensure: String,
    pub tags: Vec<String>,
}

/// Desired running state of a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceEnsure {
    Running,
    Stopped,
}

impl fmt::Display for ServiceEnsure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Stopped => f.write_str("stopped"),
        }
    }
}

/// Service to manage for the API server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    /// Resource title, stable across platforms
    pub title: String,
    /// Platform service name
    pub name: String,
    /// `None` leaves the running state to the operator
    pub ensure: Option<ServiceEnsure>,
    /// Start at boot
    pub enable: bool,
    pub tags: Vec<String>,
}

/// Builds the API package descriptor.
///
/// `api_package_name` replaces the platform default verbatim when set.
///
/// # Arguments
///
/// * `params` - Input parameters
/// * `profile` - Naming profile of the host's OS family
///
/// # Returns
///
/// A `PackageSpec` ready to hand to the package manager
#[must_use]
pub fn build_package(params: &ApiParams, profile: &OsFamilyProfile) -> PackageSpec {
    let name = params
        .api_package_name
        .clone()
        .unwrap_or_else(|| profile.package_name_default.to_string());

    debug!(
        os_family = %profile.os_family,
        package = %name,
        custom = params.api_package_name.is_some(),
        "Building API package descriptor"
    );

    PackageSpec {
        title: API_PACKAGE_TITLE.to_string(),
        name,
        ensure: params.package_ensure.clone(),
        tags: package_tags(),
    }
}

/// Builds the API service descriptor.
///
/// The service name always comes from the OS family profile; a custom package name
/// never changes it. When `manage_service` is false no `ensure` is set.
///
/// # Arguments
///
/// * `params` - Input parameters
/// * `profile` - Naming profile of the host's OS family
///
/// # Returns
///
/// A `ServiceSpec` ready to hand to the service manager
#[must_use]
pub fn build_service(params: &ApiParams, profile: &OsFamilyProfile) -> ServiceSpec {
    let ensure = if params.manage_service {
        Some(if params.enabled {
            ServiceEnsure::Running
        } else {
            ServiceEnsure::Stopped
        })
    } else {
        None
    };

    debug!(
        os_family = %profile.os_family,
        service = %profile.service_name_default,
        ensure = ?ensure,
        enable = params.enabled,
        "Building API service descriptor"
    );

    ServiceSpec {
        title: API_SERVICE_TITLE.to_string(),
        name: profile.service_name_default.to_string(),
        ensure,
        enable: params.enabled,
        tags: service_tags(),
    }
}
