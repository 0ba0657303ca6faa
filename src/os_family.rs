// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Per-platform package and service naming.
//!
//! The profile table is the only place platform differences live. Supporting a new
//! OS family means adding a row to [`OS_FAMILY_PROFILES`], never adding a branch.

use crate::constants::{
    API_SERVICE_NAME, DEBIAN_API_PACKAGE_NAME, OS_FAMILY_DEBIAN, OS_FAMILY_REDHAT,
    REDHAT_API_PACKAGE_NAME,
};
use crate::errors::ResolveError;
use serde::Serialize;

/// Default package and service names for one OS family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OsFamilyProfile {
    /// OS family tag as reported by fact discovery
    pub os_family: &'static str,
    /// Package installed when no override is given
    pub package_name_default: &'static str,
    /// Service started for the API server
    pub service_name_default: &'static str,
}

/// Every supported OS family.
pub const OS_FAMILY_PROFILES: &[OsFamilyProfile] = &[
    OsFamilyProfile {
        os_family: OS_FAMILY_DEBIAN,
        package_name_default: DEBIAN_API_PACKAGE_NAME,
        service_name_default: API_SERVICE_NAME,
    },
    OsFamilyProfile {
        os_family: OS_FAMILY_REDHAT,
        package_name_default: REDHAT_API_PACKAGE_NAME,
        service_name_default: API_SERVICE_NAME,
    },
];

/// Looks up the profile for an OS family tag.
///
/// Tags are matched case-insensitively, so `debian` and `Debian` are the same family.
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedOsFamily`] if no profile matches.
pub fn lookup_profile(os_family: &str) -> Result<&'static OsFamilyProfile, ResolveError> {
    OS_FAMILY_PROFILES
        .iter()
        .find(|profile| profile.os_family.eq_ignore_ascii_case(os_family.trim()))
        .ok_or_else(|| ResolveError::UnsupportedOsFamily {
            os_family: os_family.to_string(),
            supported: supported_os_families().join(", "),
        })
}

/// Tags of every supported OS family, in table order
#[must_use]
pub fn supported_os_families() -> Vec<&'static str> {
    OS_FAMILY_PROFILES.iter().map(|p| p.os_family).collect()
}
