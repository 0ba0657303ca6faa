// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resource tag constants.
//!
//! Tags let the package and service managers select every resource belonging to the
//! OpenStack deployment, or only the package / service resources of this component.

/// Tag shared by every resource belonging to the OpenStack deployment
pub const TAG_OPENSTACK: &str = "openstack";

/// Tag applied to the Designate package resources
pub const TAG_DESIGNATE_PACKAGE: &str = "designate-package";

/// Tag applied to the Designate service resources
pub const TAG_DESIGNATE_SERVICE: &str = "designate-service";

/// Tags attached to the API package resource, in declaration order
#[must_use]
pub fn package_tags() -> Vec<String> {
    vec![TAG_OPENSTACK.into(), TAG_DESIGNATE_PACKAGE.into()]
}

/// Tags attached to the API service resource, in declaration order
#[must_use]
pub fn service_tags() -> Vec<String> {
    vec![TAG_OPENSTACK.into(), TAG_DESIGNATE_SERVICE.into()]
}
