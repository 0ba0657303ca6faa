// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Designate API manifest resolver.
//!
//! Every input parameter has its default spelled out here, next to the section and
//! key names written into `designate.conf`. Constants are organized by category for
//! easy maintenance.

// ============================================================================
// Resource Titles
// ============================================================================

/// Title of the package resource managed for the API server
pub const API_PACKAGE_TITLE: &str = "designate-api";

/// Title of the service resource managed for the API server
pub const API_SERVICE_TITLE: &str = "designate-api";

// ============================================================================
// OS Family Tags
// ============================================================================

/// OS family tag reported by fact discovery for Debian-like hosts
pub const OS_FAMILY_DEBIAN: &str = "Debian";

/// OS family tag reported by fact discovery for RedHat-like hosts
pub const OS_FAMILY_REDHAT: &str = "RedHat";

/// Debian package name for the API server
pub const DEBIAN_API_PACKAGE_NAME: &str = "designate-api";

/// RedHat package name for the API server (vendor prefixed)
pub const REDHAT_API_PACKAGE_NAME: &str = "openstack-designate-api";

/// Service name for the API server, identical on every supported family
pub const API_SERVICE_NAME: &str = "designate-api";

// ============================================================================
// Config File Sections
// ============================================================================

/// Section holding the API server options
pub const SECTION_SERVICE_API: &str = "service:api";

/// Section holding the identity token validation options
pub const SECTION_KEYSTONE_AUTHTOKEN: &str = "keystone_authtoken";

/// Marker meaning "leave the service's built-in default in place"
pub const SERVICE_DEFAULT: &str = "<SERVICE DEFAULT>";

// ============================================================================
// Package / Service Lifecycle Defaults
// ============================================================================

/// Default ensure value for the API package
pub const DEFAULT_PACKAGE_ENSURE: &str = "present";

/// Whether the API service is enabled at boot by default
pub const DEFAULT_SERVICE_ENABLED: bool = true;

/// Whether the resolver manages the running state of the service by default
pub const DEFAULT_MANAGE_SERVICE: bool = true;

// ============================================================================
// service:api Defaults
// ============================================================================

/// Default bind address of the API server
pub const DEFAULT_API_HOST: &str = "0.0.0.0";

/// Default listen port of the API server
pub const DEFAULT_API_PORT: &str = "9001";

/// Version 1 of the REST API is served by default
pub const DEFAULT_ENABLE_API_V1: bool = true;

/// Version 2 of the REST API is off by default
pub const DEFAULT_ENABLE_API_V2: bool = false;

/// The admin API is off by default
pub const DEFAULT_ENABLE_API_ADMIN: bool = false;

// ============================================================================
// Legacy keystone_* Parameter Defaults
// ============================================================================

/// Default identity service host used to build the legacy endpoint
pub const DEFAULT_KEYSTONE_HOST: &str = "127.0.0.1";

/// Default identity service admin port used to build the legacy endpoint
pub const DEFAULT_KEYSTONE_PORT: &str = "35357";

/// Default scheme used to build the legacy endpoint
pub const DEFAULT_KEYSTONE_PROTOCOL: &str = "http";

/// Default project the service user authenticates into
pub const DEFAULT_KEYSTONE_TENANT: &str = "services";

/// Default service user name
pub const DEFAULT_KEYSTONE_USER: &str = "designate";

// ============================================================================
// keystone_authtoken Defaults
// ============================================================================

/// Default admin endpoint for token validation
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:35357";

/// Default public endpoint advertised to clients
pub const DEFAULT_AUTH_URI: &str = "http://127.0.0.1:5000";

/// Default domain of the service user
pub const DEFAULT_USER_DOMAIN_NAME: &str = "Default";

/// Default domain of the service project
pub const DEFAULT_PROJECT_DOMAIN_NAME: &str = "Default";

/// Default authentication plugin
pub const DEFAULT_AUTH_TYPE: &str = "password";

/// Separator used when joining memcached endpoints into one value
pub const MEMCACHED_SERVERS_SEPARATOR: &str = ",";
