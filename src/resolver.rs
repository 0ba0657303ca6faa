// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Parameter resolution for the Designate API server.
//!
//! [`resolve`] is the single entry point: it turns [`ApiParams`] and an OS family
//! tag into an [`ApiManifest`]. Resolution is pure. It performs no I/O and keeps no
//! state between calls, so resolving the same input twice yields identical output
//! and separate hosts can be resolved in parallel.
//!
//! # Example
//!
//! ```rust
//! use designate_manifest::config::ConfigValue;
//! use designate_manifest::params::ApiParams;
//! use designate_manifest::resolver::resolve;
//!
//! let manifest = resolve(&ApiParams::default(), "RedHat").unwrap();
//!
//! assert_eq!(manifest.package.name, "openstack-designate-api");
//! assert_eq!(manifest.service.name, "designate-api");
//! assert_eq!(
//!     manifest.config.get("service:api", "api_port"),
//!     Some(&ConfigValue::from("9001"))
//! );
//! assert!(!manifest.config.has_section("keystone_authtoken"));
//! ```

use crate::config::{ConfigValue, ResolvedConfig};
use crate::constants::{
    MEMCACHED_SERVERS_SEPARATOR, SECTION_KEYSTONE_AUTHTOKEN, SECTION_SERVICE_API,
};
use crate::errors::ResolveError;
use crate::identity::{self, IdentityParams};
use crate::os_family::lookup_profile;
use crate::params::{ApiParams, AuthStrategy};
use crate::resources::{build_package, build_service, PackageSpec, ServiceSpec};
use serde::Serialize;
use tracing::{debug, info};

/// Everything a convergence run needs to install and configure the API server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiManifest {
    pub package: PackageSpec,
    pub service: ServiceSpec,
    pub config: ResolvedConfig,
}

impl ApiManifest {
    /// Splits the manifest into the inputs of the three external collaborators
    #[must_use]
    pub fn into_parts(self) -> (PackageSpec, ServiceSpec, ResolvedConfig) {
        (self.package, self.service, self.config)
    }
}

/// Resolves input parameters into package, service and config descriptors.
///
/// # Arguments
///
/// * `params` - Input parameters, with defaults already applied
/// * `os_family` - OS family tag reported by fact discovery
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedOsFamily`] if the OS family has no profile.
/// Nothing else can fail.
pub fn resolve(params: &ApiParams, os_family: &str) -> Result<ApiManifest, ResolveError> {
    let profile = lookup_profile(os_family)?;

    let package = build_package(params, profile);
    let service = build_service(params, profile);
    let config = build_config(params);

    info!(
        os_family = %profile.os_family,
        package = %package.name,
        service = %service.name,
        auth_strategy = %params.auth_strategy,
        directives = config.len(),
        "Resolved Designate API manifest"
    );

    Ok(ApiManifest {
        package,
        service,
        config,
    })
}

/// Builds every `designate.conf` assignment for the API server.
///
/// The `service:api` section is always emitted. The `keystone_authtoken` section is
/// emitted if and only if the auth strategy is `keystone`.
#[must_use]
pub fn build_config(params: &ApiParams) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();

    build_service_api_section(&mut config, params);

    if params.auth_strategy == AuthStrategy::Keystone {
        let identity = identity::normalize(params);
        debug!(source = ?identity.source, "Emitting keystone_authtoken section");
        build_authtoken_section(&mut config, &identity);
    }

    config
}

fn build_service_api_section(config: &mut ResolvedConfig, params: &ApiParams) {
    let s = SECTION_SERVICE_API;
    config.set(s, "auth_strategy", params.auth_strategy.as_str());
    config.set(s, "enable_api_v1", params.enable_api_v1);
    config.set(s, "enable_api_v2", params.enable_api_v2);
    config.set(s, "enable_api_admin", params.enable_api_admin);
    config.set(s, "api_host", params.api_host.as_str());
    config.set(s, "api_port", params.api_port.as_str());
    config.set(
        s,
        "api_base_uri",
        ConfigValue::or_service_default(params.api_base_uri.clone()),
    );
}

fn build_authtoken_section(config: &mut ResolvedConfig, identity: &IdentityParams) {
    let s = SECTION_KEYSTONE_AUTHTOKEN;
    config.set(s, "auth_url", identity.auth_url.as_str());
    config.set(s, "auth_uri", identity.auth_uri.as_str());
    config.set(s, "project_name", identity.project_name.as_str());
    config.set(s, "username", identity.username.as_str());
    config.set(
        s,
        "password",
        ConfigValue::or_service_default(identity.password.clone()),
    );
    config.set(s, "user_domain_name", identity.user_domain_name.as_str());
    config.set(s, "project_domain_name", identity.project_domain_name.as_str());
    config.set(s, "auth_type", identity.auth_type.as_str());

    // Input order is preserved and duplicates are kept. A lone sentinel entry
    // joins to the sentinel itself and so keeps the service default too.
    let memcached_servers = if identity.memcached_servers.is_empty() {
        ConfigValue::ServiceDefault
    } else {
        ConfigValue::from(identity.memcached_servers.join(MEMCACHED_SERVERS_SEPARATOR))
    };
    config.set(s, "memcached_servers", memcached_servers);
}
