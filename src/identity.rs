// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Normalization of identity parameters.
//!
//! The `keystone_authtoken` section can be described by two input shapes: the legacy
//! discrete `keystone_*` fields of [`ApiParams`] and the [`AuthtokenParams`] record.
//! Each shape has an adapter producing the canonical [`IdentityParams`], and the
//! config section is derived from that record alone.
//!
//! When both shapes are supplied the `keystone_authtoken` record wins and the
//! legacy fields are ignored with a warning.

use crate::constants::{
    DEFAULT_AUTH_TYPE, DEFAULT_AUTH_URI, DEFAULT_AUTH_URL, DEFAULT_KEYSTONE_HOST,
    DEFAULT_KEYSTONE_PORT, DEFAULT_KEYSTONE_PROTOCOL, DEFAULT_KEYSTONE_TENANT,
    DEFAULT_KEYSTONE_USER, DEFAULT_PROJECT_DOMAIN_NAME, DEFAULT_USER_DOMAIN_NAME,
};
use crate::params::{ApiParams, AuthtokenParams};
use serde::Serialize;
use tracing::{debug, warn};

/// Which input shape an [`IdentityParams`] was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// The `keystone_authtoken` record
    Authtoken,
    /// The deprecated discrete `keystone_*` fields
    Legacy,
    /// Neither shape was supplied
    Defaults,
}

/// Canonical identity settings, one field per `keystone_authtoken` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentityParams {
    /// Input shape these settings came from
    pub source: IdentitySource,
    /// Admin endpoint used to validate tokens
    pub auth_url: String,
    /// Public endpoint advertised to clients
    pub auth_uri: String,
    /// Project the service user authenticates into
    pub project_name: String,
    /// Service user name
    pub username: String,
    /// `None` keeps the service default
    pub password: Option<String>,
    /// Domain of the service user
    pub user_domain_name: String,
    /// Domain of the service project
    pub project_domain_name: String,
    /// Authentication plugin
    pub auth_type: String,
    /// Empty keeps the service default
    pub memcached_servers: Vec<String>,
}

/// Builds identity settings from the legacy `keystone_*` fields.
///
/// Both endpoints are assembled as `{protocol}://{host}:{port}`; unset fields take
/// their legacy defaults. `keystone_memcached_servers` is carried over verbatim.
#[must_use]
pub fn from_legacy(params: &ApiParams) -> IdentityParams {
    let protocol = params
        .keystone_protocol
        .as_deref()
        .unwrap_or(DEFAULT_KEYSTONE_PROTOCOL);
    let host = params
        .keystone_host
        .as_deref()
        .unwrap_or(DEFAULT_KEYSTONE_HOST);
    let port = params
        .keystone_port
        .as_deref()
        .unwrap_or(DEFAULT_KEYSTONE_PORT);

    let endpoint = format!("{protocol}://{host}:{port}");

    IdentityParams {
        source: IdentitySource::Legacy,
        auth_url: endpoint.clone(),
        auth_uri: endpoint,
        project_name: params
            .keystone_tenant
            .clone()
            .unwrap_or_else(|| DEFAULT_KEYSTONE_TENANT.to_string()),
        username: params
            .keystone_user
            .clone()
            .unwrap_or_else(|| DEFAULT_KEYSTONE_USER.to_string()),
        password: params.keystone_password.clone(),
        user_domain_name: DEFAULT_USER_DOMAIN_NAME.to_string(),
        project_domain_name: DEFAULT_PROJECT_DOMAIN_NAME.to_string(),
        auth_type: DEFAULT_AUTH_TYPE.to_string(),
        memcached_servers: params.keystone_memcached_servers.clone(),
    }
}

/// Builds identity settings from a `keystone_authtoken` record.
///
/// `fallback_memcached_servers` is used when the record lists no cache endpoints
/// of its own.
#[must_use]
pub fn from_authtoken(
    authtoken: &AuthtokenParams,
    fallback_memcached_servers: &[String],
) -> IdentityParams {
    let memcached_servers = if authtoken.memcached_servers.is_empty() {
        fallback_memcached_servers.to_vec()
    } else {
        authtoken.memcached_servers.clone()
    };

    IdentityParams {
        source: IdentitySource::Authtoken,
        auth_url: or_default(authtoken.auth_url.as_ref(), DEFAULT_AUTH_URL),
        auth_uri: or_default(authtoken.auth_uri.as_ref(), DEFAULT_AUTH_URI),
        project_name: or_default(authtoken.project_name.as_ref(), DEFAULT_KEYSTONE_TENANT),
        username: or_default(authtoken.username.as_ref(), DEFAULT_KEYSTONE_USER),
        password: authtoken.password.clone(),
        user_domain_name: or_default(
            authtoken.user_domain_name.as_ref(),
            DEFAULT_USER_DOMAIN_NAME,
        ),
        project_domain_name: or_default(
            authtoken.project_domain_name.as_ref(),
            DEFAULT_PROJECT_DOMAIN_NAME,
        ),
        auth_type: or_default(authtoken.auth_type.as_ref(), DEFAULT_AUTH_TYPE),
        memcached_servers,
    }
}

/// Normalizes whichever identity shape `params` carries into [`IdentityParams`].
///
/// Precedence: `keystone_authtoken` record, then legacy fields, then defaults.
#[must_use]
pub fn normalize(params: &ApiParams) -> IdentityParams {
    let legacy_fields = params.legacy_identity_fields();

    if let Some(authtoken) = &params.keystone_authtoken {
        if !legacy_fields.is_empty() {
            warn!(
                ignored = ?legacy_fields,
                "Both keystone_authtoken and legacy keystone_* parameters supplied, ignoring legacy parameters"
            );
        }
        debug!("Using keystone_authtoken parameters for identity settings");
        return from_authtoken(authtoken, &params.keystone_memcached_servers);
    }

    if !legacy_fields.is_empty() {
        for field in &legacy_fields {
            warn!(
                parameter = %field,
                replacement = %modern_replacement(field),
                "Deprecated identity parameter in use"
            );
        }
        return from_legacy(params);
    }

    debug!("No identity parameters supplied, using keystone_authtoken defaults");
    let mut identity =
        from_authtoken(&AuthtokenParams::default(), &params.keystone_memcached_servers);
    identity.source = IdentitySource::Defaults;
    identity
}

/// Name of the `keystone_authtoken` field replacing a legacy parameter
fn modern_replacement(legacy: &str) -> &'static str {
    match legacy {
        "keystone_password" => "keystone_authtoken.password",
        "keystone_tenant" => "keystone_authtoken.project_name",
        "keystone_user" => "keystone_authtoken.username",
        _ => "keystone_authtoken.auth_url",
    }
}

fn or_default(value: Option<&String>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), Clone::clone)
}
