// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Input parameters for the Designate API server.
//!
//! [`ApiParams`] is the complete set of named inputs a convergence run may supply.
//! Every field has a documented default, so an empty parameter file is valid and
//! describes a stock `noauth` API server.
//!
//! # Identity parameters
//!
//! Token validation against the identity service can be described in two shapes:
//!
//! - **Legacy discrete fields** (`keystone_host`, `keystone_port`, `keystone_protocol`,
//!   `keystone_tenant`, `keystone_user`, `keystone_password`) from which the endpoint
//!   URLs are assembled.
//! - **The `keystone_authtoken` record** ([`AuthtokenParams`]) which names the
//!   endpoints directly.
//!
//! Both produce the same `keystone_authtoken` config section. See
//! [`crate::identity`] for how they are normalized.
//!
//! # Example
//!
//! ```rust
//! use designate_manifest::params::{ApiParams, AuthStrategy};
//!
//! let params = ApiParams::from_yaml_str(
//!     r#"
//! auth_strategy: keystone
//! keystone_host: 10.0.0.42
//! keystone_password: passw0rd
//! keystone_memcached_servers:
//!   - 127.0.0.1:11211
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(params.auth_strategy, AuthStrategy::Keystone);
//! assert_eq!(params.api_port, "9001");
//! ```

use crate::constants::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_ENABLE_API_ADMIN, DEFAULT_ENABLE_API_V1,
    DEFAULT_ENABLE_API_V2, DEFAULT_MANAGE_SERVICE, DEFAULT_PACKAGE_ENSURE,
    DEFAULT_SERVICE_ENABLED,
};
use crate::errors::ParamsError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Whether inbound API requests must carry a verified identity token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// Requests are not authenticated
    #[default]
    Noauth,
    /// Requests carry a token validated against the identity service
    Keystone,
}

impl AuthStrategy {
    /// Value written to `service:api/auth_strategy`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noauth => "noauth",
            Self::Keystone => "keystone",
        }
    }
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity token validation settings, named the way they appear in the config file.
///
/// Any field left unset falls back to its `keystone_authtoken` default. Use this
/// shape in preference to the legacy `keystone_*` fields of [`ApiParams`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuthtokenParams {
    /// Admin endpoint used to validate tokens (e.g. `https://keystone:35357`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,

    /// Public endpoint advertised to clients in `WWW-Authenticate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_uri: Option<String>,

    /// Project the service user authenticates into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Service user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Service user password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Domain of the service user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_domain_name: Option<String>,

    /// Domain of the service project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_domain_name: Option<String>,

    /// Authentication plugin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    /// Token cache endpoints as `host:port`, in the order they should be tried
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memcached_servers: Vec<String>,
}

/// Complete set of named inputs for the Designate API server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ApiParams {
    /// Ensure value for the API package (`present`, `latest`, `absent` or a version)
    #[serde(default = "default_package_ensure")]
    pub package_ensure: String,

    /// Package name override; the OS family default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_package_name: Option<String>,

    /// Start the service at boot, and keep it running when the state is managed
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Manage the running state of the service
    #[serde(default = "default_manage_service")]
    pub manage_service: bool,

    /// Authentication strategy for inbound requests
    #[serde(default)]
    pub auth_strategy: AuthStrategy,

    /// Serve version 1 of the REST API
    #[serde(default = "default_enable_api_v1")]
    pub enable_api_v1: bool,

    /// Serve version 2 of the REST API
    #[serde(default = "default_enable_api_v2")]
    pub enable_api_v2: bool,

    /// Serve the admin API
    #[serde(default = "default_enable_api_admin")]
    pub enable_api_admin: bool,

    /// Address the API server binds to
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Port the API server listens on
    #[serde(default = "default_api_port", deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub api_port: String,

    /// Base URI advertised in API links; the service default is kept when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_uri: Option<String>,

    /// Deprecated: use `keystone_authtoken.password`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_password: Option<String>,

    /// Deprecated: use `keystone_authtoken.auth_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_host: Option<String>,

    /// Deprecated: use `keystone_authtoken.auth_url`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_string_or_number"
    )]
    #[schemars(with = "Option<String>")]
    pub keystone_port: Option<String>,

    /// Deprecated: use `keystone_authtoken.auth_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_protocol: Option<String>,

    /// Deprecated: use `keystone_authtoken.project_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_tenant: Option<String>,

    /// Deprecated: use `keystone_authtoken.username`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_user: Option<String>,

    /// Token cache endpoints as `host:port`, in the order they should be tried
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keystone_memcached_servers: Vec<String>,

    /// Identity settings in their config-file shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_authtoken: Option<AuthtokenParams>,
}

impl Default for ApiParams {
    fn default() -> Self {
        Self {
            package_ensure: default_package_ensure(),
            api_package_name: None,
            enabled: default_enabled(),
            manage_service: default_manage_service(),
            auth_strategy: AuthStrategy::default(),
            enable_api_v1: default_enable_api_v1(),
            enable_api_v2: default_enable_api_v2(),
            enable_api_admin: default_enable_api_admin(),
            api_host: default_api_host(),
            api_port: default_api_port(),
            api_base_uri: None,
            keystone_password: None,
            keystone_host: None,
            keystone_port: None,
            keystone_protocol: None,
            keystone_tenant: None,
            keystone_user: None,
            keystone_memcached_servers: Vec::new(),
            keystone_authtoken: None,
        }
    }
}

impl ApiParams {
    /// Parse parameters from a YAML document.
    ///
    /// An empty document yields [`ApiParams::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Yaml`] if the document is malformed or names a field
    /// that does not exist.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParamsError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Parse parameters from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Json`] if the document is malformed or names a field
    /// that does not exist.
    pub fn from_json_str(contents: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load parameters from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::NotFound`] if the file is missing, [`ParamsError::Io`]
    /// if it cannot be read, and a parse error if its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ParamsError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), json = is_json, "Loading API parameters");

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Names of the legacy `keystone_*` identity fields that are set.
    ///
    /// `keystone_memcached_servers` is not listed: it has no legacy/modern split of
    /// its own and is honoured with either identity shape.
    #[must_use]
    pub fn legacy_identity_fields(&self) -> Vec<&'static str> {
        [
            ("keystone_password", self.keystone_password.is_some()),
            ("keystone_host", self.keystone_host.is_some()),
            ("keystone_port", self.keystone_port.is_some()),
            ("keystone_protocol", self.keystone_protocol.is_some()),
            ("keystone_tenant", self.keystone_tenant.is_some()),
            ("keystone_user", self.keystone_user.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// True if any legacy `keystone_*` identity field is set
    #[must_use]
    pub fn has_legacy_identity(&self) -> bool {
        !self.legacy_identity_fields().is_empty()
    }
}

// Default value functions

fn default_package_ensure() -> String {
    DEFAULT_PACKAGE_ENSURE.to_string()
}

fn default_enabled() -> bool {
    DEFAULT_SERVICE_ENABLED
}

fn default_manage_service() -> bool {
    DEFAULT_MANAGE_SERVICE
}

fn default_enable_api_v1() -> bool {
    DEFAULT_ENABLE_API_V1
}

fn default_enable_api_v2() -> bool {
    DEFAULT_ENABLE_API_V2
}

fn default_enable_api_admin() -> bool {
    DEFAULT_ENABLE_API_ADMIN
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_api_port() -> String {
    DEFAULT_API_PORT.to_string()
}

/// Port numbers are written as strings but commonly supplied as YAML integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}
