// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # designate-manifest - Host configuration for the Designate API server
//!
//! Computes how a host must be converged to run the Designate (DNS-as-a-service)
//! API server: which package to install, which service to keep running, and which
//! directives to write into `designate.conf`.
//!
//! ## Overview
//!
//! Resolution is a single pure mapping from [`params::ApiParams`] plus an OS family
//! tag to a [`resolver::ApiManifest`]. Nothing is installed or started here; the
//! manifest is handed to the host's package manager, service manager and config
//! writer.
//!
//! ## Modules
//!
//! - [`params`] - Input parameters and their defaults
//! - [`os_family`] - Per-platform package and service naming
//! - [`identity`] - Normalization of legacy and modern identity parameters
//! - [`resources`] - Package and service descriptor builders
//! - [`config`] - Ordered `designate.conf` assignments
//! - [`resolver`] - The parameter resolver
//! - [`ini`] - INI rendering and in-place file application
//!
//! ## Example
//!
//! ```rust
//! use designate_manifest::config::ConfigValue;
//! use designate_manifest::params::{ApiParams, AuthStrategy};
//! use designate_manifest::resolver::resolve;
//!
//! let params = ApiParams {
//!     auth_strategy: AuthStrategy::Keystone,
//!     keystone_host: Some("10.0.0.42".to_string()),
//!     keystone_protocol: Some("https".to_string()),
//!     ..Default::default()
//! };
//!
//! let manifest = resolve(&params, "Debian").unwrap();
//! assert_eq!(
//!     manifest.config.get("keystone_authtoken", "auth_url"),
//!     Some(&ConfigValue::from("https://10.0.0.42:35357"))
//! );
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod ini;
pub mod os_family;
pub mod params;
pub mod resolver;
pub mod resources;
pub mod tags;

pub use errors::{IniError, ParamsError, ResolveError};
pub use params::{ApiParams, AuthStrategy};
pub use resolver::{resolve, ApiManifest};

#[cfg(test)]
mod ini_tests;
#[cfg(test)]
mod os_family_tests;
#[cfg(test)]
mod params_tests;
