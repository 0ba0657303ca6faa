// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

use designate_manifest::config::ConfigValue;
use designate_manifest::params::ApiParams;

/// Expected default names for one supported OS family
pub struct PlatformParams {
    pub os_family: &'static str,
    pub api_package_name: &'static str,
    pub api_service_name: &'static str,
}

/// Every supported OS family with the names its hosts should end up with
pub fn supported_platforms() -> Vec<PlatformParams> {
    vec![
        PlatformParams {
            os_family: "Debian",
            api_package_name: "designate-api",
            api_service_name: "designate-api",
        },
        PlatformParams {
            os_family: "RedHat",
            api_package_name: "openstack-designate-api",
            api_service_name: "designate-api",
        },
    ]
}

/// Legacy identity parameters used throughout the suite
pub fn legacy_keystone_params() -> ApiParams {
    ApiParams {
        keystone_password: Some("passw0rd".to_string()),
        keystone_host: Some("10.0.0.42".to_string()),
        keystone_port: Some("35357".to_string()),
        keystone_protocol: Some("https".to_string()),
        keystone_tenant: Some("_services_".to_string()),
        keystone_user: Some("designate".to_string()),
        ..Default::default()
    }
}

pub fn string(value: &str) -> ConfigValue {
    ConfigValue::String(value.to_string())
}
