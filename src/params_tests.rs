// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `params`

#[cfg(test)]
mod tests {
    use crate::errors::ParamsError;
    use crate::params::{ApiParams, AuthStrategy};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_params() {
        let params = ApiParams::default();
        assert_eq!(params.package_ensure, "present");
        assert!(params.api_package_name.is_none());
        assert!(params.enabled);
        assert!(params.manage_service);
        assert_eq!(params.auth_strategy, AuthStrategy::Noauth);
        assert!(params.enable_api_v1);
        assert!(!params.enable_api_v2);
        assert!(!params.enable_api_admin);
        assert_eq!(params.api_host, "0.0.0.0");
        assert_eq!(params.api_port, "9001");
        assert!(params.api_base_uri.is_none());
        assert!(params.keystone_memcached_servers.is_empty());
        assert!(params.keystone_authtoken.is_none());
        assert!(!params.has_legacy_identity());
    }

    #[test]
    fn test_empty_yaml_matches_default() {
        assert_eq!(ApiParams::from_yaml_str("").unwrap(), ApiParams::default());
        assert_eq!(ApiParams::from_yaml_str("   \n").unwrap(), ApiParams::default());
        assert_eq!(ApiParams::from_yaml_str("{}").unwrap(), ApiParams::default());
    }

    #[test]
    fn test_parse_yaml_params() {
        let yaml = r#"
auth_strategy: keystone
keystone_password: passw0rd
keystone_host: 10.0.0.42
keystone_port: 35357
keystone_protocol: https
keystone_tenant: _services_
keystone_user: designate
keystone_memcached_servers:
  - 127.0.0.1:11211
  - 127.0.0.1:11212
enable_api_v2: true
api_port: 9002
"#;

        let params = ApiParams::from_yaml_str(yaml).unwrap();
        assert_eq!(params.auth_strategy, AuthStrategy::Keystone);
        assert_eq!(params.keystone_password.as_deref(), Some("passw0rd"));
        assert_eq!(params.keystone_host.as_deref(), Some("10.0.0.42"));
        // Integer ports are accepted and kept as strings
        assert_eq!(params.keystone_port.as_deref(), Some("35357"));
        assert_eq!(params.api_port, "9002");
        assert_eq!(params.keystone_memcached_servers.len(), 2);
        assert!(params.enable_api_v2);
        // Unspecified fields keep their defaults
        assert!(params.enable_api_v1);
        assert_eq!(params.api_host, "0.0.0.0");
    }

    #[test]
    fn test_parse_authtoken_record() {
        let yaml = r#"
auth_strategy: keystone
keystone_authtoken:
  auth_url: https://keystone.example.com:35357
  password: s3cret
  memcached_servers:
    - cache1:11211
"#;

        let params = ApiParams::from_yaml_str(yaml).unwrap();
        let authtoken = params.keystone_authtoken.unwrap();
        assert_eq!(
            authtoken.auth_url.as_deref(),
            Some("https://keystone.example.com:35357")
        );
        assert_eq!(authtoken.password.as_deref(), Some("s3cret"));
        assert!(authtoken.auth_uri.is_none());
        assert_eq!(authtoken.memcached_servers, vec!["cache1:11211"]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = ApiParams::from_yaml_str("keystone_hots: 10.0.0.42\n");
        assert!(matches!(result, Err(ParamsError::Yaml(_))));
    }

    #[test]
    fn test_unknown_auth_strategy_is_rejected() {
        let result = ApiParams::from_yaml_str("auth_strategy: kerberos\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_params() {
        let json = r#"{"auth_strategy": "keystone", "api_package_name": "designate-api-custom-name"}"#;
        let params = ApiParams::from_json_str(json).unwrap();
        assert_eq!(params.auth_strategy, AuthStrategy::Keystone);
        assert_eq!(
            params.api_package_name.as_deref(),
            Some("designate-api-custom-name")
        );
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("params.yaml");
        fs::write(&yaml_path, "api_host: 192.0.2.10\n").unwrap();
        let params = ApiParams::from_file(&yaml_path).unwrap();
        assert_eq!(params.api_host, "192.0.2.10");

        let json_path = dir.path().join("params.json");
        fs::write(&json_path, r#"{"api_host": "192.0.2.11"}"#).unwrap();
        let params = ApiParams::from_file(&json_path).unwrap();
        assert_eq!(params.api_host, "192.0.2.11");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let result = ApiParams::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ParamsError::NotFound { .. })));
    }

    #[test]
    fn test_legacy_identity_fields_in_declaration_order() {
        let params = ApiParams {
            keystone_user: Some("designate".into()),
            keystone_password: Some("passw0rd".into()),
            ..Default::default()
        };
        assert_eq!(
            params.legacy_identity_fields(),
            vec!["keystone_password", "keystone_user"]
        );
        assert!(params.has_legacy_identity());
    }

    #[test]
    fn test_memcached_servers_alone_is_not_legacy_identity() {
        let params = ApiParams {
            keystone_memcached_servers: vec!["127.0.0.1:11211".into()],
            ..Default::default()
        };
        assert!(!params.has_legacy_identity());
    }

    #[test]
    fn test_auth_strategy_display() {
        assert_eq!(AuthStrategy::Noauth.to_string(), "noauth");
        assert_eq!(AuthStrategy::Keystone.to_string(), "keystone");
    }

    #[test]
    fn test_serialize_round_trip_through_yaml() {
        let params = ApiParams {
            auth_strategy: AuthStrategy::Keystone,
            keystone_host: Some("10.0.0.42".into()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&params).unwrap();
        assert!(yaml.contains("auth_strategy: keystone"));
        // Unset optional fields are not serialized
        assert!(!yaml.contains("keystone_password"));
        assert_eq!(ApiParams::from_yaml_str(&yaml).unwrap(), params);
    }
}
