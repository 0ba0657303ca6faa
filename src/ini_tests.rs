// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `ini`

#[cfg(test)]
mod tests {
    use crate::config::{ConfigEntry, ConfigValue, ResolvedConfig};
    use crate::ini::{apply_to_file, render, IniDocument};
    use crate::params::{ApiParams, AuthStrategy};
    use crate::resolver::build_config;
    use std::fs;
    use tempfile::tempdir;

    fn small_config() -> ResolvedConfig {
        vec![
            ConfigEntry::new("service:api", "auth_strategy", "noauth"),
            ConfigEntry::new("service:api", "enable_api_v1", true),
            ConfigEntry::new("service:api", "api_base_uri", ConfigValue::ServiceDefault),
            ConfigEntry::new("keystone_authtoken", "username", "designate"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_render_layout() {
        let expected = "\
[service:api]
auth_strategy = noauth
enable_api_v1 = True
#api_base_uri = <SERVICE DEFAULT>

[keystone_authtoken]
username = designate
";
        assert_eq!(render(&small_config()), expected);
    }

    #[test]
    fn test_render_empty_config() {
        assert_eq!(render(&ResolvedConfig::default()), "");
    }

    #[test]
    fn test_render_never_writes_sentinel_as_value() {
        let params = ApiParams {
            auth_strategy: AuthStrategy::Keystone,
            ..Default::default()
        };
        let rendered = render(&build_config(&params));
        for line in rendered.lines() {
            if line.contains("<SERVICE DEFAULT>") {
                assert!(line.starts_with('#'), "sentinel written literally: {line}");
            }
        }
    }

    #[test]
    fn test_apply_to_empty_document() {
        let mut doc = IniDocument::parse("");
        let report = doc.apply(&small_config());

        assert_eq!(
            report.changed,
            vec![
                "service:api/auth_strategy",
                "service:api/enable_api_v1",
                "keystone_authtoken/username"
            ]
        );
        assert!(report.removed.is_empty());
        assert_eq!(
            doc.to_string(),
            "[service:api]\nauth_strategy = noauth\nenable_api_v1 = True\n\n[keystone_authtoken]\nusername = designate\n"
        );
    }

    #[test]
    fn test_apply_preserves_unrelated_content() {
        let existing = "\
# Managed by config management
[DEFAULT]
debug = False

[service:api]
; local tweak
api_host = 127.0.0.1
auth_strategy = keystone

[storage:sqlalchemy]
connection = mysql://designate@db/designate
";
        let mut doc = IniDocument::parse(existing);
        let report = doc.apply(&small_config());

        assert!(report.changed.contains(&"service:api/auth_strategy".to_string()));
        let out = doc.to_string();
        assert!(out.starts_with("# Managed by config management\n[DEFAULT]\ndebug = False\n"));
        assert!(out.contains("; local tweak\napi_host = 127.0.0.1\nauth_strategy = noauth\nenable_api_v1 = True\n"));
        assert!(out.contains("[storage:sqlalchemy]\nconnection = mysql://designate@db/designate\n"));
        assert!(out.ends_with("[keystone_authtoken]\nusername = designate\n"));
        assert_eq!(doc.get("service:api", "api_host").as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_apply_removes_service_default_keys() {
        let mut doc = IniDocument::parse("[service:api]\napi_base_uri = http://old/\n");
        let report = doc.apply(&small_config());

        assert_eq!(report.removed, vec!["service:api/api_base_uri"]);
        assert_eq!(doc.get("service:api", "api_base_uri"), None);
    }

    #[test]
    fn test_sentinel_from_params_is_commented_and_removed() {
        let params = ApiParams::from_yaml_str(
            r#"
auth_strategy: keystone
api_base_uri: '<SERVICE DEFAULT>'
keystone_password: '<SERVICE DEFAULT>'
"#,
        )
        .unwrap();
        let config = build_config(&params);

        let rendered = render(&config);
        assert!(rendered.contains("#api_base_uri = <SERVICE DEFAULT>\n"));
        assert!(rendered.contains("#password = <SERVICE DEFAULT>\n"));
        assert!(!rendered.contains("\napi_base_uri = "));
        assert!(!rendered.contains("\npassword = "));

        let mut doc = IniDocument::parse(
            "[service:api]\napi_base_uri = http://old/\n\n[keystone_authtoken]\npassword = old\n",
        );
        let report = doc.apply(&config);
        assert_eq!(
            report.removed,
            vec!["service:api/api_base_uri", "keystone_authtoken/password"]
        );
        assert!(!doc.to_string().contains("<SERVICE DEFAULT>"));
        assert_eq!(doc.get("service:api", "api_base_uri"), None);
        assert_eq!(doc.get("keystone_authtoken", "password"), None);
    }

    #[test]
    fn test_get_returns_last_duplicate() {
        let doc = IniDocument::parse("[service:api]\napi_host = a\napi_host = b\n");
        assert_eq!(doc.get("service:api", "api_host").as_deref(), Some("b"));
    }

    #[test]
    fn test_apply_removes_every_duplicate_of_service_default_key() {
        let mut doc = IniDocument::parse(
            "[service:api]\napi_base_uri = a\napi_base_uri = b\n\n[service:api]\napi_base_uri = c\n",
        );
        let report = doc.apply(&build_config(&ApiParams::default()));

        assert_eq!(report.removed, vec!["service:api/api_base_uri"]);
        assert_eq!(doc.get("service:api", "api_base_uri"), None);
        assert!(!doc.to_string().contains("api_base_uri"));
    }

    #[test]
    fn test_apply_collapses_duplicate_key_and_section() {
        let existing = "\
[service:api]
api_port = 9001
api_port = 1234

[DEFAULT]
debug = True

[service:api]
api_port = 4321
";
        let mut doc = IniDocument::parse(existing);
        let report = doc.apply(&build_config(&ApiParams::default()));

        assert!(report.changed.contains(&"service:api/api_port".to_string()));
        assert_eq!(doc.get("service:api", "api_port").as_deref(), Some("9001"));
        let out = doc.to_string();
        assert_eq!(out.matches("api_port = ").count(), 1);
        assert!(out.contains("[DEFAULT]\ndebug = True\n"));

        // Collapsed documents are stable
        let again = doc.apply(&build_config(&ApiParams::default()));
        assert!(!again.is_changed());
    }

    #[test]
    fn test_apply_twice_reports_no_changes() {
        let config = build_config(&ApiParams {
            auth_strategy: AuthStrategy::Keystone,
            keystone_password: Some("passw0rd".into()),
            ..Default::default()
        });

        let mut doc = IniDocument::parse("");
        assert!(doc.apply(&config).is_changed());
        let once = doc.to_string();

        let report = doc.apply(&config);
        assert!(!report.is_changed());
        assert_eq!(doc.to_string(), once);
    }

    #[test]
    fn test_apply_matches_key_within_section_only() {
        let mut doc = IniDocument::parse("[other]\nauth_strategy = keystone\n");
        doc.apply(&small_config());
        assert_eq!(doc.get("other", "auth_strategy").as_deref(), Some("keystone"));
        assert_eq!(doc.get("service:api", "auth_strategy").as_deref(), Some("noauth"));
    }

    #[test]
    fn test_apply_to_file_creates_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("designate.conf");

        let config = small_config();
        let first = apply_to_file(&path, &config).unwrap();
        assert!(first.is_changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&config).replace("#api_base_uri = <SERVICE DEFAULT>\n", ""));

        let second = apply_to_file(&path, &config).unwrap();
        assert!(!second.is_changed());
    }

    #[test]
    fn test_apply_to_file_updates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("designate.conf");
        fs::write(&path, "[service:api]\nauth_strategy = keystone\n").unwrap();

        let report = apply_to_file(&path, &small_config()).unwrap();
        assert!(report.changed.contains(&"service:api/auth_strategy".to_string()));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("auth_strategy = noauth"));
        assert!(!contents.contains("auth_strategy = keystone"));
    }
}
