// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `os_family`

#[cfg(test)]
mod tests {
    use crate::errors::ResolveError;
    use crate::os_family::{lookup_profile, supported_os_families, OS_FAMILY_PROFILES};

    #[test]
    fn test_debian_profile() {
        let profile = lookup_profile("Debian").unwrap();
        assert_eq!(profile.package_name_default, "designate-api");
        assert_eq!(profile.service_name_default, "designate-api");
    }

    #[test]
    fn test_redhat_profile_uses_vendor_prefixed_package() {
        let profile = lookup_profile("RedHat").unwrap();
        assert_eq!(profile.package_name_default, "openstack-designate-api");
        assert_eq!(profile.service_name_default, "designate-api");
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(lookup_profile("debian").unwrap().os_family, "Debian");
        assert_eq!(lookup_profile(" REDHAT ").unwrap().os_family, "RedHat");
    }

    #[test]
    fn test_unknown_family_is_unsupported() {
        let err = lookup_profile("Solaris").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedOsFamily {
                os_family: "Solaris".to_string(),
                supported: "Debian, RedHat".to_string(),
            }
        );
        assert!(err.to_string().contains("Solaris"));
    }

    #[test]
    fn test_empty_family_is_unsupported() {
        assert!(lookup_profile("").is_err());
    }

    #[test]
    fn test_supported_families_follow_table_order() {
        assert_eq!(supported_os_families(), vec!["Debian", "RedHat"]);
        assert_eq!(OS_FAMILY_PROFILES.len(), 2);
    }
}
