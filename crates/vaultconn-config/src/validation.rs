//! Validation and normalization of connection parameters.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use vaultconn_core::field::{DEFAULT_NAMESPACE, NAMESPACE_PATTERN};
use vaultconn_core::settings::normalize_endpoint;
use vaultconn_core::{AuthMethod, Field, FieldError, Parameters, Settings};

static NAMESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{})$", NAMESPACE_PATTERN)).unwrap());

/// Empty means the default tenant; anything else must match [`NAMESPACE_PATTERN`].
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace == DEFAULT_NAMESPACE || NAMESPACE_REGEX.is_match(namespace)
}

/// A required value is blank when absent or whitespace only.
/// Endpoints are judged after leading slashes are stripped.
fn is_blank(field: Field, value: Option<&str>) -> bool {
    match (field, value) {
        (_, None) => true,
        (Field::Endpoint, Some(v)) => normalize_endpoint(v).trim().is_empty(),
        (_, Some(v)) => v.trim().is_empty(),
    }
}

/// Validate `parameters` and rewrite them into canonical form.
///
/// Every violated rule yields its own error. The map is normalized in place
/// whether or not errors were found:
/// - keys the auth method forbids are removed
/// - the endpoint loses any leading slashes
/// - `url`, `namespace` and the method's credential keys are always present
pub fn validate(parameters: &mut Parameters) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if is_blank(Field::Url, get(parameters, Field::Url)) {
        errors.push(FieldError::empty(Field::Url));
    }

    let namespace = get(parameters, Field::Namespace).unwrap_or(DEFAULT_NAMESPACE);
    if !is_valid_namespace(namespace) {
        errors.push(FieldError::new(
            Field::Namespace,
            format!(
                "Non-default namespace should match regex '{}'",
                NAMESPACE_PATTERN
            ),
        ));
    }

    let tag = get(parameters, Field::AuthMethod);
    let method = AuthMethod::from_tag(tag);
    if let Some(tag) = tag.filter(|t| !t.is_empty() && !AuthMethod::is_known_tag(t)) {
        warn!(auth_method = %tag, "Unrecognized auth method, applying legacy rules");
    }

    let policy = method.policy();
    for &field in policy.forbidden {
        if parameters.remove(field.key()).is_some() {
            debug!(field = %field, auth_method = %method, "Removed field not used by auth method");
        }
    }
    for &field in policy.required {
        if is_blank(field, get(parameters, field)) {
            errors.push(FieldError::empty(field));
        }
    }

    if let Some(endpoint) = get(parameters, Field::Endpoint) {
        if endpoint.starts_with('/') {
            debug!(endpoint = %endpoint, "Migrating slash-prefixed endpoint");
        }
    }

    Settings::from_map(parameters).to_map(parameters);

    debug!(auth_method = %method, errors = errors.len(), "Validated connection parameters");
    errors
}

fn get(parameters: &Parameters, field: Field) -> Option<&str> {
    parameters.get(field.key()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn fields(errors: &[FieldError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_approle_missing_role_id() {
        let mut map = params(&[
            ("url", "http://v:8200"),
            ("authMethod", "approle"),
            ("endpoint", "approle"),
            ("roleId", " "),
            ("secretId", "s"),
            ("username", "bob"),
            ("password", "pw"),
        ]);

        let errors = validate(&mut map);
        assert_eq!(fields(&errors), vec![Field::RoleId]);
        assert_eq!(errors[0].message, "Should not be empty");
        assert!(!map.contains_key("username"));
        assert!(!map.contains_key("password"));
    }

    #[test]
    fn test_approle_reports_every_missing_field() {
        let mut map = params(&[("authMethod", "approle")]);

        let errors = validate(&mut map);
        assert_eq!(
            fields(&errors),
            vec![Field::Url, Field::Endpoint, Field::RoleId, Field::SecretId]
        );
    }

    #[test]
    fn test_approle_all_slash_endpoint_is_blank() {
        let mut map = params(&[
            ("url", "http://v:8200"),
            ("authMethod", "approle"),
            ("endpoint", "///"),
            ("roleId", "r"),
            ("secretId", "s"),
        ]);

        let errors = validate(&mut map);
        assert_eq!(fields(&errors), vec![Field::Endpoint]);
        assert_eq!(map["endpoint"], "");
    }

    #[test]
    fn test_ldap_missing_password() {
        let mut map = params(&[
            ("url", "http://v:8200"),
            ("authMethod", "ldap"),
            ("username", "bob"),
            ("password", ""),
            ("endpoint", "/approle"),
            ("roleId", "r"),
            ("secretId", "s"),
        ]);

        let errors = validate(&mut map);
        assert_eq!(fields(&errors), vec![Field::Password]);
        for key in ["endpoint", "roleId", "secretId"] {
            assert!(!map.contains_key(key), "{} should be removed", key);
        }
        assert_eq!(map["username"], "bob");
    }

    #[test]
    fn test_iam_needs_only_url() {
        let mut map = params(&[("url", "http://v:8200"), ("authMethod", "iam")]);

        let errors = validate(&mut map);
        assert!(errors.is_empty());
        for key in ["endpoint", "roleId", "secretId", "username", "password"] {
            assert!(!map.contains_key(key), "{} should be absent", key);
        }
        assert_eq!(
            map,
            params(&[
                ("url", "http://v:8200"),
                ("authMethod", "iam"),
                ("namespace", ""),
            ])
        );
    }

    #[test]
    fn test_iam_clears_stale_credentials() {
        let mut map = params(&[
            ("url", "http://v:8200"),
            ("authMethod", "iam"),
            ("roleId", "r"),
            ("password", "pw"),
        ]);

        assert!(validate(&mut map).is_empty());
        assert!(!map.contains_key("roleId"));
        assert!(!map.contains_key("password"));
    }

    #[test]
    fn test_namespace_regex() {
        let mut ok = params(&[("url", "http://v"), ("namespace", "team-1_A")]);
        assert!(validate(&mut ok).is_empty());

        let mut bad = params(&[("url", "http://v"), ("namespace", "bad ns")]);
        let errors = validate(&mut bad);
        assert_eq!(fields(&errors), vec![Field::Namespace]);
        assert!(errors[0].message.contains("[a-zA-Z0-9_-]+"));
    }

    #[test]
    fn test_namespace_must_match_fully() {
        assert!(is_valid_namespace(""));
        assert!(is_valid_namespace("abc"));
        assert!(!is_valid_namespace("abc/def"));
        assert!(!is_valid_namespace("ns!"));
        assert!(!is_valid_namespace(" ns"));
    }

    #[test]
    fn test_url_required_for_every_method() {
        for tag in [None, Some("approle"), Some("iam"), Some("ldap"), Some("other")] {
            let mut map = params(&[
                ("url", "  "),
                ("endpoint", "approle"),
                ("roleId", "r"),
                ("secretId", "s"),
                ("username", "u"),
                ("password", "p"),
            ]);
            if let Some(tag) = tag {
                map.insert("authMethod".to_string(), tag.to_string());
            }

            let errors = validate(&mut map);
            assert_eq!(fields(&errors), vec![Field::Url], "auth method {:?}", tag);
        }
    }

    #[test]
    fn test_errors_accumulate() {
        let mut map = params(&[("namespace", "a b"), ("authMethod", "ldap")]);

        let errors = validate(&mut map);
        assert_eq!(
            fields(&errors),
            vec![
                Field::Url,
                Field::Namespace,
                Field::Username,
                Field::Password
            ]
        );
    }

    #[test]
    fn test_legacy_connection_migrated() {
        let mut map = params(&[
            ("url", "http://v:8200"),
            ("endpoint", "//approle"),
            ("roleId", "r"),
            ("secretId", "s"),
        ]);

        assert!(validate(&mut map).is_empty());
        assert_eq!(
            map,
            params(&[
                ("url", "http://v:8200"),
                ("endpoint", "approle"),
                ("roleId", "r"),
                ("secretId", "s"),
                ("namespace", ""),
            ])
        );
    }

    #[test]
    fn test_legacy_connection_is_permissive() {
        let mut map = params(&[("url", "http://v:8200")]);

        assert!(validate(&mut map).is_empty());
        assert_eq!(map["endpoint"], "approle");
        assert_eq!(map["roleId"], "");
        assert_eq!(map["secretId"], "");
    }

    #[test]
    fn test_unrecognized_method_keeps_tag() {
        let mut map = params(&[("url", "http://v"), ("authMethod", "kerberos")]);

        assert!(validate(&mut map).is_empty());
        assert_eq!(map["authMethod"], "kerberos");
        assert!(map.contains_key("endpoint"));
    }

    #[test]
    fn test_unrelated_keys_survive() {
        let mut map = params(&[
            ("url", "http://v"),
            ("authMethod", "iam"),
            ("agentSupportRequirement", "%vault.agent.supported%"),
        ]);

        validate(&mut map);
        assert_eq!(map["agentSupportRequirement"], "%vault.agent.supported%");
    }
}
