//! Connection settings model.
//!
//! `Settings` is a transient, typed view of a parameter map. It is decoded
//! from the map, used for one validation or display pass, and written back
//! into the caller's map. The map stays the only persisted form.

use std::fmt;

use crate::field::{
    AGENT_SUPPORT_REQUIREMENT_VALUE, DEFAULT_ENDPOINT_PATH, DEFAULT_NAMESPACE, DEFAULT_URL,
    DISPLAY_NAME,
};
use crate::{AuthMethod, Field, Parameters};

/// Strip every leading `/` from an endpoint path.
pub fn normalize_endpoint(endpoint: &str) -> &str {
    endpoint.trim_start_matches('/')
}

/// Settings of one connection to the secrets backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    /// Raw endpoint path, possibly slash-prefixed by older versions.
    pub endpoint: String,
    pub role_id: String,
    pub secret_id: String,
    pub namespace: String,
    pub auth_method: AuthMethod,
    pub username: String,
    pub password: String,
}

impl Settings {
    pub fn new(
        url: impl Into<String>,
        endpoint: impl Into<String>,
        role_id: impl Into<String>,
        secret_id: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            endpoint: endpoint.into(),
            role_id: role_id.into(),
            secret_id: secret_id.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            auth_method: AuthMethod::Default,
            username: String::new(),
            password: String::new(),
        }
    }

    /// AppRole-shaped settings using the default endpoint path.
    pub fn with_default_endpoint(
        url: impl Into<String>,
        role_id: impl Into<String>,
        secret_id: impl Into<String>,
    ) -> Self {
        Self::new(url, DEFAULT_ENDPOINT_PATH, role_id, secret_id)
    }

    /// Decode settings from a parameter map.
    ///
    /// Older connections lack most keys, so every field has a default:
    /// - `url`, `roleId`, `secretId`, `username`, `password`: empty
    /// - `endpoint`: [`DEFAULT_ENDPOINT_PATH`]
    /// - `namespace`: [`DEFAULT_NAMESPACE`] (the default tenant)
    /// - `authMethod`: [`AuthMethod::Default`], also for unrecognized tags
    pub fn from_map(parameters: &Parameters) -> Self {
        let get = |field: Field| parameters.get(field.key()).map(String::as_str);
        let text = |field: Field| get(field).unwrap_or_default().to_string();

        Self {
            url: text(Field::Url),
            endpoint: get(Field::Endpoint)
                .unwrap_or(DEFAULT_ENDPOINT_PATH)
                .to_string(),
            role_id: text(Field::RoleId),
            secret_id: text(Field::SecretId),
            namespace: get(Field::Namespace)
                .unwrap_or(DEFAULT_NAMESPACE)
                .to_string(),
            auth_method: AuthMethod::from_tag(get(Field::AuthMethod)),
            username: text(Field::Username),
            password: text(Field::Password),
        }
    }

    /// Write the canonical form into `parameters`.
    ///
    /// `url` and `namespace` are always written, plus the credential fields of
    /// the active auth method. Other keys in the map are left alone.
    pub fn to_map(&self, parameters: &mut Parameters) {
        parameters.insert(Field::Url.key().to_string(), self.url.clone());
        parameters.insert(Field::Namespace.key().to_string(), self.namespace.clone());

        for &field in self.auth_method.credential_fields() {
            parameters.insert(field.key().to_string(), self.value(field).to_string());
        }
    }

    /// The endpoint without leading slashes. Idempotent.
    pub fn normalized_endpoint(&self) -> &str {
        normalize_endpoint(&self.endpoint)
    }

    /// Canonical value of a field as it is written to the map.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Endpoint => self.normalized_endpoint(),
            Field::RoleId => &self.role_id,
            Field::SecretId => &self.secret_id,
            Field::Namespace => &self.namespace,
            Field::AuthMethod => self.auth_method.tag().unwrap_or_default(),
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::AgentSupportRequirement => "",
        }
    }

    pub fn is_default_namespace(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }

    /// One-line summary shown for the connection.
    pub fn describe(&self) -> String {
        let mut description = format!("Connection to {} server at {}", DISPLAY_NAME, self.url);
        if !self.is_default_namespace() {
            description.push_str(&format!(", namespace '{}'", self.namespace));
        }
        description
    }

    /// Parameters for a newly created connection.
    pub fn default_parameters() -> Parameters {
        [
            (
                Field::AgentSupportRequirement,
                AGENT_SUPPORT_REQUIREMENT_VALUE,
            ),
            (Field::Endpoint, DEFAULT_ENDPOINT_PATH),
            (Field::Url, DEFAULT_URL),
        ]
        .into_iter()
        .map(|(field, value)| (field.key().to_string(), value.to_string()))
        .collect()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("endpoint", &self.endpoint)
            .field("role_id", &self.role_id)
            .field("secret_id", &"***")
            .field("namespace", &self.namespace)
            .field("auth_method", &self.auth_method)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
