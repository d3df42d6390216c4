//! Canonical parameter keys and defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection type identifier registered with the host platform.
pub const CONNECTION_TYPE: &str = "vault-connection";
/// Human-readable name of the secrets backend.
pub const DISPLAY_NAME: &str = "HashiCorp Vault";

pub const DEFAULT_URL: &str = "http://localhost:8200";
pub const DEFAULT_ENDPOINT_PATH: &str = "approle";
/// Empty namespace selects the default tenant.
pub const DEFAULT_NAMESPACE: &str = "";
pub const AGENT_SUPPORT_REQUIREMENT_VALUE: &str = "%vault.agent.supported%";

/// Allowed shape of a non-default namespace.
pub const NAMESPACE_PATTERN: &str = "[a-zA-Z0-9_-]+";

/// Every key the connection model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Url,
    Endpoint,
    RoleId,
    SecretId,
    Namespace,
    AuthMethod,
    Username,
    Password,
    AgentSupportRequirement,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Url,
        Field::Endpoint,
        Field::RoleId,
        Field::SecretId,
        Field::Namespace,
        Field::AuthMethod,
        Field::Username,
        Field::Password,
        Field::AgentSupportRequirement,
    ];

    /// The map key for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Endpoint => "endpoint",
            Field::RoleId => "roleId",
            Field::SecretId => "secretId",
            Field::Namespace => "namespace",
            Field::AuthMethod => "authMethod",
            Field::Username => "username",
            Field::Password => "password",
            Field::AgentSupportRequirement => "agentSupportRequirement",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether values of this field must be masked when shown.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::SecretId | Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
