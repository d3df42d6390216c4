//! Authentication methods and their field policies.

use derive_more::Display;

use crate::Field;

/// Authentication strategy selected by the `authMethod` parameter.
///
/// `Default` covers connections saved before the parameter existed as well as
/// tags this version does not recognize. It applies no field constraints and
/// only exists to keep those connections loadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum AuthMethod {
    #[default]
    #[display("legacy default")]
    Default,
    #[display("AppRole")]
    AppRole,
    #[display("IAM")]
    Iam,
    #[display("LDAP")]
    Ldap,
}

/// Fields a method needs filled in and fields it must not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPolicy {
    pub required: &'static [Field],
    pub forbidden: &'static [Field],
}

const APPROLE_FIELDS: &[Field] = &[Field::Endpoint, Field::RoleId, Field::SecretId];
const LDAP_FIELDS: &[Field] = &[Field::Username, Field::Password];
const ALL_CREDENTIAL_FIELDS: &[Field] = &[
    Field::Endpoint,
    Field::RoleId,
    Field::SecretId,
    Field::Username,
    Field::Password,
];

impl AuthMethod {
    pub const TAG_APPROLE: &'static str = "approle";
    pub const TAG_IAM: &'static str = "iam";
    pub const TAG_LDAP: &'static str = "ldap";

    /// Decode the `authMethod` value. Absent or unrecognized tags map to `Default`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(Self::TAG_APPROLE) => AuthMethod::AppRole,
            Some(Self::TAG_IAM) => AuthMethod::Iam,
            Some(Self::TAG_LDAP) => AuthMethod::Ldap,
            _ => AuthMethod::Default,
        }
    }

    /// Whether `tag` names one of the known methods.
    pub fn is_known_tag(tag: &str) -> bool {
        Self::from_tag(Some(tag)) != AuthMethod::Default
    }

    pub fn tag(self) -> Option<&'static str> {
        match self {
            AuthMethod::Default => None,
            AuthMethod::AppRole => Some(Self::TAG_APPROLE),
            AuthMethod::Iam => Some(Self::TAG_IAM),
            AuthMethod::Ldap => Some(Self::TAG_LDAP),
        }
    }

    pub fn policy(self) -> AuthPolicy {
        match self {
            AuthMethod::AppRole => AuthPolicy {
                required: APPROLE_FIELDS,
                forbidden: LDAP_FIELDS,
            },
            AuthMethod::Ldap => AuthPolicy {
                required: LDAP_FIELDS,
                forbidden: APPROLE_FIELDS,
            },
            AuthMethod::Iam => AuthPolicy {
                required: &[],
                forbidden: ALL_CREDENTIAL_FIELDS,
            },
            AuthMethod::Default => AuthPolicy {
                required: &[],
                forbidden: &[],
            },
        }
    }

    /// Credential fields written back when settings are serialized.
    ///
    /// Legacy connections predate the other methods and are AppRole-shaped.
    pub fn credential_fields(self) -> &'static [Field] {
        match self {
            AuthMethod::AppRole | AuthMethod::Default => APPROLE_FIELDS,
            AuthMethod::Ldap => LDAP_FIELDS,
            AuthMethod::Iam => &[],
        }
    }
}
