//! Validation and loading of Vault connection parameters.
//!
//! This crate handles:
//! - Validating and normalizing a connection's parameter map
//! - The connection provider surface consumed by the host platform
//! - Parsing connection definitions from KDL files

pub mod error;
pub mod file;
pub mod processor;
pub mod provider;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use file::{ConnectionDefinition, find_connection, load_connections, parse_connections};
pub use processor::{ConnectionValidator, ParametersProcessor};
pub use provider::VaultConnectionProvider;
pub use validation::validate;
