//! Connection definitions stored in KDL files.
//!
//! ```kdl
//! connection "prod" {
//!     url "https://vault.example.com:8200"
//!     authMethod "approle"
//!     roleId "build-agents"
//!     secretId "..."
//! }
//! ```
//!
//! Each child node of a `connection` becomes one parameter entry.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use std::path::Path;
use tracing::debug;
use vaultconn_core::Parameters;

/// A named set of connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDefinition {
    pub name: String,
    pub parameters: Parameters,
}

/// Parse connection definitions from KDL text.
pub fn parse_connections(kdl: &str) -> ConfigResult<Vec<ConnectionDefinition>> {
    let doc: KdlDocument = kdl.parse()?;

    let mut connections: Vec<ConnectionDefinition> = Vec::new();
    for node in doc.nodes() {
        if node.name().value() != "connection" {
            continue;
        }

        let connection = parse_connection(node)?;
        if connections.iter().any(|c| c.name == connection.name) {
            return Err(ConfigError::Duplicate(format!(
                "connection '{}'",
                connection.name
            )));
        }
        connections.push(connection);
    }

    debug!(count = connections.len(), "Parsed connection definitions");
    Ok(connections)
}

/// Read and parse a connection file.
pub fn load_connections(path: impl AsRef<Path>) -> ConfigResult<Vec<ConnectionDefinition>> {
    let content = std::fs::read_to_string(path)?;
    parse_connections(&content)
}

/// Find a connection by name.
pub fn find_connection<'a>(
    connections: &'a [ConnectionDefinition],
    name: &str,
) -> ConfigResult<&'a ConnectionDefinition> {
    connections
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ConfigError::UnknownConnection(name.to_string()))
}

fn parse_connection(node: &KdlNode) -> ConfigResult<ConnectionDefinition> {
    let name = get_first_string_arg(node)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ConfigError::MissingField("connection name".to_string()))?;

    let mut parameters = Parameters::new();
    if let Some(children) = node.children() {
        for child in children.nodes() {
            let key = child.name().value().to_string();
            let value = parse_value(&name, child)?;
            if parameters.insert(key.clone(), value).is_some() {
                return Err(ConfigError::Duplicate(format!(
                    "'{}' in connection '{}'",
                    key, name
                )));
            }
        }
    }

    Ok(ConnectionDefinition { name, parameters })
}

fn parse_value(connection: &str, node: &KdlNode) -> ConfigResult<String> {
    let key = node.name().value();
    let entry = node
        .entries()
        .iter()
        .find(|e| e.name().is_none())
        .ok_or_else(|| {
            ConfigError::MissingField(format!("value of '{}' in connection '{}'", key, connection))
        })?;

    entry
        .value()
        .as_string()
        .map(|s| s.to_string())
        .ok_or_else(|| ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("expected a string in connection '{}'", connection),
        })
}

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}
