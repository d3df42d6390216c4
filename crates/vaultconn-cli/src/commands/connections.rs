//! Connection file commands.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use vaultconn_config::{
    ConnectionDefinition, VaultConnectionProvider, find_connection, load_connections,
};
use vaultconn_core::{FieldError, Parameters};

use super::{display_value, print_parameters};

#[derive(Debug, Serialize)]
struct ValidationReport {
    name: String,
    valid: bool,
    errors: Vec<FieldError>,
    parameters: Parameters,
}

/// Validate every selected connection. Returns whether all of them are valid.
pub fn validate(path: &str, connection: Option<&str>, json: bool) -> Result<bool> {
    let connections = select(load_connections(path)?, connection)?;
    let processor = VaultConnectionProvider::new().parameters_processor();

    let reports: Vec<ValidationReport> = connections
        .into_iter()
        .map(|definition| {
            let mut parameters = definition.parameters;
            let errors = processor.process(&mut parameters);
            info!(connection = %definition.name, errors = errors.len(), "Validated connection");
            ValidationReport {
                name: definition.name,
                valid: errors.is_empty(),
                errors,
                parameters: masked(parameters),
            }
        })
        .collect();

    let valid = reports.iter().all(|r| r.valid);
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if report.valid {
                println!("{}: valid", report.name);
            } else {
                println!("{}: {} error(s)", report.name, report.errors.len());
                for error in &report.errors {
                    println!("  - {}", error);
                }
            }
            print_parameters(&report.parameters);
        }
    }

    Ok(valid)
}

pub fn describe(path: &str, connection: Option<&str>) -> Result<()> {
    let provider = VaultConnectionProvider::new();
    for definition in select(load_connections(path)?, connection)? {
        println!(
            "{}: {}",
            definition.name,
            provider.describe(&definition.parameters)
        );
    }
    Ok(())
}

fn select(
    connections: Vec<ConnectionDefinition>,
    name: Option<&str>,
) -> Result<Vec<ConnectionDefinition>> {
    match name {
        Some(name) => Ok(vec![find_connection(&connections, name)?.clone()]),
        None => Ok(connections),
    }
}

fn masked(parameters: Parameters) -> Parameters {
    parameters
        .into_iter()
        .map(|(key, value)| {
            let shown = display_value(&key, &value).to_string();
            (key, shown)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultconn_config::parse_connections;

    #[test]
    fn test_select_by_name() {
        let kdl = r#"
            connection "a" {
                url "http://a"
            }
            connection "b" {
                url "http://b"
            }
        "#;
        let connections = parse_connections(kdl).unwrap();

        let selected = select(connections.clone(), Some("b")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "b");

        assert_eq!(select(connections.clone(), None).unwrap().len(), 2);
        assert!(select(connections, Some("c")).is_err());
    }

    #[test]
    fn test_masked_hides_secret_values() {
        let mut parameters = Parameters::new();
        parameters.insert("secretId".to_string(), "s3cr3t".to_string());
        parameters.insert("roleId".to_string(), "role".to_string());

        let shown = masked(parameters);
        assert_eq!(shown["secretId"], "********");
        assert_eq!(shown["roleId"], "role");
    }
}
