//! CLI command implementations.

pub mod connections;

use anyhow::Result;
use vaultconn_config::VaultConnectionProvider;
use vaultconn_core::{Field, Parameters};

pub fn defaults(json: bool) -> Result<()> {
    let parameters = VaultConnectionProvider::new().default_parameters();
    if json {
        println!("{}", serde_json::to_string_pretty(&parameters)?);
    } else {
        print_parameters(&parameters);
    }
    Ok(())
}

/// Print parameters one per line, masking secret values.
pub(crate) fn print_parameters(parameters: &Parameters) {
    for (key, value) in parameters {
        println!("  {} = {}", key, display_value(key, value));
    }
}

pub(crate) fn display_value<'a>(key: &str, value: &'a str) -> &'a str {
    let secret = Field::from_key(key).is_some_and(Field::is_secret);
    if secret && !value.is_empty() {
        "********"
    } else {
        value
    }
}
