//! Connection provider surface registered with the host platform.

use vaultconn_core::field::{CONNECTION_TYPE, DISPLAY_NAME};
use vaultconn_core::{Parameters, Settings};

use crate::processor::{ConnectionValidator, ParametersProcessor};

/// Describes Vault connections to the host: identity, defaults, summary text
/// and the processor that checks edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaultConnectionProvider;

impl VaultConnectionProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn connection_type(&self) -> &'static str {
        CONNECTION_TYPE
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    /// One-line summary of a saved connection.
    pub fn describe(&self, parameters: &Parameters) -> String {
        Settings::from_map(parameters).describe()
    }

    pub fn default_parameters(&self) -> Parameters {
        Settings::default_parameters()
    }

    pub fn parameters_processor(&self) -> Box<dyn ParametersProcessor> {
        Box::new(ConnectionValidator)
    }
}
