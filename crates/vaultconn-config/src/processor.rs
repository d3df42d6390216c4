//! Processor seam consumed by the host platform's connection editor.

use vaultconn_core::{FieldError, Parameters};

use crate::validation::validate;

/// Checks and normalizes a connection's parameters before the host saves them.
///
/// The map is both input and output. Returned errors are reported to the user
/// and the host refuses to persist the map while any are present.
pub trait ParametersProcessor: Send + Sync {
    fn process(&self, parameters: &mut Parameters) -> Vec<FieldError>;
}

/// Stateless processor for Vault connections. Safe to run repeatedly on its
/// own output and from several threads, given one map per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionValidator;

impl ParametersProcessor for ConnectionValidator {
    fn process(&self, parameters: &mut Parameters) -> Vec<FieldError> {
        validate(parameters)
    }
}
