//! Core types for Vault connection settings.
//!
//! This crate contains:
//! - Canonical parameter keys and defaults
//! - Auth methods and the fields each one requires or forbids
//! - The connection settings model and its map conversions
//! - Field-level validation errors

pub mod auth;
pub mod error;
pub mod field;
pub mod settings;

use std::collections::BTreeMap;

pub use auth::{AuthMethod, AuthPolicy};
pub use error::FieldError;
pub use field::Field;
pub use settings::Settings;

/// Flat string-keyed parameter map, the only persisted form of a connection.
pub type Parameters = BTreeMap<String, String>;
