//! Conversions from external infrastructure errors into domain errors.

use novaearn_domain::NovaEarnError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub NovaEarnError);

impl From<InfraError> for NovaEarnError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<NovaEarnError> for InfraError {
    fn from(value: NovaEarnError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoNovaEarnError {
    fn into_novaearn(self) -> NovaEarnError;
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → NovaEarnError */
/* -------------------------------------------------------------------------- */

impl IntoNovaEarnError for serde_json::Error {
    fn into_novaearn(self) -> NovaEarnError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => NovaEarnError::Io(format!("failed to read JSON: {self}")),
            Category::Syntax | Category::Eof => {
                NovaEarnError::Fixture(format!("malformed JSON: {self}"))
            }
            Category::Data => NovaEarnError::Fixture(format!("unexpected JSON shape: {self}")),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_novaearn())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → NovaEarnError */
/* -------------------------------------------------------------------------- */

impl IntoNovaEarnError for toml::de::Error {
    fn into_novaearn(self) -> NovaEarnError {
        NovaEarnError::Config(format!("invalid TOML: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_novaearn())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → NovaEarnError */
/* -------------------------------------------------------------------------- */

impl IntoNovaEarnError for std::io::Error {
    fn into_novaearn(self) -> NovaEarnError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => NovaEarnError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => NovaEarnError::Io(format!("permission denied: {self}")),
            _ => NovaEarnError::Io(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_novaearn())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
