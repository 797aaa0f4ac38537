//! Conversion and registry errors

use thiserror::Error;
use unitconv_core::{codes, ErrorReport};
use crate::Family;

/// Errors that can occur while converting a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No magnitude could be extracted, or there is no unit text
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// A token matches no alias in the registry
    #[error("unit not recognized: {0}")]
    UnitNotRecognized(String),

    /// Source and explicit target measure different things
    #[error("cannot convert {from} to {to}: incompatible units")]
    IncompatibleUnits { from: Family, to: Family },
}

impl ConvertError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::MalformedQuery(_) => codes::MALFORMED_QUERY,
            ConvertError::UnitNotRecognized(_) => codes::UNIT_NOT_RECOGNIZED,
            ConvertError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
        }
    }

    /// Structured report for callers that serialize errors
    pub fn report(&self) -> ErrorReport {
        match self {
            ConvertError::MalformedQuery(details) => ErrorReport::malformed_query(details.as_str()),
            ConvertError::UnitNotRecognized(token) => ErrorReport::unit_not_recognized(token),
            ConvertError::IncompatibleUnits { from, to } => {
                ErrorReport::incompatible_units(from.name(), to.name())
            }
        }
    }
}

/// Inconsistencies found while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("alias '{alias}' names both {first} and {second}")]
    AliasCollision { alias: String, first: String, second: String },

    #[error("unit key '{0}' is registered twice")]
    DuplicateKey(String),

    #[error("unit {unit} defaults to unknown unit '{target}'")]
    UnknownDefaultTarget { unit: String, target: String },

    #[error("unit {unit} defaults to {target}, which is not a {family} unit")]
    CrossFamilyDefault { unit: String, target: String, family: Family },

    #[error("unit {0} has a zero conversion scale")]
    ZeroScale(String),
}
