//! Error types for the Courier framework.
//!
//! None of these ever escape [`CommandDispatcher::dispatch`]; argument errors
//! are handed to the failing command's own
//! [`handle_error`](crate::command::Command::handle_error).
//!
//! [`CommandDispatcher::dispatch`]: crate::dispatcher::CommandDispatcher::dispatch

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use courier_core::{ParseSnowflakeError, Snowflake};
use thiserror::Error;

use crate::command::EntityKind;

/// Failures raised while decoding a `<...>` reference token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The body has no trailing identifier of 18 or more digits.
    #[error("invalid reference: {0:?}")]
    InvalidSyntax(String),

    /// The sigil does not denote the kind of entity the parameter expects.
    #[error("invalid reference type: expected a {expected} reference, got sigil {sigil:?}")]
    InvalidType {
        expected: EntityKind,
        sigil: String,
    },

    /// A resolved entity was requested while caching is disabled.
    #[error("caching must be enabled to resolve {0} references")]
    CacheRequired(EntityKind),

    /// Caching is enabled but the entity is not in the store.
    #[error("{kind} {id} is not cached")]
    NotCached { kind: EntityKind, id: Snowflake },
}

/// Failures converting a token or decoded value into a parameter's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("not an integer: {0}")]
    Integer(#[source] ParseIntError),

    #[error("not a number: {0}")]
    Float(#[source] ParseFloatError),

    #[error("not a boolean, expected `true` or `false`")]
    Boolean,

    #[error(transparent)]
    Id(#[from] ParseSnowflakeError),

    /// An identifier does not fit in a signed 64-bit integer.
    #[error("identifier {0} does not fit in an integer")]
    IdOverflow(Snowflake),

    /// A reference parameter was given a plain token.
    #[error("expected a {0} reference")]
    ReferenceExpected(EntityKind),

    /// A decoded value cannot be turned into the parameter's type.
    #[error("cannot convert {from} to {to}")]
    Incompatible {
        from: &'static str,
        to: &'static str,
    },

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// What went wrong while binding a command's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentErrorKind {
    /// More tokens than declared parameters.
    #[error("too many arguments provided: expected at most {expected}, got {got}")]
    TooManyArguments { expected: usize, got: usize },

    /// A required parameter had no token.
    #[error("missing argument")]
    MissingArgument,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A binding failure, reported to the command as
/// (parameter name, offending raw token, cause).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError {
    /// The failing parameter; `None` for [`ArgumentErrorKind::TooManyArguments`].
    pub parameter: Option<String>,
    /// The raw token that failed; `None` when no token was available.
    pub raw: Option<String>,
    pub kind: ArgumentErrorKind,
}

impl ArgumentError {
    pub fn too_many(expected: usize, got: usize) -> Self {
        Self {
            parameter: None,
            raw: None,
            kind: ArgumentErrorKind::TooManyArguments { expected, got },
        }
    }

    pub fn missing(parameter: impl Into<String>) -> Self {
        Self {
            parameter: Some(parameter.into()),
            raw: None,
            kind: ArgumentErrorKind::MissingArgument,
        }
    }

    pub fn conversion(
        parameter: impl Into<String>,
        raw: impl Into<String>,
        cause: impl Into<ConversionError>,
    ) -> Self {
        Self {
            parameter: Some(parameter.into()),
            raw: Some(raw.into()),
            kind: ArgumentErrorKind::Conversion(cause.into()),
        }
    }

    /// Returns the reference decoding failure behind this error, if any.
    pub fn reference_error(&self) -> Option<&ReferenceError> {
        match &self.kind {
            ArgumentErrorKind::Conversion(ConversionError::Reference(err)) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.parameter, &self.raw) {
            (Some(param), Some(raw)) => write!(f, "argument `{param}` ({raw:?}): {}", self.kind),
            (Some(param), None) => write!(f, "argument `{param}`: {}", self.kind),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Errors raised while building the command registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),

    #[error("command names must be non-empty and contain no spaces: {0:?}")]
    InvalidName(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_display() {
        let err = ArgumentError::missing("user");
        assert_eq!(err.to_string(), "argument `user`: missing argument");

        let err = ArgumentError::too_many(1, 2);
        assert_eq!(
            err.to_string(),
            "too many arguments provided: expected at most 1, got 2"
        );

        let err = ArgumentError::conversion("flag", "maybe", ConversionError::Boolean);
        assert_eq!(
            err.to_string(),
            "argument `flag` (\"maybe\"): not a boolean, expected `true` or `false`"
        );
    }

    #[test]
    fn test_reference_error_accessor() {
        let err = ArgumentError::conversion(
            "role",
            "<@1>",
            ReferenceError::CacheRequired(EntityKind::Role),
        );
        assert_eq!(
            err.reference_error(),
            Some(&ReferenceError::CacheRequired(EntityKind::Role))
        );
        assert!(ArgumentError::missing("x").reference_error().is_none());
    }
}
