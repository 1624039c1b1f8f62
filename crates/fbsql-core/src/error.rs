//! Error types for value conversion, row decoding and execution.

use crate::value::ValueKind;

/// A value could not be converted to the requested native type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The value's tag is not an accepted source for the target type.
    #[error("Could not convert {found} value to {target}")]
    Mismatch {
        /// Name of the target type.
        target: &'static str,
        /// Tag of the value that was supplied.
        found: ValueKind,
    },

    /// A numeric value does not fit in the target type.
    #[error("Value {value} is out of range for {target}")]
    OutOfRange {
        /// Name of the target type.
        target: &'static str,
        /// Rendering of the rejected value.
        value: String,
    },

    /// The tag matched but the payload is malformed.
    #[error("Invalid payload for {target}: {reason}")]
    InvalidPayload {
        /// Name of the target type.
        target: &'static str,
        /// What was wrong with the payload.
        reason: String,
    },
}

impl ConversionError {
    pub(crate) const fn mismatch(target: &'static str, found: ValueKind) -> Self {
        Self::Mismatch { target, found }
    }

    pub(crate) fn out_of_range(target: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            target,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid(target: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            target,
            reason: reason.into(),
        }
    }
}

/// A structured record could not be decoded from a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A required field has no matching column.
    #[error("Field '{field}' not found{}", table_suffix(.table.as_deref()))]
    FieldNotFound {
        /// Field (column) name.
        field: String,
        /// Table scope used for the lookup.
        table: Option<String>,
    },

    /// The column exists but its value could not be converted.
    #[error("Field '{field}': {source}")]
    Field {
        /// Field (column) name.
        field: String,
        /// Underlying conversion failure.
        source: ConversionError,
    },
}

fn table_suffix(table: Option<&str>) -> String {
    table.map_or_else(String::new, |t| format!(" in table '{t}'"))
}

/// An error reported by the database or the driver executing a statement.
///
/// The reason is passed through as-is; it is never classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ExecutionError {
    /// Human-readable reason from the database.
    pub reason: String,
}

impl ExecutionError {
    /// Creates a new execution error.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Any error surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Value conversion failure.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Row decoding failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Execution failure from the database.
    #[error("Execution failed: {0}")]
    Execution(#[from] ExecutionError),
}

/// Result type for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_not_found_message() {
        let err = DecodeError::FieldNotFound {
            field: String::from("id"),
            table: Some(String::from("users")),
        };
        assert_eq!(err.to_string(), "Field 'id' not found in table 'users'");

        let err = DecodeError::FieldNotFound {
            field: String::from("id"),
            table: None,
        };
        assert_eq!(err.to_string(), "Field 'id' not found");
    }

    #[test]
    fn test_execution_error_passes_reason_through() {
        let err: Error = ExecutionError::new("Syntax error 363").into();
        assert_eq!(err.to_string(), "Execution failed: Syntax error 363");
    }
}
