use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Value, ValueConvertible};
use crate::error::ConversionError;

/// Stores any serde type as JSON text.
///
/// Decodes from text or blob content.
///
/// [`ValueConvertible::to_value`] is infallible, so it stores `Null` when
/// the inner value cannot be serialized (for example a map with non-string
/// keys). Use [`Json::try_to_value`] where that failure must surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Json<T> {
    /// Encodes the inner value as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidPayload`] if serialization fails.
    pub fn try_to_value(&self) -> Result<Value, ConversionError> {
        serde_json::to_string(&self.0)
            .map(Value::Text)
            .map_err(|e| ConversionError::invalid("Json", e.to_string()))
    }
}

impl<T: Serialize + DeserializeOwned> ValueConvertible for Json<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        let parsed = match value {
            Value::Text(s) => serde_json::from_str(s),
            Value::Blob(blob) => {
                let data = blob
                    .data()
                    .map_err(|e| ConversionError::invalid("Json", e.to_string()))?;
                serde_json::from_slice(data)
            }
            other => return Err(ConversionError::mismatch("Json", other.kind())),
        };
        parsed
            .map(Self)
            .map_err(|e| ConversionError::invalid("Json", e.to_string()))
    }

    fn to_value(self) -> Value {
        self.try_to_value().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not serialize JSON value, storing NULL");
            Value::Null
        })
    }
}
