use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{Blob, Value};
use crate::error::ConversionError;

/// Conversion between native types and [`Value`].
///
/// Decoding is fallible and never coerces beyond the documented source tags.
/// Encoding is total and always picks the canonical tag for the type.
pub trait ValueConvertible: Sized {
    /// Decodes a native value.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not an accepted source for `Self` or if
    /// a numeric payload does not fit.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;

    /// Encodes into a database value.
    fn to_value(self) -> Value;
}

impl ValueConvertible for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }

    fn to_value(self) -> Value {
        self
    }
}

/// Truncates a float toward zero and checks it against `min..end`.
///
/// Integer maxima are `2^k - 1`, which `as f64` rounds up to `2^k` for
/// 64-bit targets, so the upper bound is exclusive and passed as `2^k`.
fn float_to_integral(
    target: &'static str,
    value: f64,
    min: f64,
    end: f64,
) -> Result<f64, ConversionError> {
    let truncated = value.trunc();
    if truncated.is_nan() || truncated < min || truncated >= end {
        return Err(ConversionError::out_of_range(target, value));
    }
    Ok(truncated)
}

macro_rules! impl_integer {
    (@decode $ty:ty) => {
        fn from_value(value: &Value) -> Result<Self, ConversionError> {
            const TARGET: &str = stringify!($ty);
            match value {
                Value::Integer(n) => {
                    <$ty>::try_from(*n).map_err(|_| ConversionError::out_of_range(TARGET, n))
                }
                Value::Float(f) => {
                    // MIN is 0 or -2^(k-1), both exact as f64.
                    let end = 2f64.powi(<$ty>::BITS as i32 - i32::from(<$ty>::MIN != 0));
                    let t = float_to_integral(TARGET, *f, <$ty>::MIN as f64, end)?;
                    Ok(t as $ty)
                }
                other => Err(ConversionError::mismatch(TARGET, other.kind())),
            }
        }
    };
    (lossless: $($ty:ty),+) => {$(
        impl ValueConvertible for $ty {
            impl_integer!(@decode $ty);

            fn to_value(self) -> Value {
                Value::Integer(i64::from(self))
            }
        }
    )+};
    (wide: $($ty:ty),+) => {$(
        impl ValueConvertible for $ty {
            impl_integer!(@decode $ty);

            // Values past i64::MAX keep their magnitude as a float.
            fn to_value(self) -> Value {
                i64::try_from(self).map_or_else(|_| Value::Float(self as f64), Value::Integer)
            }
        }
    )+};
}

impl_integer!(lossless: i8, i16, i32, i64, u8, u16, u32);
impl_integer!(wide: u64, usize, isize);

impl ValueConvertible for f64 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Integer(n) => Ok(*n as Self),
            Value::Float(f) => Ok(*f),
            other => Err(ConversionError::mismatch("f64", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl ValueConvertible for f32 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Integer(n) => Ok(*n as Self),
            Value::Float(f) if f.is_finite() && f.abs() > f64::from(Self::MAX) => {
                Err(ConversionError::out_of_range("f32", f))
            }
            Value::Float(f) => Ok(*f as Self),
            other => Err(ConversionError::mismatch("f32", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ValueConvertible for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(n) => Ok(*n != 0),
            Value::Float(f) => Ok(*f != 0.0),
            other => Err(ConversionError::mismatch("bool", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl ValueConvertible for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(ConversionError::mismatch("String", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

/// Absolute URLs, stored as their serialized text.
impl ValueConvertible for Url {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => {
                Self::parse(s).map_err(|e| ConversionError::invalid("Url", e.to_string()))
            }
            other => Err(ConversionError::mismatch("Url", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Text(self.into())
    }
}

/// Bit strings. Blob content is never accepted here.
impl ValueConvertible for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bits(bits) => Ok(bits.clone()),
            other => Err(ConversionError::mismatch("Vec<u8>", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Bits(self)
    }
}

impl ValueConvertible for Blob {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Blob(blob) => Ok(blob.clone()),
            other => Err(ConversionError::mismatch("Blob", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Blob(self)
    }
}

/// Opaque binary content, stored as a blob.
impl ValueConvertible for Bytes {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Blob(blob) => blob
                .data()
                .cloned()
                .map_err(|e| ConversionError::invalid("Bytes", e.to_string())),
            other => Err(ConversionError::mismatch("Bytes", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Blob(Blob::new(self))
    }
}

impl ValueConvertible for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Timestamp(ts) => Ok(*ts),
            other => Err(ConversionError::mismatch("DateTime<Utc>", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Timestamp(self)
    }
}

impl ValueConvertible for Uuid {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => {
                Self::parse_str(s).map_err(|e| ConversionError::invalid("Uuid", e.to_string()))
            }
            Value::Bits(bits) => match bits.len() {
                16 => Self::from_slice(bits).map_err(|e| ConversionError::invalid("Uuid", e.to_string())),
                12 => {
                    let mut padded = [0u8; 16];
                    padded[..12].copy_from_slice(bits);
                    Ok(Self::from_bytes(padded))
                }
                n => Err(ConversionError::invalid(
                    "Uuid",
                    format!("expected 12 or 16 bytes of bits, found {n}"),
                )),
            },
            Value::Blob(blob) => {
                let data = blob
                    .data()
                    .map_err(|e| ConversionError::invalid("Uuid", e.to_string()))?;
                Self::from_slice(data).map_err(|_| {
                    ConversionError::invalid(
                        "Uuid",
                        format!("expected a 16 byte blob, found {} bytes", data.len()),
                    )
                })
            }
            other => Err(ConversionError::mismatch("Uuid", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Bits(self.as_bytes().to_vec())
    }
}

/// A 96-bit identifier, stored in a `BIT(96)` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bit96(pub [u8; 12]);

impl Bit96 {
    /// Creates an identifier from its bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl From<Bit96> for Vec<u8> {
    fn from(value: Bit96) -> Self {
        value.0.to_vec()
    }
}

impl ValueConvertible for Bit96 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bits(bits) => <[u8; 12]>::try_from(bits.as_slice())
                .map(Self)
                .map_err(|_| {
                    ConversionError::invalid(
                        "Bit96",
                        format!("expected 12 bytes of bits, found {}", bits.len()),
                    )
                }),
            other => Err(ConversionError::mismatch("Bit96", other.kind())),
        }
    }

    fn to_value(self) -> Value {
        Value::Bits(self.0.to_vec())
    }
}

impl<T: ValueConvertible> ValueConvertible for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn to_value(self) -> Value {
        self.map_or(Value::Null, T::to_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_integer_range_is_inclusive() {
        assert_eq!(i8::from_value(&Value::Integer(127)).unwrap(), 127);
        assert_eq!(i8::from_value(&Value::Integer(-128)).unwrap(), -128);
        assert!(matches!(
            i8::from_value(&Value::Integer(128)),
            Err(ConversionError::OutOfRange { target: "i8", .. })
        ));
        assert!(u8::from_value(&Value::Integer(-1)).is_err());
        assert_eq!(u64::from_value(&Value::Integer(i64::MAX)).unwrap(), i64::MAX as u64);
    }

    #[test]
    fn test_float_narrows_to_integer() {
        assert_eq!(i32::from_value(&Value::Float(3.9)).unwrap(), 3);
        assert_eq!(i32::from_value(&Value::Float(-3.9)).unwrap(), -3);
        assert_eq!(u8::from_value(&Value::Float(255.5)).unwrap(), 255);
        assert!(u8::from_value(&Value::Float(256.0)).is_err());
        assert!(i16::from_value(&Value::Float(f64::NAN)).is_err());
        assert!(i16::from_value(&Value::Float(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_float_rejects_one_past_64_bit_maximum() {
        let two_63 = 9_223_372_036_854_775_808.0;
        let two_64 = 18_446_744_073_709_551_616.0;
        assert!(matches!(
            i64::from_value(&Value::Float(two_63)),
            Err(ConversionError::OutOfRange { target: "i64", .. })
        ));
        assert!(matches!(
            u64::from_value(&Value::Float(two_64)),
            Err(ConversionError::OutOfRange { target: "u64", .. })
        ));
        assert!(isize::from_value(&Value::Float(two_63)).is_err());
        assert!(usize::from_value(&Value::Float(two_64)).is_err());

        assert_eq!(i64::from_value(&Value::Float(-two_63)).unwrap(), i64::MIN);
        assert_eq!(u64::from_value(&Value::Float(two_63)).unwrap(), 1_u64 << 63);
        let below = i64::from_value(&Value::Float(9_223_372_036_854_774_784.0)).unwrap();
        assert_eq!(below, i64::MAX - 1023);
    }

    #[test]
    fn test_integer_rejects_other_tags() {
        let err = i64::from_value(&Value::Text(String::from("1"))).unwrap_err();
        assert_eq!(err, ConversionError::mismatch("i64", ValueKind::Text));
        assert_eq!(err.to_string(), "Could not convert text value to i64");
        assert!(i64::from_value(&Value::Boolean(true)).is_err());
    }

    #[test]
    fn test_unsigned_encodes_past_signed_range_as_float() {
        assert_eq!(42u64.to_value(), Value::Integer(42));
        assert_eq!(u64::MAX.to_value(), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_float_widths() {
        assert_eq!(f64::from_value(&Value::Integer(2)).unwrap(), 2.0);
        assert_eq!(f32::from_value(&Value::Float(1.5)).unwrap(), 1.5);
        assert!(f32::from_value(&Value::Float(1e300)).is_err());
        assert_eq!(1.5f32.to_value(), Value::Float(1.5));
    }

    #[test]
    fn test_bool_decodes_from_numbers() {
        assert!(bool::from_value(&Value::Boolean(true)).unwrap());
        assert!(bool::from_value(&Value::Integer(-5)).unwrap());
        assert!(!bool::from_value(&Value::Integer(0)).unwrap());
        assert!(bool::from_value(&Value::Float(0.1)).unwrap());
        assert!(!bool::from_value(&Value::Float(0.0)).unwrap());
        assert!(bool::from_value(&Value::Text(String::from("true"))).is_err());
        assert_eq!(true.to_value(), Value::Boolean(true));
    }

    #[test]
    fn test_byte_vectors_are_bits_not_blobs() {
        assert_eq!(vec![1u8, 2].to_value(), Value::Bits(vec![1, 2]));
        assert!(Vec::<u8>::from_value(&Value::Blob(Blob::new(vec![1, 2]))).is_err());
        assert_eq!(
            Bytes::from_static(b"HELLO").to_value(),
            Value::Blob(Blob::new(b"HELLO".to_vec()))
        );
        assert!(Bytes::from_value(&Value::Bits(vec![1])).is_err());
    }

    #[test]
    fn test_uuid_sources() {
        let uuid = Uuid::from_bytes([
            0x67, 0xe5, 0x50, 0x44, 0x10, 0xb1, 0x42, 0x6f, 0x92, 0x47, 0xbb, 0x68, 0x0e, 0x5f,
            0xe0, 0xc8,
        ]);

        let text = Value::Text(String::from("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert_eq!(Uuid::from_value(&text).unwrap(), uuid);
        assert_eq!(Uuid::from_value(&uuid.to_value()).unwrap(), uuid);
        assert_eq!(
            Uuid::from_value(&Value::Blob(Blob::new(uuid.as_bytes().to_vec()))).unwrap(),
            uuid
        );

        let short = Uuid::from_value(&Value::Bits(uuid.as_bytes()[..12].to_vec())).unwrap();
        assert_eq!(&short.as_bytes()[..12], &uuid.as_bytes()[..12]);
        assert_eq!(&short.as_bytes()[12..], &[0, 0, 0, 0]);

        assert!(Uuid::from_value(&Value::Bits(vec![0; 10])).is_err());
        assert!(Uuid::from_value(&Value::Text(String::from("nope"))).is_err());
        assert_eq!(uuid.to_value(), Value::Bits(uuid.as_bytes().to_vec()));
    }

    #[test]
    fn test_blob_fetch_failure_is_a_conversion_error() {
        use std::sync::Arc;

        use crate::error::ExecutionError;
        use crate::value::BlobSource;

        struct Unreachable;

        impl BlobSource for Unreachable {
            fn fetch(&self, _handle: &str, _size: usize) -> Result<Bytes, ExecutionError> {
                Err(ExecutionError::new("connection closed"))
            }
        }

        let value = Value::Blob(Blob::deferred("@blob:7", 16, Arc::new(Unreachable)));
        assert_eq!(
            Bytes::from_value(&value),
            Err(ConversionError::InvalidPayload {
                target: "Bytes",
                reason: String::from("connection closed"),
            })
        );
        assert!(matches!(
            Uuid::from_value(&value),
            Err(ConversionError::InvalidPayload { target: "Uuid", .. })
        ));
    }

    #[test]
    fn test_url_from_text() {
        let url = Url::parse("https://example.com/docs?page=2").unwrap();
        let value = url.clone().to_value();
        assert_eq!(
            value,
            Value::Text(String::from("https://example.com/docs?page=2"))
        );
        assert_eq!(Url::from_value(&value).unwrap(), url);

        assert!(matches!(
            Url::from_value(&Value::Text(String::from("not a url"))),
            Err(ConversionError::InvalidPayload { target: "Url", .. })
        ));
        assert!(matches!(
            Url::from_value(&Value::Integer(1)),
            Err(ConversionError::Mismatch { target: "Url", .. })
        ));
    }

    #[test]
    fn test_bit96() {
        let bytes = [0, 1, 2, 3, 4, 5, 6, 7, 124, 125, 126, 127];
        let id = Bit96::new(bytes);
        assert_eq!(id.to_value(), Value::Bits(bytes.to_vec()));
        assert_eq!(Bit96::from_value(&Value::Bits(bytes.to_vec())).unwrap(), id);
        assert!(Bit96::from_value(&Value::Bits(vec![0; 16])).is_err());
        assert_eq!(Vec::<u8>::from(id), bytes.to_vec());
    }

    #[test]
    fn test_timestamp_only_from_timestamp() {
        let now = Utc::now();
        assert_eq!(DateTime::<Utc>::from_value(&Value::Timestamp(now)).unwrap(), now);
        assert!(DateTime::<Utc>::from_value(&Value::Text(String::from("2024-01-01"))).is_err());
    }

    #[test]
    fn test_option_maps_null() {
        assert_eq!(Option::<i32>::from_value(&Value::Null).unwrap(), None);
        assert_eq!(Option::<i32>::from_value(&Value::Integer(4)).unwrap(), Some(4));
        assert_eq!(None::<String>.to_value(), Value::Null);
        assert!(i32::from_value(&Value::Null).is_err());
    }
}
