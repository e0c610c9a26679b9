use serde::Serialize;
use thiserror::Error as ThisError;

///
/// SerializeError
///
/// No state reachable through the builder API can actually fail to encode
/// (rule payloads are a closed union of JSON primitives), so this surfaces
/// only encoder-internal failures.
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Encode a value as canonical JSON bytes.
///
/// Canonical here means: struct/variant fields in declaration order, empty
/// collections and false flags omitted at the field-attribute level.
pub fn to_vec<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    serde_json::to_vec(ty).map_err(|err| SerializeError::Serialize(err.to_string()))
}

/// Encode a value as a canonical JSON string. Same encoder as [`to_vec`].
pub fn to_string<T>(ty: &T) -> Result<String, SerializeError>
where
    T: Serialize,
{
    serde_json::to_string(ty).map_err(|err| SerializeError::Serialize(err.to_string()))
}

// skip_serializing_if predicates shared by the data model

pub(crate) const fn is_false(b: &bool) -> bool {
    !*b
}

pub(crate) const fn is_zero(n: &u32) -> bool {
    *n == 0
}
