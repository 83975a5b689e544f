//! JSON round-trip helpers.
//!
//! Values serialize to their canonical JSON text with `serde_json`, and
//! parsing goes straight back into a typed value. Reconstructing the type
//! is what gives parsed data its behavior: a [`Rectangle`](crate::Rectangle)
//! deserialized from text answers [`area`](crate::Rectangle::area) like any
//! other.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Serializes a value to JSON text.
///
/// Struct fields keep declaration order; arrays keep element order.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parses JSON text into a typed value.
///
/// Fails with [`SelkitError::Parse`](crate::SelkitError::Parse) when the
/// text is not valid JSON or does not match the target shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}
