//! JSON encoding and decoding.
//!
//! Values with an empty hash encode as a bare number (the reduced form);
//! everything else encodes as the canonical text in a JSON string. Decoding
//! accepts strings, numbers and `null`.

use std::fmt;

use serde::de::{self, Visitor};

use crate::{parse, IntHash, IntHashError};

/// Encodes a possibly absent value.
///
/// Returns `Ok(None)` for an absent value, leaving it to the caller to write
/// `null` or omit the field.
pub fn to_json(value: Option<&IntHash>) -> Result<Option<Vec<u8>>, IntHashError> {
    value
        .map(|v| serde_json::to_vec(v).map_err(IntHashError::from))
        .transpose()
}

/// Decodes JSON bytes into an existing value.
///
/// - a JSON string is parsed and replaces `target` entirely
/// - `null` leaves `target` untouched
/// - a number overwrites the generation and keeps the current hash
///
/// `target` is left unmodified on error.
pub fn decode_json_into(target: Option<&mut IntHash>, data: &[u8]) -> Result<(), IntHashError> {
    let Some(target) = target else {
        return Err(IntHashError::NilReceiver);
    };

    let trimmed = data.trim_ascii();

    if trimmed.first() == Some(&b'"') {
        let text: String = serde_json::from_slice(trimmed)?;
        *target = parse(text)?;
        return Ok(());
    }

    if trimmed == b"null" {
        return Ok(());
    }

    // Reduced form: only the generation travels, the hash stays as it was.
    // serde_json reads `-0` as a float, so it is matched on the raw token.
    let number: serde_json::Number = serde_json::from_slice(trimmed)?;
    target.generation = match number.as_i64() {
        Some(generation) => generation,
        None if trimmed == b"-0" => 0,
        None => serde_json::from_slice::<i64>(trimmed)?,
    };
    Ok(())
}

impl IntHash {
    /// Decodes JSON bytes into this value, see [`decode_json_into`].
    pub fn merge_json(&mut self, data: &[u8]) -> Result<(), IntHashError> {
        decode_json_into(Some(self), data)
    }
}

impl serde::Serialize for IntHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.hash.is_empty() {
            serializer.serialize_i64(self.generation)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> serde::Deserialize<'de> for IntHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(IntHashVisitor)
    }
}

struct IntHashVisitor;

impl<'de> Visitor<'de> for IntHashVisitor {
    type Value = IntHash;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer generation, a \"<generation>$<hash>\" string, or null")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(IntHash::for_generation(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(IntHash::for_generation)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    /// Only zero, which is how `-0` arrives.
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v == 0.0 {
            Ok(IntHash::default())
        } else {
            Err(E::invalid_type(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse(v).map_err(E::custom)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(IntHash::default())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(IntHash::default())
    }
}
