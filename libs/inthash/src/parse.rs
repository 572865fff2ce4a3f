//! Parsing identifiers from the shapes they arrive in.
//!
//! Identifiers travel through APIs that carry them as integers, strings,
//! optional references or already-typed values. [`Input`] names each of those
//! shapes explicitly, and [`parse`] turns any of them into an [`IntHash`].

use std::borrow::Cow;

use crate::{IntHash, IntHashError};

/// Separator between the generation and the hash in the canonical text form.
pub const SEPARATOR: char = '$';

/// A value the parser knows how to interpret.
///
/// Most callers never build this directly; the `From` conversions below let
/// [`parse`] accept integers, strings, options and identifiers as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// No value at all. Parses to the zero value.
    Absent,
    /// A bare generation. Parses to `{generation, ""}`.
    Integer(i64),
    /// Canonical text, see [`parse_canonical`].
    Text(Cow<'a, str>),
    /// An identifier that is already typed. Returned unchanged.
    Value(IntHash),
    /// Anything else, identified by its type name.
    Unsupported(Cow<'static, str>),
}

impl Input<'_> {
    /// Marks a value of type `T` as unparseable.
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Self {
        Input::Unsupported(Cow::Borrowed(std::any::type_name::<T>()))
    }
}

/// Parses an identifier from any supported input shape.
///
/// # Examples
///
/// ```
/// use inthash::{parse, IntHash};
///
/// assert_eq!(parse(7_i64).unwrap(), IntHash::for_generation(7));
/// assert_eq!(parse("7$abc").unwrap(), IntHash::new(7, "abc"));
/// assert_eq!(parse(None::<&str>).unwrap(), IntHash::default());
/// ```
pub fn parse<'a>(input: impl Into<Input<'a>>) -> Result<IntHash, IntHashError> {
    match input.into() {
        Input::Absent => Ok(IntHash::default()),
        Input::Integer(generation) => Ok(IntHash::for_generation(generation)),
        Input::Text(text) => parse_canonical(&text),
        Input::Value(value) => Ok(value),
        Input::Unsupported(type_name) => Err(IntHashError::unsupported(type_name)),
    }
}

/// Parses the canonical `{generation}${hash}` text form.
///
/// The empty string is the zero value. Otherwise the text is split at the
/// first `$`; both sides must be non-empty and the left side must be a
/// base-10 i64. The right side is taken verbatim and may contain further `$`.
pub fn parse_canonical(s: &str) -> Result<IntHash, IntHashError> {
    if s.is_empty() {
        return Ok(IntHash::default());
    }

    match s.find(SEPARATOR) {
        None | Some(0) => Err(IntHashError::MissingGeneration),
        Some(idx) if idx == s.len() - SEPARATOR.len_utf8() => Err(IntHashError::MissingHash),
        Some(idx) => {
            let generation = s[..idx].parse::<i64>()?;
            let hash = &s[idx + SEPARATOR.len_utf8()..];
            Ok(IntHash::new(generation, hash))
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Input::Integer(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Input::Integer(i64::from(value))
    }
}

impl From<u32> for Input<'_> {
    fn from(value: u32) -> Self {
        Input::Integer(i64::from(value))
    }
}

/// A missing integer reference reads as generation `0`.
impl From<Option<i64>> for Input<'_> {
    fn from(value: Option<i64>) -> Self {
        Input::Integer(value.unwrap_or_default())
    }
}

impl From<Option<&i64>> for Input<'_> {
    fn from(value: Option<&i64>) -> Self {
        Input::Integer(value.copied().unwrap_or_default())
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Input::Text(Cow::Owned(value))
    }
}

/// A missing string reference reads as the empty string.
impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Input::Text(Cow::Borrowed(value.unwrap_or_default()))
    }
}

impl From<IntHash> for Input<'_> {
    fn from(value: IntHash) -> Self {
        Input::Value(value)
    }
}

impl From<&IntHash> for Input<'_> {
    fn from(value: &IntHash) -> Self {
        Input::Value(value.clone())
    }
}

impl From<Option<&IntHash>> for Input<'_> {
    fn from(value: Option<&IntHash>) -> Self {
        value.map_or(Input::Absent, |v| Input::Value(v.clone()))
    }
}

/// JSON values as handed over by loosely typed APIs.
///
/// Integral numbers outside the i64 range, floats, booleans, arrays and
/// objects are unsupported.
impl<'a> From<&'a serde_json::Value> for Input<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Input::Absent,
            Value::String(s) => Input::Text(Cow::Borrowed(s.as_str())),
            Value::Number(n) => match n.as_i64() {
                Some(generation) => Input::Integer(generation),
                None if n.is_u64() => Input::Unsupported(Cow::Borrowed("u64")),
                None => Input::Unsupported(Cow::Borrowed("f64")),
            },
            Value::Bool(_) => Input::Unsupported(Cow::Borrowed("bool")),
            Value::Array(_) => Input::Unsupported(Cow::Borrowed("array")),
            Value::Object(_) => Input::Unsupported(Cow::Borrowed("object")),
        }
    }
}
