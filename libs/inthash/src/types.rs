//! The identifier value and its nil-safe predicates.

use std::fmt;
use std::str::FromStr;

use crate::parse::{parse_canonical, SEPARATOR};
use crate::IntHashError;

/// A generation counter paired with a content hash.
///
/// Any `(generation, hash)` pair is valid. The default value
/// (`0`, `""`) is the zero value and means "unset". A missing identifier is
/// modelled as `Option::<IntHash>::None`, which is distinct from zero.
///
/// Fields are read through accessors; values are replaced wholesale rather
/// than edited. The one exception is [`IntHash::merge_json`], which decodes
/// into an existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntHash {
    // Field order matters: derived equality compares generation first.
    pub(crate) generation: i64,
    pub(crate) hash: String,
}

impl IntHash {
    /// Creates a value from both parts.
    #[must_use]
    pub fn new(generation: i64, hash: impl Into<String>) -> Self {
        Self {
            generation,
            hash: hash.into(),
        }
    }

    /// Creates a value with the given generation and an empty hash.
    #[must_use]
    pub fn for_generation(generation: i64) -> Self {
        Self {
            generation,
            hash: String::new(),
        }
    }

    /// Creates a value with the given hash and generation `0`.
    #[must_use]
    pub fn for_hash(hash: impl Into<String>) -> Self {
        Self {
            generation: 0,
            hash: hash.into(),
        }
    }

    /// Returns the generation.
    #[must_use]
    pub const fn generation(&self) -> i64 {
        self.generation
    }

    /// Returns the hash.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Returns true if both the generation and the hash are unset.
    ///
    /// `{0, "x"}` is not zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.generation == 0 && self.hash.is_empty()
    }

    /// Returns true if both values carry the same generation, ignoring the hash.
    #[must_use]
    pub fn matches_generation(&self, other: &IntHash) -> bool {
        self.generation == other.generation
    }

    /// Overwrites `out` with a copy of `self`, reusing its allocation.
    pub fn deep_copy_into(&self, out: &mut IntHash) {
        out.clone_from(self);
    }

    /// Renders the value for use as a URL query parameter.
    ///
    /// The zero value encodes as an empty string so that an unset identifier
    /// can be dropped from the query.
    #[must_use]
    pub fn to_query_param(&self) -> String {
        if self.is_zero() {
            return String::new();
        }
        self.to_string()
    }
}

impl fmt::Display for IntHash {
    /// Always writes the separator, even when the hash is empty (`5$`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.generation, SEPARATOR, self.hash)
    }
}

impl FromStr for IntHash {
    type Err = IntHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_canonical(s)
    }
}

impl From<i64> for IntHash {
    fn from(generation: i64) -> Self {
        Self::for_generation(generation)
    }
}

/// Returns true if the value is absent or zero.
#[must_use]
pub fn is_zero(value: Option<&IntHash>) -> bool {
    value.map_or(true, IntHash::is_zero)
}

/// Nil-safe equality.
///
/// Two absent values are equal; an absent value never equals a present one,
/// not even the zero value.
#[must_use]
pub fn equal(a: Option<&IntHash>, b: Option<&IntHash>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
        _ => false,
    }
}

/// Nil-safe generation comparison, with the same absent handling as [`equal`].
#[must_use]
pub fn matches_generation(a: Option<&IntHash>, b: Option<&IntHash>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b) || a.matches_generation(b),
        _ => false,
    }
}

/// Returns an independent copy of the value, or `None` if it is absent.
#[must_use]
pub fn deep_copy(value: Option<&IntHash>) -> Option<IntHash> {
    value.cloned()
}
