//! # inthash
//!
//! A compact composite identifier: a generation counter paired with a
//! content hash. Used to version and fingerprint resources whose content can
//! change independently of their generation.
//!
//! ## Text Format
//!
//! The canonical text form is `{generation}${hash}`:
//!
//! - `7$9f86d081884c7d65`
//! - `-1$abc` (negative generations are allowed)
//! - `5$` is what a value with an empty hash renders to, but it does not
//!   parse back (the hash segment must be non-empty)
//!
//! Everything after the first `$` is the hash, so hashes may themselves
//! contain `$`.
//!
//! ## JSON Shape
//!
//! - empty hash: a bare number, e.g. `5`
//! - otherwise: the canonical text as a string, e.g. `"5$abc"`
//! - an absent value is `null`
//!
//! Readers accept all three shapes regardless of what the writer produced.

mod error;
mod json;
mod parse;
mod types;

pub use error::IntHashError;
pub use json::{decode_json_into, to_json};
pub use parse::{parse, parse_canonical, Input, SEPARATOR};
pub use types::{deep_copy, equal, is_zero, matches_generation, IntHash};
