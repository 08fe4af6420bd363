//! # toon-codec
//!
//! Encoder and decoder for **TOON** (The Object-Oriented Notation), a text
//! data-interchange format that shares JSON's data model while adding
//! configuration-file ergonomics and a dense tabular form for arrays of
//! uniform records.
//!
//! ## What does TOON look like?
//!
//! ```text
//! name: Alice
//! active: true
//! scores[3]: 95,87,92
//! friends[2]{id,name}:
//!   1,Bob
//!   2,Carol
//! address:
//!   city: Berlin
//!   zip: "10115"
//! ```
//!
//! Indentation carries structure, strings are unquoted whenever that is
//! unambiguous, and arrays of objects with identical fields collapse into a
//! header plus one row per record.
//!
//! ## Key features
//!
//! - **Value-centric codec**: [`encode`] turns a [`Value`] tree into a
//!   document, [`decode`] parses one back; `decode(encode(v)) == v` for the
//!   whole supported domain.
//! - **Three array shapes**: inline primitives, tabular records, and an
//!   expanded list for everything else, chosen automatically.
//! - **Strict by default**: declared counts, tabular row widths, indentation
//!   and escapes are validated; every error carries a source line.
//! - **Dotted paths**: the encoder can fold single-child object chains into
//!   `a.b.c` keys, and the decoder can expand them back, both opt-in.
//! - **Order preserving**: objects keep insertion order across round trips.
//! - **No unsafe code** and no panics in the public API.
//!
//! ## Quick start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "scores": [95, 87, 92]
//! });
//!
//! let text = encode(&value);
//! assert_eq!(text, "name: Alice\nscores[3]: 95,87,92\n");
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## Options
//!
//! ```rust
//! use toon_codec::{decode_with_options, PathExpansion, ToonOptions};
//!
//! let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
//! let value = decode_with_options("server.port: 8080\n", &options).unwrap();
//! let server = value.as_object().unwrap().get("server").unwrap();
//! assert_eq!(server.as_object().unwrap().get("port").and_then(|p| p.as_int()), Some(8080));
//! ```
//!
//! See [`ToonOptions`] for the full option surface: indentation width, the
//! document delimiter, strictness, key folding and path expansion.
//!
//! ## Format documentation
//!
//! The [`spec`] module documents the format as implemented, including the
//! quoting rules and the exact array header grammar.

#![forbid(unsafe_code)]

mod de;
pub mod error;
mod header;
mod lines;
pub mod macros;
pub mod map;
pub mod options;
mod scalar;
mod ser;
pub mod spec;
pub mod value;

pub use error::{DecodeError, Result};
pub use map::ToonMap;
pub use options::{Delimiter, KeyFolding, PathExpansion, ToonOptions};
pub use value::Value;

/// The TOON specification version this crate implements.
#[must_use]
pub fn spec_version() -> &'static str {
    "3.0"
}

/// Encodes a value tree into a TOON document with default options.
///
/// The encoder cannot fail for in-domain values; non-finite floats are
/// normalised to `null`. The returned document ends with a newline.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon};
///
/// let value = toon!({ "items": [1, 2, 3] });
/// assert_eq!(encode(&value), "items[3]: 1,2,3\n");
/// ```
#[must_use]
pub fn encode(value: &Value) -> String {
    encode_with_options(value, &ToonOptions::default())
}

/// Encodes a value tree into a TOON document with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode_with_options, toon, KeyFolding, ToonOptions};
///
/// let value = toon!({ "a": { "b": { "c": 1 } } });
/// let options = ToonOptions::new().with_key_folding(KeyFolding::Safe);
/// assert_eq!(encode_with_options(&value, &options), "a.b.c: 1\n");
/// ```
#[must_use]
pub fn encode_with_options(value: &Value, options: &ToonOptions) -> String {
    ser::encode_document(value, options)
}

/// Decodes a TOON document into a value tree with default options.
///
/// # Errors
///
/// Returns a [`DecodeError`] (with a 1-based source line) when the document
/// violates the grammar or, in strict mode, any declared count, row width,
/// indentation step, or escape rule.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode, Value};
///
/// let value = decode("items[3]: 1,2,3\n").unwrap();
/// let items = value.as_object().unwrap().get("items").unwrap();
/// assert_eq!(items.as_array().unwrap().len(), 3);
/// ```
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, &ToonOptions::default())
}

/// Decodes a TOON document into a value tree with custom options.
///
/// # Errors
///
/// Returns a [`DecodeError`] on any grammar or validation failure; see
/// [`decode`].
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode_with_options, ToonOptions};
///
/// let options = ToonOptions::new().with_strict(false);
/// // Non-strict decoding lets the actual element count win.
/// let value = decode_with_options("items[9]: 1,2\n", &options).unwrap();
/// let items = value.as_object().unwrap().get("items").unwrap();
/// assert_eq!(items.as_array().unwrap().len(), 2);
/// ```
pub fn decode_with_options(input: &str, options: &ToonOptions) -> Result<Value> {
    de::decode_document(input, options)
}

/// Decodes a TOON document from raw bytes, validating UTF-8 first.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the bytes are not valid UTF-8 (reported
/// with line 0) or when decoding the text fails.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode_slice, ToonOptions};
///
/// let value = decode_slice(b"x: 1\n", &ToonOptions::default()).unwrap();
/// assert!(value.is_object());
/// ```
pub fn decode_slice(bytes: &[u8], options: &ToonOptions) -> Result<Value> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DecodeError::unpositioned(format!("Invalid UTF-8: {}", e)))?;
    decode_with_options(text, options)
}
