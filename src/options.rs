//! Configuration options for the TOON codec.
//!
//! This module provides the types that customise encoding and decoding:
//!
//! - [`ToonOptions`]: the main configuration bundle, shared by both directions
//! - [`Delimiter`]: the document delimiter for inline and tabular arrays
//! - [`KeyFolding`]: whether the encoder may collapse single-child object
//!   chains into dotted keys
//! - [`PathExpansion`]: whether the decoder may expand dotted keys back into
//!   nested objects
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode_with_options, toon, Delimiter, ToonOptions};
//!
//! let value = toon!({ "tags": ["a", "b"] });
//!
//! let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
//! let out = encode_with_options(&value, &options);
//! assert_eq!(out, "tags[2|]: a|b\n");
//! ```

/// Delimiter used between cells of inline and tabular arrays.
///
/// The delimiter chosen here is the **document delimiter**; array headers
/// carry an explicit override marker when it is not the comma, so a decoder
/// needs no out-of-band knowledge to split array bodies.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the delimiter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Key-folding mode for the encoder.
///
/// In `Safe` mode, chains of single-child objects collapse into a dotted key
/// (`a.b.c: 1` instead of three nested lines), but only when every segment is
/// a plain identifier and no sibling key could collide with the folded form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyFolding {
    #[default]
    Off,
    Safe,
}

/// Path-expansion mode for the decoder.
///
/// In `Safe` mode, unquoted keys containing dots expand into nested objects
/// (`server.port: 8080` becomes `{"server":{"port":8080}}`). Quoted keys are
/// never expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathExpansion {
    #[default]
    Off,
    Safe,
}

/// Configuration bundle for [`encode_with_options`](crate::encode_with_options)
/// and [`decode_with_options`](crate::decode_with_options).
///
/// Options are immutable for the duration of a codec call; two calls on
/// distinct documents may run in parallel threads sharing one `ToonOptions`
/// by cloning it.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, KeyFolding, ToonOptions};
///
/// // Defaults: 2-space indent, comma delimiter, strict decoding.
/// let options = ToonOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(options.strict);
///
/// // Custom configuration.
/// let options = ToonOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_key_folding(KeyFolding::Safe)
///     .with_flatten_depth(3);
/// ```
#[derive(Clone, Debug)]
pub struct ToonOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Document delimiter for inline and tabular arrays.
    pub delimiter: Delimiter,
    /// Enables all decoder validations (counts, widths, indentation, escapes).
    pub strict: bool,
    /// Encoder may collapse single-child object chains into dotted keys.
    pub key_folding: KeyFolding,
    /// Maximum number of segments in a folded key.
    pub flatten_depth: usize,
    /// Decoder may expand unquoted dotted keys into nested objects.
    pub expand_paths: PathExpansion,
}

impl Default for ToonOptions {
    fn default() -> Self {
        ToonOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            strict: true,
            key_folding: KeyFolding::default(),
            flatten_depth: usize::MAX,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl ToonOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (spaces per nesting level). Default is 2.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the document delimiter for inline and tabular arrays.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables strict decoding. Default is strict.
    ///
    /// Non-strict decoding accepts count and width mismatches (the actual
    /// data wins), tolerates irregular indentation, and resolves path
    /// expansion conflicts last-write-wins.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the encoder key-folding mode. Default is [`KeyFolding::Off`].
    #[must_use]
    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }

    /// Caps the number of dotted segments a folded key may have.
    ///
    /// Folding stops before the segment that would push past the limit; the
    /// remaining object is emitted as a normal nested block.
    #[must_use]
    pub fn with_flatten_depth(mut self, flatten_depth: usize) -> Self {
        self.flatten_depth = flatten_depth.max(1);
        self
    }

    /// Sets the decoder path-expansion mode. Default is [`PathExpansion::Off`].
    #[must_use]
    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }
}
