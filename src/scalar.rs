//! Canonical primitive handling shared by the encoder and decoder.
//!
//! Both directions of the codec must agree, byte for byte, on how primitives
//! look in a document: how numbers are written, which strings need quotes,
//! which escapes exist, and what an unquoted token decodes to. This module is
//! the single home for those rules.
//!
//! The quote-aware scanners (`split_colon`, `split_cells`) also live here
//! because they encode the same escaping rules from the reading side.

use crate::error::{DecodeError, Result};
use crate::Value;

/// Shape of a token when matched against the numeric grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NumberShape {
    /// Not a number at all.
    None,
    /// `-?0\d+...` — a leading-zero form, always decoded as a string.
    LeadingZero,
    /// `-?\d+` — integer, no fraction or exponent.
    Integer,
    /// `-?\d+(\.\d+)?([eE][+-]?\d+)?` with a fraction and/or exponent.
    Decimal,
}

/// Matches a token against the numeric grammar without parsing it.
pub(crate) fn number_shape(s: &str) -> NumberShape {
    let bytes = s.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return NumberShape::None;
    }
    // Leading-zero integers like 0123 (or -0123) are reserved for strings.
    if bytes[digits_start] == b'0' && i - digits_start > 1 {
        return NumberShape::LeadingZero;
    }
    if i == bytes.len() {
        return NumberShape::Integer;
    }
    let mut fractional = false;
    if bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return NumberShape::None;
        }
        fractional = true;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return NumberShape::None;
        }
        fractional = true;
    }
    if i != bytes.len() {
        return NumberShape::None;
    }
    if fractional {
        NumberShape::Decimal
    } else {
        NumberShape::Integer
    }
}

/// Canonical text for an integer.
pub(crate) fn format_int(i: i64) -> String {
    i.to_string()
}

/// Canonical text for a float: shortest decimal form, no exponent, no
/// trailing fractional zeros, `±0` as `0`. Non-finite floats have no
/// canonical form and render as `null`.
pub(crate) fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    // Rust's Display for f64 already yields the shortest round-tripping
    // decimal form and never switches to scientific notation.
    format!("{}", f)
}

/// Decodes a bare (unquoted) token into a primitive value.
///
/// Precedence: `null`/`true`/`false` keywords, then the numeric grammar
/// (leading-zero forms stay strings), then string.
pub(crate) fn parse_bare_token(token: &str) -> Value {
    match token {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    match number_shape(token) {
        NumberShape::Integer => match token.parse::<i64>() {
            Ok(i) => Value::Int(i),
            // Magnitude beyond i64: fall through to the float reading.
            Err(_) => match token.parse::<f64>() {
                Ok(f) if f.is_finite() => Value::Float(f),
                _ => Value::String(token.to_string()),
            },
        },
        NumberShape::Decimal => match token.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::String(token.to_string()),
        },
        NumberShape::LeadingZero | NumberShape::None => Value::String(token.to_string()),
    }
}

/// Decodes a token that may be quoted or bare.
///
/// The caller is expected to have trimmed surrounding whitespace. In strict
/// mode a quoted token must span the whole input and may only use the five
/// recognised escapes.
pub(crate) fn parse_token(token: &str, strict: bool) -> Result<Value> {
    if token.starts_with('"') {
        let (text, consumed) = parse_quoted(token, strict)?;
        if consumed != token.len() && strict {
            return Err(DecodeError::unpositioned(
                "Unexpected characters after closing quote",
            ));
        }
        return Ok(Value::String(text));
    }
    Ok(parse_bare_token(token))
}

/// Reads a quoted string starting at byte 0 of `s` (which must begin with
/// `"`). Returns the unescaped text and the byte offset just past the
/// closing quote.
pub(crate) fn parse_quoted(s: &str, strict: bool) -> Result<(String, usize)> {
    debug_assert!(s.starts_with('"'));
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();
    chars.next(); // opening quote
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((out, i + 1)),
            '\\' => match chars.next() {
                Some((_, '\\')) => out.push('\\'),
                Some((_, '"')) => out.push('"'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, 't')) => out.push('\t'),
                Some((_, other)) => {
                    if strict {
                        return Err(DecodeError::unpositioned(format!(
                            "Invalid escape sequence '\\{}'",
                            other
                        )));
                    }
                    out.push('\\');
                    out.push(other);
                }
                None => return Err(DecodeError::unpositioned("Unterminated string")),
            },
            other => out.push(other),
        }
    }
    Err(DecodeError::unpositioned("Unterminated string"))
}

/// Decides whether a string value must be quoted to survive a round trip.
///
/// `active` is the delimiter in force for the current array scope and
/// `document` is the configured document delimiter; both trigger quoting.
pub(crate) fn needs_quoting(s: &str, active: char, document: char) -> bool {
    let (Some(first), Some(last)) = (s.chars().next(), s.chars().next_back()) else {
        return true;
    };
    if first.is_whitespace() || last.is_whitespace() {
        return true;
    }
    if s == "true" || s == "false" || s == "null" {
        return true;
    }
    if number_shape(s) != NumberShape::None {
        return true;
    }
    if first == '-' {
        return true;
    }
    s.chars().any(|c| {
        matches!(c, ':' | '"' | '\\' | '[' | ']' | '{' | '}')
            || c.is_ascii_control()
            || c == active
            || c == document
    })
}

/// Appends `s` to `out` in quoted-escaped form.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}

/// Appends a string value to `out`, bare when safe and quoted otherwise.
pub(crate) fn write_string(out: &mut String, s: &str, active: char, document: char) {
    if needs_quoting(s, active, document) {
        write_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

/// Appends an object key to `out`.
///
/// Identifier keys are written bare. `protect_dotted` additionally quotes
/// identifier keys containing `.`; the encoder sets it while key folding is
/// active so that a literal dotted key cannot be mistaken for a folded one
/// by a path-expanding decoder.
pub(crate) fn write_key(out: &mut String, key: &str, protect_dotted: bool) {
    if is_identifier(key) && !(protect_dotted && key.contains('.')) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

/// `^[A-Za-z_][A-Za-z0-9_.]*$` — keys that may appear unquoted.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// `^[A-Za-z_][A-Za-z0-9_]*$` — a single path segment eligible for key
/// folding. Unlike [`is_identifier`], dots are not allowed: the encoder only
/// ever introduces dots itself.
pub(crate) fn is_foldable_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the byte index of the first `:` that is neither inside a quoted
/// region nor preceded by a backslash.
pub(crate) fn split_colon(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'"' => in_quotes = !in_quotes,
            b':' if !in_quotes => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits `s` on `delim`, honouring quoted regions and escapes. The returned
/// slices are raw (untrimmed) cell texts; an empty input yields one empty
/// cell.
pub(crate) fn split_cells(s: &str, delim: char) -> Vec<&str> {
    let delim = delim as u8;
    let bytes = s.as_bytes();
    let mut cells = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'"' => in_quotes = !in_quotes,
            b if b == delim && !in_quotes => {
                cells.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    cells.push(&s[start..]);
    cells
}
