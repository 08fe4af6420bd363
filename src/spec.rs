//! TOON format reference
//!
//! This module documents the TOON dialect implemented by this crate
//! (specification version 3.0, see [`crate::spec_version`]). It is
//! documentation only and contains no code.
//!
//! # Data model
//!
//! A document denotes one **value** with exactly seven kinds: null, boolean,
//! integer (signed 64-bit), float (IEEE-754 double), string (UTF-8), array,
//! and object. Objects are ordered: field order in the document is field
//! order in memory, and vice versa. Integers and floats are distinct kinds —
//! `1` and `1.0` are different values, and `1.0` canonicalises to `1`.
//!
//! # Objects
//!
//! Objects are newline-delimited `key: value` pairs; nesting is expressed by
//! indentation (2 spaces per level by default):
//!
//! ```text
//! name: Alice
//! address:
//!   city: Berlin
//!   zip: "10115"
//! ```
//!
//! Keys matching `^[A-Za-z_][A-Za-z0-9_.]*$` may appear bare; all other keys
//! are quoted strings. A key line with nothing after the colon introduces a
//! nested object on the following, deeper lines — or the empty object if no
//! deeper lines follow.
//!
//! # Primitives
//!
//! | Kind    | Syntax                          | Example          |
//! |---------|---------------------------------|------------------|
//! | Null    | `null`                          | `value: null`    |
//! | Boolean | `true` / `false`                | `active: true`   |
//! | Integer | decimal digits, optional `-`    | `count: 42`      |
//! | Float   | fraction and/or exponent        | `price: 19.99`   |
//! | String  | bare or `"quoted"`              | `name: Alice`    |
//!
//! Unquoted tokens decode by precedence: a leading-zero form such as `0123`
//! is a **string**; otherwise a token with neither fraction nor exponent
//! that parses as an integer is an **integer**; otherwise a token matching
//! `-?\d+(\.\d+)?([eE][+-]?\d+)?` with a finite value is a **float**;
//! anything else is a string.
//!
//! Numbers canonicalise on encode: shortest decimal form, no exponent, no
//! trailing fractional zeros, `-0` becomes `0`, and non-finite floats become
//! `null`.
//!
//! # Strings and quoting
//!
//! Strings are bare by default and quoted only when required, which is when
//! the string:
//!
//! - is empty, or starts or ends with whitespace
//! - equals `true`, `false`, or `null`
//! - looks numeric (including leading-zero forms like `05`)
//! - starts with `-`
//! - contains `:`, `"`, `\`, `[`, `]`, `{`, `}`, or an ASCII control byte
//! - contains the active delimiter or the document delimiter
//!
//! Inside quotes exactly five escapes exist: `\\`, `\"`, `\n`, `\r`, `\t`.
//! Strict decoding rejects any other escape and unterminated quotes.
//!
//! # Arrays
//!
//! Every array is introduced by a header `key?[N(delim)?]{fields?}:` where
//! `N` is the element count, `delim` is an optional `\t` or `|` override of
//! the document delimiter, and `{fields}` marks the tabular form. Three
//! shapes exist:
//!
//! **Inline** — all elements primitive, on the header line:
//!
//! ```text
//! tags[3]: reading,gaming,coding
//! ```
//!
//! **Tabular** — uniform objects with primitive fields, one row per element:
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! **Expanded list** — everything else, one `- ` item per element:
//!
//! ```text
//! items[2]:
//!   - name: Alice
//!     role: admin
//!   - [2]: 1,2
//! ```
//!
//! A list item that is an object carries its first field on the hyphen line;
//! the remaining fields align one level deeper. When that first field is
//! itself a tabular array, its header stays on the hyphen line and the rows
//! share the sibling-field column. The empty array is written `[0]:`.
//!
//! # Delimiters
//!
//! The document delimiter (comma by default) separates inline values,
//! tabular header fields, and row cells. Tab and pipe delimiters are marked
//! in the header so documents stay self-describing:
//!
//! ```text
//! [3|]: a|b|c
//! ```
//!
//! The delimiter in force inside an array (the **active delimiter**)
//! triggers quoting for cell values; a comma under a pipe delimiter needs no
//! quotes.
//!
//! # Dotted keys
//!
//! With `key_folding = safe`, the encoder collapses chains of single-child
//! objects into dotted keys, at most `flatten_depth` segments, and only when
//! each segment matches `^[A-Za-z_][A-Za-z0-9_]*$` and no sibling key
//! collides with the folded prefix:
//!
//! ```text
//! server.net.port: 8080
//! ```
//!
//! With `expand_paths = safe`, the decoder reverses this: unquoted dotted
//! keys expand into nested objects, deep-merging with siblings. Quoted keys
//! never expand, and the folding encoder quotes literal dotted keys so the
//! two features compose without ambiguity.
//!
//! # Strict mode
//!
//! Strict decoding (the default) rejects:
//!
//! - indentation not divisible by the configured width, or tabs in indents
//! - object lines without a colon
//! - declared counts that disagree with the actual element count
//! - tabular rows whose width differs from the header field list
//! - list body lines that do not start with `- `
//! - blank lines between array items
//! - unknown escapes and unterminated strings
//! - path expansion conflicts (object vs primitive at one path)
//!
//! Non-strict decoding accepts all of the above: actual counts win, short
//! rows pad with `null`, long rows truncate, indentation floor-divides, and
//! expansion conflicts resolve last-write-wins.
//!
//! # Document conventions
//!
//! Input accepts LF, CRLF, and CR line endings; output uses LF and ends with
//! a single trailing newline. The empty document decodes to the empty
//! object. Encoding is canonical: for a given value and options there is
//! exactly one output document, and encode→decode→encode is byte-identical.

// This module contains only documentation; no implementation code
