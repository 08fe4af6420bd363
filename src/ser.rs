//! TOON encoding.
//!
//! This module walks a [`Value`] tree and writes the canonical TOON document
//! for it. The encoder is total: any in-domain tree encodes successfully
//! (non-finite floats normalise to `null`), and the output always ends with
//! a newline.
//!
//! Array shape selection, in order of preference:
//!
//! 1. **Tabular** — every element is an object with the same keys in the
//!    same order and only primitive values: `key[N]{f1,f2}:` plus one row
//!    per element.
//! 2. **Inline** — every element is a primitive: `key[N]: v1,v2` on one line.
//! 3. **Expanded list** — anything else: `key[N]:` plus one `- item` line
//!    per element.
//!
//! With `key_folding = safe`, chains of single-child objects collapse into
//! dotted keys (`a.b.c: 1`), bounded by `flatten_depth` and guarded against
//! sibling-key collisions.

use crate::options::{Delimiter, KeyFolding};
use crate::scalar;
use crate::{ToonMap, ToonOptions, Value};

/// Encodes a value tree with the given options.
pub(crate) fn encode_document(value: &Value, options: &ToonOptions) -> String {
    let mut encoder = Encoder {
        out: String::with_capacity(256),
        delimiter: options.delimiter.as_char(),
        options,
    };
    match value {
        Value::Object(map) => encoder.write_fields(map, 0),
        Value::Array(arr) => {
            encoder.write_indent(0);
            encoder.write_array(arr, 0);
        }
        primitive => {
            encoder.write_primitive(primitive);
            encoder.out.push('\n');
        }
    }
    encoder.out
}

struct Encoder<'o> {
    out: String,
    delimiter: char,
    options: &'o ToonOptions,
}

impl Encoder<'_> {
    fn folding(&self) -> bool {
        self.options.key_folding == KeyFolding::Safe
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
    }

    fn write_key(&mut self, key: &str) {
        let folding = self.folding();
        scalar::write_key(&mut self.out, key, folding);
    }

    fn write_primitive(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => self.out.push_str(&scalar::format_int(*i)),
            Value::Float(f) => self.out.push_str(&scalar::format_float(*f)),
            Value::String(s) => {
                scalar::write_string(&mut self.out, s, self.delimiter, self.delimiter)
            }
            // Containers never reach primitive position.
            Value::Array(_) | Value::Object(_) => self.out.push_str("null"),
        }
    }

    /// Emits every field of `map` at `depth`, applying key folding when
    /// enabled.
    fn write_fields(&mut self, map: &ToonMap, depth: usize) {
        for (key, value) in map.iter() {
            if let Some((prefix, leaf)) = self.fold_chain(key, value, map) {
                self.write_indent(depth);
                self.out.push_str(&prefix);
                self.write_field_value(leaf, depth);
            } else {
                self.write_indent(depth);
                self.write_key(key);
                self.write_field_value(value, depth);
            }
        }
    }

    /// Emits the `: value` part of a field line (including the array header
    /// forms) and any nested block below it.
    fn write_field_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Object(map) if map.is_empty() => {
                self.out.push_str(":\n");
            }
            Value::Object(map) => {
                self.out.push_str(":\n");
                self.write_fields(map, depth + 1);
            }
            Value::Array(arr) => {
                self.write_array(arr, depth);
            }
            primitive => {
                self.out.push_str(": ");
                self.write_primitive(primitive);
                self.out.push('\n');
            }
        }
    }

    /// Attempts to fold `key` and a chain of single-child objects below it
    /// into one dotted key. Returns the folded prefix and the value left at
    /// the end of the chain, or `None` when folding does not apply.
    fn fold_chain<'v>(
        &self,
        key: &str,
        value: &'v Value,
        siblings: &ToonMap,
    ) -> Option<(String, &'v Value)> {
        if !self.folding() || !scalar::is_foldable_segment(key) {
            return None;
        }
        let Value::Object(map) = value else {
            return None;
        };
        if map.is_empty() {
            return None;
        }
        let guard = format!("{}.", key);
        if siblings.keys().any(|k| k != key && k.starts_with(&guard)) {
            return None;
        }

        let mut prefix = key.to_string();
        let mut segments = 1usize;
        let mut leaf = value;
        while let Value::Object(current) = leaf {
            if current.len() != 1 || segments + 1 > self.options.flatten_depth {
                break;
            }
            // The single entry of a single-child object.
            let Some((child_key, child_value)) = current.iter().next() else {
                break;
            };
            if !scalar::is_foldable_segment(child_key) {
                break;
            }
            prefix.push('.');
            prefix.push_str(child_key);
            segments += 1;
            leaf = child_value;
        }
        if segments < 2 {
            return None;
        }
        Some((prefix, leaf))
    }

    /// Emits an array from its `[` onward. `header_depth` is the depth of
    /// the line the header sits on; the body, if any, is one level deeper.
    fn write_array(&mut self, arr: &[Value], header_depth: usize) {
        if arr.is_empty() {
            self.out.push_str("[0]:\n");
            return;
        }
        if let Some(fields) = tabular_fields(arr) {
            self.write_tabular(arr, &fields, header_depth);
            return;
        }
        if arr.iter().all(Value::is_primitive) {
            self.write_inline(arr);
            return;
        }
        self.write_count_header(arr.len());
        self.out.push_str(":\n");
        self.write_list_items(arr, header_depth);
    }

    /// `[N]` or `[N|]` / `[N\t]` when the delimiter is not the comma.
    fn write_count_header(&mut self, count: usize) {
        self.out.push('[');
        self.out.push_str(&count.to_string());
        if self.options.delimiter != Delimiter::Comma {
            self.out.push(self.delimiter);
        }
        self.out.push(']');
    }

    fn write_inline(&mut self, arr: &[Value]) {
        self.write_count_header(arr.len());
        self.out.push_str(": ");
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(self.delimiter);
            }
            self.write_primitive(value);
        }
        self.out.push('\n');
    }

    fn write_tabular(&mut self, arr: &[Value], fields: &[String], header_depth: usize) {
        self.write_count_header(arr.len());
        self.out.push('{');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.push(self.delimiter);
            }
            self.write_key(field);
        }
        self.out.push_str("}:\n");
        for row in arr {
            self.write_indent(header_depth + 1);
            if let Value::Object(map) = row {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push(self.delimiter);
                    }
                    match map.get(field) {
                        Some(cell) => self.write_primitive(cell),
                        None => self.out.push_str("null"),
                    }
                }
            }
            self.out.push('\n');
        }
    }

    fn write_list_items(&mut self, arr: &[Value], header_depth: usize) {
        let item_depth = header_depth + 1;
        for item in arr {
            self.write_indent(item_depth);
            match item {
                Value::Object(map) if map.is_empty() => {
                    self.out.push_str("-\n");
                }
                Value::Object(map) => {
                    self.out.push_str("- ");
                    self.write_item_object(map, item_depth);
                }
                Value::Array(inner) => {
                    self.out.push_str("- ");
                    self.write_array(inner, item_depth);
                }
                primitive => {
                    self.out.push_str("- ");
                    self.write_primitive(primitive);
                    self.out.push('\n');
                }
            }
        }
    }

    /// Emits a list-item object: the first field rides on the hyphen line,
    /// the remaining fields align one level deeper.
    fn write_item_object(&mut self, map: &ToonMap, item_depth: usize) {
        let field_depth = item_depth + 1;
        let mut rest = map.iter();
        // Non-empty by the caller's match arm.
        if let Some((first_key, first_value)) = rest.next() {
            self.write_key(first_key);
            match first_value {
                Value::Object(child) if child.is_empty() => {
                    self.out.push_str(":\n");
                }
                Value::Object(child) => {
                    self.out.push_str(":\n");
                    self.write_fields(child, field_depth + 1);
                }
                // The array body shares the sibling-field depth; tabular
                // rows and nested items land one level under the hyphen.
                Value::Array(arr) => {
                    self.write_array(arr, item_depth);
                }
                primitive => {
                    self.out.push_str(": ");
                    self.write_primitive(primitive);
                    self.out.push('\n');
                }
            }
        }
        let remaining: ToonMap = rest.map(|(k, v)| (k.clone(), v.clone())).collect();
        self.write_fields(&remaining, field_depth);
    }
}

/// Detects tabular eligibility: every element is an object with the same
/// keys in the same insertion order, and every value is primitive.
fn tabular_fields(arr: &[Value]) -> Option<Vec<String>> {
    let first = arr.first()?.as_object()?;
    if first.is_empty() {
        return None;
    }
    if !first.values().all(Value::is_primitive) {
        return None;
    }
    let fields: Vec<String> = first.keys().cloned().collect();
    for item in &arr[1..] {
        let map = item.as_object()?;
        if map.len() != fields.len() {
            return None;
        }
        for (key, field) in map.keys().zip(&fields) {
            if key != field {
                return None;
            }
        }
        if !map.values().all(Value::is_primitive) {
            return None;
        }
    }
    Some(fields)
}
