//! TOON decoding.
//!
//! This module parses a TOON document into a [`Value`] tree. Parsing is a
//! recursive descent over the depth-indexed line stream produced by
//! [`crate::lines`]:
//!
//! - The root form is discriminated first: bare array header, keyed header,
//!   object, or a single primitive line.
//! - Objects are sequences of `key: value` lines at one depth; a deeper
//!   block after a bare `key:` is a nested object.
//! - Arrays come in three shapes, chosen by their header: inline primitive
//!   (`key[N]: v1,v2`), tabular (`key[N]{f1,f2}:` plus rows), and expanded
//!   list (`key[N]:` plus `- ` items).
//! - With `expand_paths = safe`, unquoted dotted keys expand into nested
//!   objects, deep-merging with siblings.
//!
//! Strict mode (the default) enforces every declared count, tabular row
//! width, indentation step, list item prefix, and escape sequence; see
//! [`crate::error`] for the failure surface.

use crate::error::{DecodeError, Result};
use crate::header::{Header, HeaderField};
use crate::lines::Frames;
use crate::options::PathExpansion;
use crate::scalar;
use crate::{ToonMap, ToonOptions, Value};

/// Decodes a whole document with the given options.
pub(crate) fn decode_document(input: &str, options: &ToonOptions) -> Result<Value> {
    let frames = Frames::frame(input, options)?;
    let mut decoder = Decoder { frames, options };
    decoder.parse_root()
}

struct Decoder<'o> {
    frames: Frames,
    options: &'o ToonOptions,
}

/// What a blank line inside an array body turned out to be.
enum BlankRun {
    /// More body follows; the blank sits between items.
    Interior,
    /// The array ends here; the blank is trailing padding.
    Terminates,
}

/// Where an array body sits relative to its surroundings.
///
/// An array introduced on a `- key[N]...:` hyphen line shares its body depth
/// with the item's sibling fields, so its rows are bounded by the declared
/// count (tabular) or by the `- ` prefix (list) instead of by depth alone.
#[derive(Clone, Copy, PartialEq)]
enum ArrayCtx {
    Field,
    HyphenFirstField,
}

impl Decoder<'_> {
    fn strict(&self) -> bool {
        self.options.strict
    }

    /// Root-form discrimination: bare array, keyed header / object, or a
    /// single primitive line.
    fn parse_root(&mut self) -> Result<Value> {
        self.frames.skip_blank();
        let Some(first) = self.frames.peek() else {
            return Ok(Value::Object(ToonMap::new()));
        };
        let first_depth = first.depth;
        let first_line = first.number;
        let content = first.content.clone();

        if self.strict() && first_depth != 0 {
            return Err(DecodeError::new(
                "Invalid indentation: document must start at depth 0",
                first_line,
            ));
        }

        if let Some(header) = Header::parse(&content, self.options.delimiter) {
            if header.key.is_none() {
                self.frames.advance();
                let array =
                    self.parse_array_body(&header, first_depth, first_line, ArrayCtx::Field)?;
                self.frames.skip_blank();
                if self.strict() {
                    if let Some(extra) = self.frames.peek() {
                        return Err(DecodeError::new(
                            "Unexpected content after root-level array",
                            extra.number,
                        ));
                    }
                }
                return Ok(array);
            }
            // Keyed header: the array is the first field of a root object.
            let map = self.parse_object(first_depth)?;
            return Ok(Value::Object(map));
        }

        if scalar::split_colon(&content).is_some() {
            let map = self.parse_object(first_depth)?;
            return Ok(Value::Object(map));
        }

        // Single primitive document.
        let mut non_blank = 0usize;
        let mut idx = 0usize;
        while let Some(frame) = self.frames.peek_ahead(idx) {
            if !frame.blank {
                non_blank += 1;
            }
            idx += 1;
        }
        if non_blank > 1 && self.strict() {
            return Err(DecodeError::new("Missing colon after key.", first_line));
        }
        scalar::parse_token(content.trim(), self.strict()).map_err(|e| e.at_line(first_line))
    }

    fn parse_object(&mut self, depth: usize) -> Result<ToonMap> {
        let mut map = ToonMap::new();
        self.parse_object_into(&mut map, depth)?;
        Ok(map)
    }

    /// Parses `key: value` lines at exactly `depth` into `map`, until the
    /// stream dedents or ends.
    fn parse_object_into(&mut self, map: &mut ToonMap, depth: usize) -> Result<()> {
        loop {
            self.frames.skip_blank();
            let Some(frame) = self.frames.peek() else {
                return Ok(());
            };
            if frame.depth < depth {
                return Ok(());
            }
            if frame.depth > depth && self.strict() {
                return Err(DecodeError::new(
                    format!(
                        "Invalid indentation: expected depth {}, found {}",
                        depth, frame.depth
                    ),
                    frame.number,
                ));
            }
            let line = frame.number;
            let content = frame.content.clone();
            self.frames.advance();

            if let Some(header) = Header::parse(&content, self.options.delimiter) {
                match header.key.clone() {
                    Some(key) => {
                        let array = self.parse_array_body(&header, depth, line, ArrayCtx::Field)?;
                        self.set_with_path(map, key, header.key_quoted, array, line)?;
                        continue;
                    }
                    None => {
                        return Err(DecodeError::new(
                            "Array header requires a key inside an object",
                            line,
                        ));
                    }
                }
            }

            let Some(colon) = scalar::split_colon(&content) else {
                if self.strict() {
                    return Err(DecodeError::new("Missing colon after key.", line));
                }
                continue;
            };
            let (key, key_quoted) = self.parse_key(content[..colon].trim(), line)?;
            let value_text = content[colon + 1..].trim();
            let value = if value_text.is_empty() {
                self.parse_nested_or_empty(depth)?
            } else {
                scalar::parse_token(value_text, self.strict()).map_err(|e| e.at_line(line))?
            };
            self.set_with_path(map, key, key_quoted, value, line)?;
        }
    }

    /// After a bare `key:`, a deeper block is a nested object; otherwise the
    /// value is the empty object.
    fn parse_nested_or_empty(&mut self, depth: usize) -> Result<Value> {
        match self.frames.peek_non_blank() {
            Some(next) if next.depth > depth => {
                let inner = self.parse_object(depth + 1)?;
                Ok(Value::Object(inner))
            }
            _ => Ok(Value::Object(ToonMap::new())),
        }
    }

    fn parse_key(&self, key_text: &str, line: usize) -> Result<(String, bool)> {
        if key_text.starts_with('"') {
            let (key, consumed) =
                scalar::parse_quoted(key_text, self.strict()).map_err(|e| e.at_line(line))?;
            if consumed != key_text.len() && self.strict() {
                return Err(DecodeError::new(
                    "Unexpected characters after quoted key",
                    line,
                ));
            }
            Ok((key, true))
        } else {
            Ok((key_text.to_string(), false))
        }
    }

    /// Parses the body of an array whose header line (at `header_depth`) has
    /// already been consumed. Dispatches on the header shape.
    fn parse_array_body(
        &mut self,
        header: &Header,
        header_depth: usize,
        header_line: usize,
        ctx: ArrayCtx,
    ) -> Result<Value> {
        if let Some(inline) = &header.inline {
            return self.parse_inline_array(header, inline, header_line);
        }
        if let Some(fields) = &header.fields {
            return self.parse_tabular_array(header, fields, header_depth, header_line, ctx);
        }
        self.parse_list_array(header, header_depth, header_line, ctx)
    }

    fn parse_inline_array(
        &mut self,
        header: &Header,
        inline: &str,
        header_line: usize,
    ) -> Result<Value> {
        let mut values = Vec::new();
        for cell in scalar::split_cells(inline, header.delimiter) {
            let value = scalar::parse_token(cell.trim(), self.strict())
                .map_err(|e| e.at_line(header_line))?;
            values.push(value);
        }
        if self.strict() && values.len() != header.count {
            return Err(DecodeError::new(
                format!(
                    "Inline array length mismatch. Header declared {}, found {}.",
                    header.count,
                    values.len()
                ),
                header_line,
            ));
        }
        Ok(Value::Array(values))
    }

    fn parse_tabular_array(
        &mut self,
        header: &Header,
        fields: &[HeaderField],
        header_depth: usize,
        header_line: usize,
        ctx: ArrayCtx,
    ) -> Result<Value> {
        let body_depth = header_depth + 1;
        let mut rows = Vec::new();
        loop {
            // On a hyphen line the rows share their depth with the item's
            // sibling fields; the declared count bounds them.
            if ctx == ArrayCtx::HyphenFirstField && rows.len() == header.count {
                break;
            }
            let Some(frame) = self.frames.peek() else {
                break;
            };
            if frame.blank {
                match self.classify_blank(body_depth, !rows.is_empty())? {
                    BlankRun::Interior => continue,
                    BlankRun::Terminates => break,
                }
            }
            if frame.depth < body_depth {
                break;
            }
            if frame.depth > body_depth && self.strict() {
                return Err(DecodeError::new(
                    format!(
                        "Invalid indentation: expected depth {}, found {}",
                        body_depth, frame.depth
                    ),
                    frame.number,
                ));
            }
            let line = frame.number;
            let content = frame.content.clone();
            self.frames.advance();
            rows.push(self.parse_tabular_row(&content, fields, header.delimiter, line)?);
        }
        if self.strict() && rows.len() != header.count {
            return Err(DecodeError::new(
                format!(
                    "Tabular array length mismatch. Header declared {}, found {}.",
                    header.count,
                    rows.len()
                ),
                header_line,
            ));
        }
        Ok(Value::Array(rows))
    }

    fn parse_tabular_row(
        &mut self,
        content: &str,
        fields: &[HeaderField],
        delimiter: char,
        line: usize,
    ) -> Result<Value> {
        let cells = scalar::split_cells(content, delimiter);
        if self.strict() && cells.len() != fields.len() {
            return Err(DecodeError::new(
                format!(
                    "Tabular row width mismatch: header has {} fields, row has {}",
                    fields.len(),
                    cells.len()
                ),
                line,
            ));
        }
        let mut row = ToonMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            // Short rows pad with null in lenient mode; extra cells drop.
            let value = match cells.get(i) {
                Some(cell) => {
                    scalar::parse_token(cell.trim(), self.strict()).map_err(|e| e.at_line(line))?
                }
                None => Value::Null,
            };
            self.set_with_path(&mut row, field.name.clone(), field.quoted, value, line)?;
        }
        Ok(Value::Object(row))
    }

    fn parse_list_array(
        &mut self,
        header: &Header,
        header_depth: usize,
        header_line: usize,
        ctx: ArrayCtx,
    ) -> Result<Value> {
        let body_depth = header_depth + 1;
        let mut items = Vec::new();
        loop {
            let Some(frame) = self.frames.peek() else {
                break;
            };
            if frame.blank {
                match self.classify_blank(body_depth, !items.is_empty())? {
                    BlankRun::Interior => continue,
                    BlankRun::Terminates => break,
                }
            }
            if frame.depth < body_depth {
                break;
            }
            if frame.depth > body_depth {
                if self.strict() {
                    return Err(DecodeError::new(
                        format!(
                            "Invalid indentation: expected depth {}, found {}",
                            body_depth, frame.depth
                        ),
                        frame.number,
                    ));
                }
                self.frames.advance();
                continue;
            }
            let line = frame.number;
            let content = frame.content.clone();
            let item_text = if let Some(rest) = content.strip_prefix("- ") {
                rest.to_string()
            } else if content == "-" {
                String::new()
            } else {
                // On a hyphen line the item depth doubles as the sibling
                // field depth, so a keyed line ends the array.
                if ctx == ArrayCtx::HyphenFirstField {
                    break;
                }
                if self.strict() {
                    return Err(DecodeError::new("Array item must start with '- '", line));
                }
                break;
            };
            self.frames.advance();
            items.push(self.parse_list_item(item_text.trim(), body_depth, line)?);
        }
        if self.strict() && items.len() != header.count {
            return Err(DecodeError::new(
                format!(
                    "List array length mismatch. Header declared {}, found {}.",
                    header.count,
                    items.len()
                ),
                header_line,
            ));
        }
        Ok(Value::Array(items))
    }

    /// Interprets the text after a `- ` marker. `item_depth` is the depth of
    /// the hyphen line itself; an item object's fields live one level deeper.
    fn parse_list_item(&mut self, text: &str, item_depth: usize, line: usize) -> Result<Value> {
        let field_depth = item_depth + 1;

        if text.is_empty() {
            return match self.frames.peek_non_blank() {
                Some(next) if next.depth >= field_depth => {
                    let inner = self.parse_object(field_depth)?;
                    Ok(Value::Object(inner))
                }
                _ => Ok(Value::Object(ToonMap::new())),
            };
        }

        if let Some(header) = Header::parse(text, self.options.delimiter) {
            match header.key.clone() {
                // `- [N]...:` — a nested array is itself the item.
                None => {
                    return self.parse_array_body(&header, item_depth, line, ArrayCtx::Field)
                }
                // `- key[N]...:` — an object whose first field is the array;
                // the array body and any sibling fields share `field_depth`.
                Some(key) => {
                    let array =
                        self.parse_array_body(&header, item_depth, line, ArrayCtx::HyphenFirstField)?;
                    let mut map = ToonMap::new();
                    self.set_with_path(&mut map, key, header.key_quoted, array, line)?;
                    self.parse_object_into(&mut map, field_depth)?;
                    return Ok(Value::Object(map));
                }
            }
        }

        if let Some(colon) = scalar::split_colon(text) {
            let (key, key_quoted) = self.parse_key(text[..colon].trim(), line)?;
            let value_text = text[colon + 1..].trim();
            let value = if value_text.is_empty() {
                self.parse_nested_or_empty(field_depth)?
            } else {
                scalar::parse_token(value_text, self.strict()).map_err(|e| e.at_line(line))?
            };
            let mut map = ToonMap::new();
            self.set_with_path(&mut map, key, key_quoted, value, line)?;
            self.parse_object_into(&mut map, field_depth)?;
            return Ok(Value::Object(map));
        }

        scalar::parse_token(text, self.strict()).map_err(|e| e.at_line(line))
    }

    /// Decides whether a blank line inside an array body separates items (a
    /// strict-mode violation once at least one item has been read) or pads
    /// the end of the array. Interior blanks are consumed; terminating
    /// blanks are left for the enclosing scope.
    fn classify_blank(&mut self, body_depth: usize, between_items: bool) -> Result<BlankRun> {
        let blank_line = self.frames.current_line();
        match self.frames.peek_non_blank() {
            Some(next) if next.depth >= body_depth => {
                if self.strict() && between_items {
                    return Err(DecodeError::new("Blank line inside array", blank_line));
                }
                self.frames.advance();
                Ok(BlankRun::Interior)
            }
            _ => Ok(BlankRun::Terminates),
        }
    }

    /// Assigns `key = value` into `map`, expanding dotted paths when the
    /// options ask for it and the key qualifies. Collisions follow the
    /// deep-merge rule: object meets object merges, anything else is
    /// replaced by the newcomer (a strict-mode error during expansion).
    fn set_with_path(
        &self,
        map: &mut ToonMap,
        key: String,
        was_quoted: bool,
        value: Value,
        line: usize,
    ) -> Result<()> {
        let expanding = self.options.expand_paths == PathExpansion::Safe;
        let expandable = expanding
            && !was_quoted
            && key.contains('.')
            && scalar::is_identifier(&key)
            && !key.split('.').any(str::is_empty);
        if !expandable {
            // Under expansion, a plain key may still collide with a subtree
            // that a dotted sibling built; that conflicts in strict mode too.
            if expanding && self.strict() {
                if let Some(old) = map.get(&key) {
                    if matches!(old, Value::Object(_)) != value.is_object() {
                        return Err(DecodeError::new(
                            format!(
                                "Expansion conflict at path '{}' (object vs primitive)",
                                key
                            ),
                            line,
                        ));
                    }
                }
            }
            merge_entry(map, key, value);
            return Ok(());
        }
        let segments: Vec<&str> = key.split('.').collect();
        self.assign_path(map, &segments, 0, value, line)
    }

    fn assign_path(
        &self,
        map: &mut ToonMap,
        segments: &[&str],
        index: usize,
        value: Value,
        line: usize,
    ) -> Result<()> {
        let seg = segments[index];
        let existing_is_object = matches!(map.get(seg), Some(Value::Object(_)));

        if index == segments.len() - 1 {
            if !map.contains_key(seg) {
                map.insert(seg.to_string(), value);
            } else if existing_is_object && value.is_object() {
                if let (Some(Value::Object(existing)), Value::Object(incoming)) =
                    (map.get_mut(seg), value)
                {
                    deep_merge(existing, incoming);
                }
            } else {
                if self.strict() && existing_is_object != value.is_object() {
                    return Err(self.expansion_conflict(segments, index, line));
                }
                map.insert(seg.to_string(), value);
            }
            return Ok(());
        }

        if !existing_is_object {
            if self.strict() && map.contains_key(seg) {
                return Err(self.expansion_conflict(segments, index, line));
            }
            map.insert(seg.to_string(), Value::Object(ToonMap::new()));
        }
        if let Some(Value::Object(child)) = map.get_mut(seg) {
            self.assign_path(child, segments, index + 1, value, line)?;
        }
        Ok(())
    }

    fn expansion_conflict(&self, segments: &[&str], index: usize, line: usize) -> DecodeError {
        DecodeError::new(
            format!(
                "Expansion conflict at path '{}' (object vs primitive)",
                segments[..=index].join(".")
            ),
            line,
        )
    }
}

/// Plain (non-expanded) assignment: object meets object merges, anything
/// else is replaced with the key keeping its original position.
fn merge_entry(map: &mut ToonMap, key: String, value: Value) {
    match (map.get_mut(&key), value) {
        (Some(Value::Object(existing)), Value::Object(incoming)) => {
            deep_merge(existing, incoming);
        }
        (_, value) => {
            map.insert(key, value);
        }
    }
}

/// Recursive merge: matching object fields merge, everything else is taken
/// from the incoming side.
fn deep_merge(dst: &mut ToonMap, src: ToonMap) {
    for (key, value) in src {
        match (dst.get_mut(&key), value) {
            (Some(Value::Object(d)), Value::Object(s)) => deep_merge(d, s),
            (_, value) => {
                dst.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PathExpansion;

    fn decode(input: &str) -> Value {
        decode_document(input, &ToonOptions::default()).unwrap()
    }

    fn decode_err(input: &str) -> DecodeError {
        decode_document(input, &ToonOptions::default()).unwrap_err()
    }

    #[test]
    fn flat_object() {
        let value = decode("name: Alice\nage: 30\nactive: true\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("Alice")));
        assert_eq!(obj.get("age"), Some(&Value::Int(30)));
        assert_eq!(obj.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn nested_object() {
        let value = decode("user:\n  name: Alice\n  meta:\n    ok: true\n");
        let user = value.as_object().unwrap().get("user").unwrap();
        let meta = user.as_object().unwrap().get("meta").unwrap();
        assert_eq!(meta.as_object().unwrap().get("ok"), Some(&Value::Bool(true)));
    }

    #[test]
    fn empty_value_is_empty_object() {
        let value = decode("config:\nnext: 1\n");
        let config = value.as_object().unwrap().get("config").unwrap();
        assert_eq!(config, &Value::Object(ToonMap::new()));
    }

    #[test]
    fn root_forms() {
        assert_eq!(decode("[3]: 1,2,3\n"), Value::Array(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3)
        ]));
        assert_eq!(decode("42\n"), Value::Int(42));
        assert_eq!(decode("hello world\n"), Value::from("hello world"));
        assert_eq!(decode(""), Value::Object(ToonMap::new()));
        assert_eq!(decode("[0]:\n"), Value::Array(vec![]));
    }

    #[test]
    fn root_primitive_rejects_siblings_in_strict() {
        let err = decode_err("no colon\nstill none\n");
        assert!(err.to_string().contains("Missing colon after key."));
    }

    #[test]
    fn tabular_rows() {
        let value = decode("users[2]{id,name}:\n  1,Alice\n  2,Bob\n");
        let users = value.as_object().unwrap().get("users").unwrap();
        let rows = users.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let first = rows[0].as_object().unwrap();
        assert_eq!(first.get("id"), Some(&Value::Int(1)));
        assert_eq!(first.get("name"), Some(&Value::from("Alice")));
    }

    #[test]
    fn expanded_list_of_objects() {
        let value = decode("items[2]:\n  - name: a\n    n: 1\n  - name: b\n    n: 2\n");
        let items = value.as_object().unwrap().get("items").unwrap();
        let arr = items.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        let second = arr[1].as_object().unwrap();
        assert_eq!(second.get("name"), Some(&Value::from("b")));
        assert_eq!(second.get("n"), Some(&Value::Int(2)));
    }

    #[test]
    fn list_of_primitives_and_nested_arrays() {
        let value = decode("items[3]:\n  - one\n  - [2]: 1,2\n  - 3\n");
        let arr = value.as_object().unwrap().get("items").unwrap();
        let arr = arr.as_array().unwrap();
        assert_eq!(arr[0], Value::from("one"));
        assert_eq!(arr[1], Value::Array(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(arr[2], Value::Int(3));
    }

    #[test]
    fn hyphen_keyed_tabular_with_siblings() {
        let input = "groups[1]:\n  - users[2]{id,name}:\n    1,a\n    2,b\n    total: 2\n";
        let value = decode(input);
        let groups = value.as_object().unwrap().get("groups").unwrap();
        let group = groups.as_array().unwrap()[0].as_object().unwrap();
        assert_eq!(group.get("users").unwrap().as_array().unwrap().len(), 2);
        assert_eq!(group.get("total"), Some(&Value::Int(2)));
    }

    #[test]
    fn strict_count_mismatches() {
        assert!(decode_err("items[3]: 1,2\n")
            .to_string()
            .contains("Inline array length mismatch. Header declared 3, found 2."));
        assert!(decode_err("t[3]{a}:\n  1\n  2\n")
            .to_string()
            .contains("Tabular array length mismatch. Header declared 3, found 2."));
        assert!(decode_err("l[2]:\n  - x\n")
            .to_string()
            .contains("List array length mismatch. Header declared 2, found 1."));
    }

    #[test]
    fn lenient_counts_take_actual() {
        let options = ToonOptions::new().with_strict(false);
        let value = decode_document("items[3]: 1,2\n", &options).unwrap();
        let items = value.as_object().unwrap().get("items").unwrap();
        assert_eq!(items.as_array().unwrap().len(), 2);
    }

    #[test]
    fn strict_row_width() {
        let err = decode_err("t[1]{a,b}:\n  1\n");
        assert!(err.to_string().contains("Tabular row width mismatch"));
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn lenient_row_width_pads_and_truncates() {
        let options = ToonOptions::new().with_strict(false);
        let value = decode_document("t[2]{a,b}:\n  1\n  1,2,3\n", &options).unwrap();
        let rows = value.as_object().unwrap().get("t").unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows[0].as_object().unwrap().get("b"), Some(&Value::Null));
        assert_eq!(rows[1].as_object().unwrap().len(), 2);
    }

    #[test]
    fn strict_list_prefix() {
        let err = decode_err("l[1]:\n  x\n");
        assert!(err.to_string().contains("Array item must start with '- '"));
    }

    #[test]
    fn blank_line_between_items_is_strict_error() {
        let err = decode_err("l[2]:\n  - a\n\n  - b\n");
        assert!(err.to_string().contains("Blank line inside array"));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn trailing_blank_terminates_array() {
        let value = decode("l[1]:\n  - a\n\nnext: 1\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("next"), Some(&Value::Int(1)));
    }

    #[test]
    fn dotted_keys_stay_flat_by_default() {
        let value = decode("server.port: 8080\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("server.port"), Some(&Value::Int(8080)));
    }

    #[test]
    fn dotted_keys_expand_when_enabled() {
        let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
        let value =
            decode_document("server.port: 8080\nserver.host: localhost\n", &options).unwrap();
        let server = value.as_object().unwrap().get("server").unwrap();
        let server = server.as_object().unwrap();
        assert_eq!(server.get("port"), Some(&Value::Int(8080)));
        assert_eq!(server.get("host"), Some(&Value::from("localhost")));
    }

    #[test]
    fn quoted_keys_never_expand() {
        let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
        let value = decode_document("\"server.port\": 8080\n", &options).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("server.port"), Some(&Value::Int(8080)));
    }

    #[test]
    fn expansion_conflict_is_strict_error() {
        let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
        let err = decode_document("a: 1\na.b: 2\n", &options).unwrap_err();
        assert!(err
            .to_string()
            .contains("Expansion conflict at path 'a' (object vs primitive)"));
    }

    #[test]
    fn expansion_conflict_lenient_overwrites() {
        let options = ToonOptions::new()
            .with_expand_paths(PathExpansion::Safe)
            .with_strict(false);
        let value = decode_document("a: 1\na.b: 2\n", &options).unwrap();
        let a = value.as_object().unwrap().get("a").unwrap();
        assert_eq!(a.as_object().unwrap().get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn duplicate_objects_deep_merge() {
        let value = decode("a:\n  x: 1\na:\n  y: 2\n");
        let a = value.as_object().unwrap().get("a").unwrap();
        let a = a.as_object().unwrap();
        assert_eq!(a.get("x"), Some(&Value::Int(1)));
        assert_eq!(a.get("y"), Some(&Value::Int(2)));
    }

    #[test]
    fn quoted_values_with_delimiters() {
        let value = decode("msg: \"a: b\"\nlist[2]: \"x,y\",z\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("msg"), Some(&Value::from("a: b")));
        let list = obj.get("list").unwrap().as_array().unwrap();
        assert_eq!(list[0], Value::from("x,y"));
        assert_eq!(list[1], Value::from("z"));
    }

    #[test]
    fn pipe_delimiter_scope() {
        let options = ToonOptions::new().with_delimiter(crate::Delimiter::Pipe);
        let value = decode_document("[2|]: Hello, World|Coordinates: 1,2\n", &options).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr[0], Value::from("Hello, World"));
        assert_eq!(arr[1], Value::from("Coordinates: 1,2"));
    }

    #[test]
    fn keyless_header_in_object_is_rejected() {
        let err = decode_err("a: 1\n[2]: 1,2\n");
        assert!(err.to_string().contains("Array header requires a key"));
    }

    #[test]
    fn empty_list_items() {
        let value = decode("l[2]:\n  - \n  - x: 1\n");
        let arr = value.as_object().unwrap().get("l").unwrap();
        let arr = arr.as_array().unwrap();
        assert_eq!(arr[0], Value::Object(ToonMap::new()));
        assert!(arr[1].is_object());
    }
}
