//! Format-level conformance tests: the documented behaviour of every array
//! shape, the strict-mode failure surface, and the option-dependent features
//! (delimiters, key folding, path expansion).

use toon_codec::{
    decode, decode_with_options, encode, encode_with_options, toon, Delimiter, KeyFolding,
    PathExpansion, ToonOptions, Value,
};

#[test]
fn inline_array_decodes_to_typed_elements() {
    let value = decode("items[3]: 1,2,3\n").unwrap();
    assert_eq!(value, toon!({ "items": [1, 2, 3] }));
}

#[test]
fn tabular_array_decodes_to_uniform_objects() {
    let value = decode("users[2]{id,name}:\n  1,Alice\n  2,Bob\n").unwrap();
    assert_eq!(
        value,
        toon!({ "users": [
            { "id": 1, "name": "Alice" },
            { "id": 2, "name": "Bob" }
        ] })
    );
}

#[test]
fn strict_inline_count_mismatch_errors() {
    let err = decode("items[3]: 1,2\n").unwrap_err();
    assert!(
        err.to_string().contains("Inline array length mismatch"),
        "unexpected message: {err}"
    );
    assert!(err.to_string().contains("Header declared 3, found 2."));
}

#[test]
fn path_expansion_builds_nested_objects() {
    let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
    let value =
        decode_with_options("server.port: 8080\nserver.host: localhost\n", &options).unwrap();
    assert_eq!(
        value,
        toon!({ "server": { "port": 8080, "host": "localhost" } })
    );
}

#[test]
fn key_folding_produces_dotted_keys() {
    let options = ToonOptions::new().with_key_folding(KeyFolding::Safe);
    let value = toon!({ "a": { "b": { "c": 1 } } });
    assert_eq!(encode_with_options(&value, &options), "a.b.c: 1\n");
}

#[test]
fn flatten_depth_limits_folding() {
    let options = ToonOptions::new()
        .with_key_folding(KeyFolding::Safe)
        .with_flatten_depth(2);
    let value = toon!({ "a": { "b": { "c": 1 } } });
    assert_eq!(encode_with_options(&value, &options), "a.b:\n  c: 1\n");
}

#[test]
fn pipe_delimiter_scopes_quoting() {
    let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
    let value = decode_with_options("[2|]: Hello, World|Coordinates: 1,2\n", &options).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::from("Hello, World"),
            Value::from("Coordinates: 1,2"),
        ])
    );
}

#[test]
fn leading_zero_token_stays_a_string() {
    assert_eq!(decode("0123").unwrap(), Value::from("0123"));
    assert_eq!(decode("-0123").unwrap(), Value::from("-0123"));
    // A lone zero and 0.x forms are real numbers.
    assert_eq!(decode("0").unwrap(), Value::Int(0));
    assert_eq!(decode("0.5").unwrap(), Value::Float(0.5));
}

// --- strict-mode failure surface ---

#[test]
fn strict_rejects_irregular_indentation() {
    let err = decode("a:\n   b: 1\n").unwrap_err();
    assert!(err.to_string().contains("Invalid indentation"));
    assert_eq!(err.line(), 2);

    let err = decode("a:\n\tb: 1\n").unwrap_err();
    assert!(err.to_string().contains("Invalid indentation"));
}

#[test]
fn strict_rejects_missing_colon() {
    let err = decode("a: 1\nnot a field\n").unwrap_err();
    assert!(err.to_string().contains("Missing colon after key."));
    assert_eq!(err.line(), 2);
}

#[test]
fn strict_rejects_tabular_count_mismatch() {
    let err = decode("rows[3]{a,b}:\n  1,2\n  3,4\n").unwrap_err();
    assert!(err
        .to_string()
        .contains("Tabular array length mismatch. Header declared 3, found 2."));
}

#[test]
fn strict_rejects_list_count_mismatch() {
    let err = decode("items[1]:\n  - a\n  - b\n").unwrap_err();
    assert!(err
        .to_string()
        .contains("List array length mismatch. Header declared 1, found 2."));
}

#[test]
fn strict_rejects_row_width_mismatch() {
    let err = decode("rows[1]{a,b,c}:\n  1,2\n").unwrap_err();
    assert!(err.to_string().contains("Tabular row width mismatch"));
    assert_eq!(err.line(), 2);
}

#[test]
fn strict_rejects_unprefixed_list_item() {
    let err = decode("items[1]:\n  plain\n").unwrap_err();
    assert!(err.to_string().contains("Array item must start with '- '"));
}

#[test]
fn strict_rejects_blank_line_between_items() {
    let err = decode("items[2]:\n  - a\n\n  - b\n").unwrap_err();
    assert!(err.to_string().contains("Blank line inside array"));
}

#[test]
fn strict_rejects_bad_escapes_and_open_strings() {
    let err = decode("a: \"x\\q\"\n").unwrap_err();
    assert!(err.to_string().contains("Invalid escape sequence"));

    let err = decode("a: \"open\n").unwrap_err();
    assert!(err.to_string().contains("Unterminated string"));
}

#[test]
fn strict_rejects_expansion_conflicts_both_directions() {
    let options = ToonOptions::new().with_expand_paths(PathExpansion::Safe);
    let err = decode_with_options("a: 1\na.b: 2\n", &options).unwrap_err();
    assert!(err
        .to_string()
        .contains("Expansion conflict at path 'a' (object vs primitive)"));

    let err = decode_with_options("a.b: 2\na: 1\n", &options).unwrap_err();
    assert!(err.to_string().contains("Expansion conflict at path 'a'"));
}

// --- non-strict recovery ---

#[test]
fn lenient_counts_and_widths() {
    let options = ToonOptions::new().with_strict(false);

    let value = decode_with_options("items[9]: 1,2\n", &options).unwrap();
    assert_eq!(value, toon!({ "items": [1, 2] }));

    let value = decode_with_options("rows[1]{a,b}:\n  1\n", &options).unwrap();
    assert_eq!(value, toon!({ "rows": [{ "a": 1, "b": null }] }));

    let value = decode_with_options("rows[1]{a}:\n  1,2,3\n", &options).unwrap();
    assert_eq!(value, toon!({ "rows": [{ "a": 1 }] }));
}

#[test]
fn lenient_expansion_conflict_overwrites() {
    let options = ToonOptions::new()
        .with_expand_paths(PathExpansion::Safe)
        .with_strict(false);
    let value = decode_with_options("a: 1\na.b: 2\n", &options).unwrap();
    assert_eq!(value, toon!({ "a": { "b": 2 } }));
}

#[test]
fn lenient_multi_line_root_falls_back_to_first_primitive() {
    let options = ToonOptions::new().with_strict(false);
    let value = decode_with_options("first\nsecond\n", &options).unwrap();
    assert_eq!(value, Value::from("first"));
}

// --- layout details ---

#[test]
fn header_count_always_matches_encoded_length() {
    for n in 0..5usize {
        let arr = Value::Array((0..n as i64).map(Value::Int).collect());
        let out = encode(&toon!({ "xs": (arr) }));
        if n == 0 {
            assert_eq!(out, "xs[0]:\n");
        } else {
            assert!(out.starts_with(&format!("xs[{}]: ", n)), "got: {out}");
        }
    }
}

#[test]
fn trailing_blank_lines_after_arrays_are_padding() {
    let value = decode("items[1]:\n  - a\n\n\nnext: ok\n").unwrap();
    assert_eq!(value, toon!({ "items": ["a"], "next": "ok" }));
}

#[test]
fn tab_delimited_documents_round_trip() {
    let options = ToonOptions::new().with_delimiter(Delimiter::Tab);
    let value = toon!({ "t": [{ "a": "x", "b": "y,z" }], "i": [1, 2] });
    let text = encode_with_options(&value, &options);
    assert_eq!(text, "t[1\t]{a\tb}:\n  x\ty,z\ni[2\t]: 1\t2\n");
    assert_eq!(decode_with_options(&text, &options).unwrap(), value);
}

#[test]
fn crlf_input_is_accepted() {
    let value = decode("a: 1\r\nb:\r\n  c: 2\r\n").unwrap();
    assert_eq!(value, toon!({ "a": 1, "b": { "c": 2 } }));
}

#[test]
fn keyed_root_header_starts_an_object() {
    let value = decode("users[1]{id}:\n  7\ncount: 1\n").unwrap();
    assert_eq!(value, toon!({ "users": [{ "id": 7 }], "count": 1 }));
}

#[test]
fn root_array_with_trailing_content_is_strict_error() {
    let err = decode("[2]: 1,2\nextra: 1\n").unwrap_err();
    assert!(err.to_string().contains("Unexpected content"));
}
