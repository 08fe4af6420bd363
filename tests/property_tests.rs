//! Property-based tests over the full value domain.
//!
//! The generators stay inside the codec's supported domain: finite floats
//! only, and non-integral floats for round-trip comparisons (an integral
//! float canonicalises to its integer form by design).

use proptest::prelude::*;
use toon_codec::{
    decode_with_options, encode_with_options, KeyFolding, PathExpansion, ToonMap, ToonOptions,
    Value,
};

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        // Mostly well-behaved identifier keys.
        4 => "[a-z_][a-z0-9_]{0,6}",
        // Dotted identifier keys (exercise the folding/expansion guard).
        1 => "[a-z]{1,3}\\.[a-z]{1,3}",
        // Arbitrary keys, including ones that need quoting.
        1 => any::<String>(),
    ]
}

fn arb_float() -> impl Strategy<Value = f64> {
    // Finite and non-integral, so the value is its own canonical kind.
    any::<f64>().prop_filter("finite, non-integral", |f| {
        f.is_finite() && f.fract() != 0.0
    })
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        arb_float().prop_map(Value::Float),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| Value::Object(ToonMap::from_iter(entries))),
        ]
    })
}

fn check_round_trip(value: &Value, options: &ToonOptions) -> Result<(), TestCaseError> {
    let text = encode_with_options(value, options);
    let back = decode_with_options(&text, options)
        .map_err(|e| TestCaseError::fail(format!("decode failed: {e}\ndocument:\n{text}")))?;
    prop_assert_eq!(&back, value, "document was:\n{}", text);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn round_trip_default_options(value in arb_value()) {
        check_round_trip(&value, &ToonOptions::default())?;
    }

    #[test]
    fn round_trip_safe_folding_and_expansion(value in arb_value()) {
        let options = ToonOptions::new()
            .with_key_folding(KeyFolding::Safe)
            .with_expand_paths(PathExpansion::Safe);
        check_round_trip(&value, &options)?;
    }

    #[test]
    fn round_trip_all_delimiters(value in arb_value(), which in 0..3usize) {
        use toon_codec::Delimiter;
        let delimiter = [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe][which];
        let options = ToonOptions::new().with_delimiter(delimiter);
        check_round_trip(&value, &options)?;
    }

    #[test]
    fn canonical_form_is_idempotent(value in arb_value()) {
        let options = ToonOptions::default();
        let once = encode_with_options(&value, &options);
        let back = decode_with_options(&once, &options).unwrap();
        let twice = encode_with_options(&back, &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn integers_round_trip_exactly(n in any::<i64>()) {
        check_round_trip(&Value::Int(n), &ToonOptions::default())?;
    }

    #[test]
    fn strings_round_trip_exactly(s in any::<String>()) {
        check_round_trip(&Value::String(s), &ToonOptions::default())?;
    }

    #[test]
    fn inline_headers_count_matches(xs in prop::collection::vec(any::<i64>(), 1..20)) {
        let value = Value::Object(ToonMap::from_iter([(
            "xs".to_string(),
            Value::Array(xs.iter().copied().map(Value::Int).collect()),
        )]));
        let text = encode_with_options(&value, &ToonOptions::default());
        let expected_prefix = format!("xs[{}]: ", xs.len());
        prop_assert!(text.starts_with(&expected_prefix));
    }

    #[test]
    fn decoder_never_panics_on_arbitrary_input(input in ".{0,200}") {
        let _ = decode_with_options(&input, &ToonOptions::default());
        let _ = decode_with_options(&input, &ToonOptions::new().with_strict(false));
    }
}
