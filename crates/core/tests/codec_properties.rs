//! Behavioural properties of the frontmatter codec.
//!
//! The fixed cases pin the documented examples; the proptest block checks that
//! generated trees survive `decode(encode(..))`, that encoder output is a fixed
//! point of `encode(decode(..))`, and that whatever arbitrary block text decodes
//! to can be encoded again.
use docfront_core::frontmatter::{Mapping, Value, decode, encode, locate, parse, serialize, splice};
use proptest::prelude::*;

#[test]
fn scalar_inference_order() {
    assert_eq!(decode("x: true").get("x"), Some(&Value::Bool(true)));
    assert_eq!(decode("x: 42").get("x"), Some(&Value::Integer(42)));
    assert_eq!(decode("x: 4.5").get("x"), Some(&Value::Float(4.5)));
    assert_eq!(decode("x: \"42\"").get("x"), Some(&Value::String("42".to_string())));
}

#[test]
fn nested_sequence_of_mappings() {
    let map = decode("items:\n  -\n    a: 1\n  -\n    a: 2");
    let expected: Mapping = [(
        "items",
        Value::Sequence(vec![
            Value::Mapping([("a", 1_i64)].into_iter().collect()),
            Value::Mapping([("a", 2_i64)].into_iter().collect()),
        ]),
    )]
    .into_iter()
    .collect();
    assert_eq!(map, expected);
}

#[test]
fn absent_block_keeps_body() {
    let text = "# Title\n---\nbody";
    let found = locate(text);
    assert!(!found.is_present());
    assert_eq!(found.body, text);
}

#[test]
fn quoting_rule_triggers() {
    let colon: Mapping = [("sidebarTitle", "Getting: Started")].into_iter().collect();
    assert_eq!(encode(&colon).unwrap(), "sidebarTitle: \"Getting: Started\"");

    let plain: Mapping = [("title", "Overview")].into_iter().collect();
    assert_eq!(encode(&plain).unwrap(), "title: Overview");
}

#[test]
fn key_overwrite_preserves_position() {
    let mut map = decode("a: 1\nb: 2");
    map.insert("a", 3_i64);
    assert_eq!(encode(&map).unwrap(), "a: 3\nb: 2");
}

#[test]
fn full_document_round_trip() {
    let doc = "---\ntitle: \"Payments: Cards\"\nicon: credit-card\nseo:\n  noindex: false\n  keywords:\n    - cards\n    - \"42\"\n---\n\nimport Card from '/snippets/Card.jsx'\n\n---\n\n## Section\n";
    let parsed = parse(doc);
    let fm = parsed.frontmatter.as_ref().unwrap();
    assert_eq!(fm.get("title").and_then(Value::as_str), Some("Payments: Cards"));
    assert_eq!(serialize(&parsed).unwrap(), doc);
}

#[test]
fn splice_then_locate_gives_back_the_tree() {
    let tree = decode("title: Intro\nweight: 1.0\ntags:\n  - a");
    let text = splice(&tree, "body\n").unwrap();
    let found = locate(&text);
    assert_eq!(decode(found.raw_block.unwrap()), tree);
    assert_eq!(found.body, "body\n");
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        Just("sidebarTitle".to_string()),
        Just("a:b".to_string()),
        Just("- item".to_string()),
        Just(" padded".to_string()),
    ]
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        prop::string::string_regex("[a-zA-Z0-9:,#&*!?@%{}\\[\\]\\-\\.'\" ]{0,16}").unwrap(),
        Just(String::new()),
        Just("true".to_string()),
        Just("42".to_string()),
        Just("4.5".to_string()),
        Just("'quoted'".to_string()),
        Just("caf\u{00e9}".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9..1.0e9_f64).prop_map(Value::Float),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Value::Sequence),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|pairs| Value::Mapping(pairs.into_iter().collect())),
        ]
    })
}

fn arb_mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::vec((arb_key(), arb_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn decode_inverts_encode(map in arb_mapping()) {
        let text = encode(&map).unwrap();
        prop_assert_eq!(decode(&text), map);
    }

    #[test]
    fn encode_is_a_fixed_point(map in arb_mapping()) {
        let text = encode(&map).unwrap();
        prop_assert_eq!(encode(&decode(&text)).unwrap(), text);
    }

    #[test]
    fn any_decoded_block_re_encodes(block in "[a-z0-9 :'\"#\\-\t\n]{0,80}") {
        let map = decode(&block);
        let text = encode(&map);
        prop_assert!(text.is_ok(), "{:?} decoded to {:?} but failed to encode: {:?}", block, map, text);
        let text = text.unwrap();
        prop_assert_eq!(decode(&text), map);
    }
}
