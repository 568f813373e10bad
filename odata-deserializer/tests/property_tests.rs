//! Property-based tests for decoding invariants

mod helpers;

use helpers::{atom_feed, json_feed};
use odata_deserializer::{DecodeCause, ODataDeserializer, PubFormat, ResourceKind};
use proptest::prelude::*;

fn ids_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10_000, 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Atom entries come back in document order, and `next` is present
    /// exactly when the document declares a continuation link.
    #[test]
    fn prop_atom_feed_preserves_order(ids in ids_strategy(), paged in any::<bool>()) {
        let next = paged.then_some("http://svc/Entities?skip=20");
        let xml = atom_feed(&ids, next);

        let container = ODataDeserializer::default()
            .decode_feed(xml.as_bytes(), PubFormat::Atom)
            .unwrap();
        let feed = container.payload();

        let decoded: Vec<String> = feed.entries().iter().filter_map(|e| e.id.clone()).collect();
        let expected: Vec<String> = ids.iter().map(|id| format!("http://svc/Entities({})", id)).collect();
        prop_assert_eq!(decoded, expected);
        prop_assert_eq!(feed.next().map(|u| u.as_str()), next);
        prop_assert_eq!(container.next_link().map(|u| u.as_str()), next);
    }

    /// JSON feeds keep entry order and never carry container metadata.
    #[test]
    fn prop_json_feed_preserves_order(ids in ids_strategy()) {
        let json = json_feed(&ids);

        let container = ODataDeserializer::default()
            .decode_feed(json.as_bytes(), PubFormat::Json)
            .unwrap();

        prop_assert!(!container.has_metadata());
        let decoded: Vec<String> = container
            .payload()
            .entries()
            .iter()
            .filter_map(|e| e.property("ID").and_then(|p| p.value.as_primitive()).map(str::to_string))
            .collect();
        let expected: Vec<String> = ids.iter().map(u32::to_string).collect();
        prop_assert_eq!(decoded, expected);
    }

    /// Input that ends before the document element fails as a feed decode
    /// error, whatever leading noise it carries.
    #[test]
    fn prop_noise_only_input_fails(comments in prop::collection::vec("[a-z ]{0,12}", 0..4)) {
        let mut xml = String::from("<?xml version=\"1.0\"?>\n");
        for comment in &comments {
            xml.push_str(&format!("<!--{}-->\n", comment));
        }

        let err = ODataDeserializer::default()
            .decode_feed(xml.as_bytes(), PubFormat::Atom)
            .unwrap_err();

        prop_assert_eq!(err.kind(), ResourceKind::Feed);
        prop_assert!(matches!(err.cause(), DecodeCause::MissingStartElement));
    }
}
