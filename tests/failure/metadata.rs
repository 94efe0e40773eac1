use outcome_rail::{metadata, Metadata, MetadataValue};

#[test]
fn insert_replaces_in_place_and_returns_old_value() {
    let mut metadata = Metadata::new();
    assert_eq!(metadata.insert("a", 1), None);
    metadata.insert("b", 2);

    let old = metadata.insert("a", "one");
    assert_eq!(old, Some(MetadataValue::Int(1)));
    assert_eq!(metadata.len(), 2);

    let keys: Vec<&str> = metadata.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(metadata.get("a"), Some(&MetadataValue::Str("one".to_string())));
}

#[test]
fn equality_ignores_insertion_order() {
    let a = Metadata::new().with("x", 1).with("y", true);
    let b = Metadata::new().with("y", true).with("x", 1);
    assert_eq!(a, b);
    assert_ne!(a, Metadata::new().with("x", 1));
}

#[test]
fn value_kinds_do_not_compare_across_variants() {
    assert_ne!(MetadataValue::from(1i32), MetadataValue::from(1.0));
    assert_ne!(MetadataValue::from(1i32), MetadataValue::from(true));
    assert_ne!(MetadataValue::from(1i32), MetadataValue::from("1"));
    assert_eq!(MetadataValue::from(0.5f32), MetadataValue::Float(0.5));
}

#[test]
fn integers_compare_by_numeric_value() {
    assert_eq!(MetadataValue::from(9u32), MetadataValue::from(9i32));
    assert_eq!(MetadataValue::from(9u64), MetadataValue::Int(9));
    assert_eq!(MetadataValue::UInt(9), MetadataValue::Int(9));
    assert_ne!(MetadataValue::Int(-1), MetadataValue::UInt(u64::MAX));
    assert_eq!(MetadataValue::from(u64::MAX), MetadataValue::UInt(u64::MAX));
}

#[test]
fn numerically_equal_integers_hash_equally() {
    use std::collections::HashSet;

    let set: HashSet<MetadataValue> =
        [MetadataValue::UInt(9), MetadataValue::Int(9), MetadataValue::from(9u8)].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn unsigned_and_signed_metadata_make_equal_failures() {
    use outcome_rail::Failure;

    let unsigned = Failure::not_found().with_metadata("id", 9u32);
    let signed = Failure::not_found().with_metadata("id", 9i32);
    assert_eq!(unsigned.to_string(), signed.to_string());
    assert_eq!(unsigned, signed);
}

#[test]
fn display_lists_entries_in_insertion_order() {
    let metadata = Metadata::new().with("b", 2).with("a", "x").with("ok", false);
    assert_eq!(metadata.to_string(), "{ b = 2, a = x, ok = false }");
    assert_eq!(Metadata::new().to_string(), "{ }");
}

#[test]
fn collects_from_pairs() {
    let metadata: Metadata = vec![("k1", 1), ("k2", 2), ("k1", 3)].into_iter().collect();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("k1"), Some(&MetadataValue::Int(3)));
}

#[test]
fn metadata_macro_builds_map() {
    let built = metadata! {
        "field" => "email",
        "max" => 254u32,
    };
    assert_eq!(built, Metadata::new().with("field", "email").with("max", 254u32));
    assert!(metadata!().is_empty());
}
