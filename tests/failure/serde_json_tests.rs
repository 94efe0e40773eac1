use outcome_rail::{Category, Failure, Failures, Outcome};

#[test]
fn failure_round_trips_through_json() {
    let failure = Failure::custom("Conflict", "User.Duplicate", "taken")
        .with_metadata("email", "a@b.c")
        .with_metadata("attempts", 2)
        .with_metadata("locked", true);

    let json = serde_json::to_string(&failure).unwrap();
    let back: Failure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failure);
}

#[test]
fn category_serializes_as_name() {
    assert_eq!(serde_json::to_string(&Category::NotFound).unwrap(), "\"NotFound\"");
    let parsed: Category = serde_json::from_str("\"Validation\"").unwrap();
    assert_eq!(parsed, Category::Validation);
}

#[test]
fn missing_metadata_defaults_to_empty() {
    let json = r#"{"code":"General.Fatal","message":"x","category":"Fatal"}"#;
    let failure: Failure = serde_json::from_str(json).unwrap();
    assert!(failure.metadata().is_empty());
}

#[test]
fn failures_reject_empty_array() {
    assert!(serde_json::from_str::<Failures>("[]").is_err());

    let failures = Failures::new(Failure::fatal(), [Failure::not_found()]);
    let json = serde_json::to_string(&failures).unwrap();
    assert_eq!(serde_json::from_str::<Failures>(&json).unwrap(), failures);
}

#[test]
fn outcome_serializes_externally_tagged() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Ok":1}"#);

    let err: Outcome<i32, String> = serde_json::from_str(r#"{"Err":"bad"}"#).unwrap();
    assert_eq!(err, Outcome::err("bad".to_string()));
}

#[test]
fn unsigned_metadata_round_trips() {
    let failure = Failure::not_found().with_metadata("id", 9u32).with_metadata("big", u64::MAX);

    let json = serde_json::to_string(&failure).unwrap();
    let back: Failure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failure);
}

#[test]
fn unnormalized_custom_category_round_trips() {
    let failure = Failure::of(Category::Custom("Validation".to_string()));

    let json = serde_json::to_string(&failure).unwrap();
    let back: Failure = serde_json::from_str(&json).unwrap();
    assert_eq!(back.category(), &Category::Validation);
    assert_eq!(back, failure);
}
