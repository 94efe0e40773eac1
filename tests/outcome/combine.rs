use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::{accumulate, combine2, combine3, fail, success, Failure, Fallible, Outcome};

type Sample = Outcome<i32, &'static str>;

#[test]
fn combine2_applies_function_when_both_succeed() {
    assert_eq!(combine2(Sample::ok(2), Sample::ok(3), |a, b| a * b), Outcome::ok(6));
}

#[test]
fn combine2_reports_leftmost_error() {
    assert_eq!(combine2(Sample::err("a"), Sample::err("b"), |a, b| a + b), Outcome::err("a"));
    assert_eq!(combine2(Sample::ok(1), Sample::err("b"), |a, b| a + b), Outcome::err("b"));
}

#[test]
fn combine2_does_not_call_function_on_error() {
    let calls = AtomicU32::new(0);
    let result = combine2(Sample::ok(1), Sample::err("b"), |a, b| {
        calls.fetch_add(1, Ordering::SeqCst);
        a + b
    });
    assert!(result.is_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn combine3_mixes_types() {
    let joined = combine3(
        Outcome::<_, &str>::ok("id"),
        Outcome::ok(7u8),
        Outcome::ok(true),
        |name, n, flag| format!("{name}-{n}-{flag}"),
    );
    assert_eq!(joined, Outcome::ok("id-7-true".to_string()));

    let failed = combine3(Sample::ok(1), Sample::err("second"), Sample::err("third"), |a, b, c| a + b + c);
    assert_eq!(failed, Outcome::err("second"));
}

#[test]
fn collect_short_circuits_on_first_error() {
    let seen = AtomicU32::new(0);
    let items = [Sample::ok(1), Sample::err("first"), Sample::err("second"), Sample::ok(4)];

    let collected: Outcome<Vec<i32>, &str> = items
        .into_iter()
        .inspect(|_| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .collect();

    assert_eq!(collected, Outcome::err("first"));
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    let all: Outcome<Vec<i32>, &str> = vec![Sample::ok(1), Sample::ok(2)].into_iter().collect();
    assert_eq!(all, Outcome::ok(vec![1, 2]));
}

#[test]
fn accumulate_gathers_every_failure_in_order() {
    let checks: Vec<Fallible<i32>> = vec![
        success(1),
        fail(Failure::validation().with_code("A")),
        success(2),
        fail(Failure::validation().with_code("B")),
    ];

    let failures = accumulate(checks).unwrap_error();
    let codes: Vec<&str> = failures.iter().map(Failure::code).collect();
    assert_eq!(codes, vec!["A", "B"]);
}

#[test]
fn accumulate_of_nothing_is_empty_success() {
    let empty: Vec<Fallible<i32>> = Vec::new();
    assert_eq!(accumulate(empty), Outcome::ok(Vec::new()));
}
