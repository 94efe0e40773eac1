//! Division pipeline run through the async combinators.

use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::prelude_async::*;

async fn divide(a: i32, b: i32) -> Fallible<i32> {
    if b == 0 {
        fail(Failure::fatal().with_message("Cannot divide by zero"))
    } else {
        success(a / b)
    }
}

#[tokio::test]
async fn divide_returns_quotient() {
    assert_eq!(divide(10, 2).await, Outcome::ok(5));
}

#[tokio::test]
async fn divide_by_zero_equals_fatal_failure() {
    assert_eq!(
        divide(10, 0).await,
        Outcome::err(Failure::fatal().with_message("Cannot divide by zero"))
    );
}

#[tokio::test]
async fn bound_division_equals_direct_division_and_runs_once() {
    let calls = AtomicU32::new(0);
    let counted = |a: i32, b: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        divide(a, b)
    };

    let bound = Outcome::<i32, Failure>::ok(10).bind_async(|v| counted(v, 0)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let carried = async { Outcome::<i32, Failure>::ok(10) }.bind_async(|v| counted(v, 0)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let direct = counted(10, 0).await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    assert_eq!(bound, direct);
    assert_eq!(carried, direct);
}

#[tokio::test]
async fn failed_carrier_never_divides() {
    let calls = AtomicU32::new(0);
    let result = divide(1, 0)
        .bind_async(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            divide(v, 2)
        })
        .await;

    assert_eq!(result, divide(1, 0).await);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
