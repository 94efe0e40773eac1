//! Tests for FutureOutcomeExt and FutureOutcomeFlattenExt.

use std::future::{ready, Future};
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use futures_core::future::FusedFuture;
use outcome_rail::async_ext::MapOk;
use outcome_rail::prelude_async::*;

type Sample = Outcome<i32, &'static str>;

async fn load(id: i32) -> Sample {
    if id > 0 {
        Outcome::ok(id)
    } else {
        Outcome::err("not found")
    }
}

fn noop_waker() -> Waker {
    fn noop(_: *const ()) {}
    fn clone(p: *const ()) -> RawWaker {
        RawWaker::new(p, &VTABLE)
    }
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
    unsafe { Waker::from_raw(RawWaker::new(core::ptr::null(), &VTABLE)) }
}

#[test]
fn map_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MapOk<std::future::Ready<Sample>, fn(i32) -> i32>>();
    assert_sync::<MapOk<std::future::Ready<Sample>, fn(i32) -> i32>>();
}

#[test]
fn map_future_reports_termination() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut = ready(Sample::ok(1)).map(|v| v + 1);
    assert!(!fut.is_terminated());
    assert_eq!(Pin::new(&mut fut).poll(&mut cx), Poll::Ready(Outcome::ok(2)));
    assert!(fut.is_terminated());
}

#[tokio::test]
async fn sync_handlers_on_pending_outcome() {
    assert_eq!(load(2).map(|v| v * 10).await, Outcome::ok(20));
    assert_eq!(load(0).map_error(str::len).await, Outcome::err(9));
    assert_eq!(
        load(4).bind(|v| if v > 3 { Sample::err("too big") } else { Sample::ok(v) }).await,
        Outcome::err("too big")
    );
    assert_eq!(load(0).bind_error(|_| Outcome::<i32, ()>::ok(0)).await, Outcome::ok(0));
}

#[tokio::test]
async fn map_on_error_does_not_call_handler() {
    let calls = AtomicU32::new(0);
    let result = load(-1)
        .map(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            v
        })
        .await;

    assert_eq!(result, Outcome::err("not found"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn async_handlers_on_pending_outcome() {
    let chained = load(3)
        .map_async(|v| async move { v + 1 })
        .bind_async(load)
        .bind_async(|v| async move { if v > 3 { Sample::ok(v * 2) } else { Sample::err("small") } })
        .await;
    assert_eq!(chained, Outcome::ok(8));

    let renamed = load(0).map_error_async(|e| async move { e.to_uppercase() }).await;
    assert_eq!(renamed, Outcome::err("NOT FOUND".to_string()));

    let recovered = load(0).bind_error_async(|_| async { Outcome::<i32, ()>::ok(-1) }).await;
    assert_eq!(recovered, Outcome::ok(-1));
}

#[tokio::test]
async fn bind_async_short_circuits_pending_error() {
    let calls = AtomicU32::new(0);
    let result = load(0)
        .bind_async(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            load(v)
        })
        .await;

    assert_eq!(result, Outcome::err("not found"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn eliminators_on_pending_outcome() {
    assert_eq!(load(5).match_with(|_| -1, |v| v).await, 5);
    assert_eq!(
        load(0).match_with_async(|e| async move { e.len() as i32 }, |v| async move { v }).await,
        9
    );
    assert_eq!(load(5).fold(1, |s, v| s + v).await, 6);
    assert_eq!(load(5).fold_async(1, |s, v| async move { s * v }).await, 5);
    assert_eq!(load(5).fold_back(|v, s| v - s, 1).await, 4);
    assert_eq!(load(5).fold_back_async(|v, s| async move { v - s }, 1).await, 4);
    assert_eq!(load(0).unwrap_or(7).await, 7);
    assert_eq!(load(0).unwrap_or_else(|| 8).await, 8);
    assert_eq!(load(0).unwrap_or_else_async(|| async { 9 }).await, 9);
    assert_eq!(load(1).unwrap_error_or("none").await, "none");
    assert_eq!(load(1).unwrap_error_or_else(|| "lazy").await, "lazy");
    assert_eq!(load(1).unwrap_error_or_else_async(|| async { "async" }).await, "async");
}

#[tokio::test]
async fn predicates_on_pending_outcome() {
    assert!(load(1).is_ok().await);
    assert!(load(0).is_error().await);
    assert!(load(4).contains(4).await);
    assert!(!load(0).contains(4).await);
    assert!(load(4).map(|v| -v).contains_by(4, |held, wanted| held.abs() == *wanted).await);
    assert!(load(4).exists(|v| *v > 3).await);
    assert!(load(4).exists_async(|v| async move { v == 4 }).await);
    assert!(!load(0).exists_async(|_| async { true }).await);
}

#[tokio::test]
async fn select_family_on_pending_outcome() {
    assert_eq!(load(2).select(|v| v + 1).await, Outcome::ok(3));
    assert_eq!(load(2).select_async(|v| async move { v + 2 }).await, Outcome::ok(4));

    let expected = Outcome::ok((2, 4));
    assert_eq!(load(2).select_many(|x| Sample::ok(x * 2), |x, y| (x, y)).await, expected);
    assert_eq!(load(2).select_many_async(|x| load(*x * 2), |x, y| (x, y)).await, expected);
    assert_eq!(
        load(2)
            .select_many_project_async(|x| Sample::ok(x * 2), |x, y| async move { (x, y) })
            .await,
        expected
    );
    assert_eq!(
        load(2)
            .select_many_async_project_async(|x| load(*x * 2), |x, y| async move { (x, y) })
            .await,
        expected
    );
}

#[tokio::test]
async fn flatten_pending_nested_outcome() {
    let nested = async { Outcome::<Sample, &str>::ok(Sample::ok(1)) };
    assert_eq!(nested.flatten().await, Outcome::ok(1));

    let inner_err = async { Outcome::<Sample, &str>::ok(Sample::err("inner")) };
    assert_eq!(inner_err.flatten().await, Outcome::err("inner"));
}

#[tokio::test]
async fn carrier_is_awaited_once() {
    let polls = AtomicU32::new(0);
    let carrier = async {
        polls.fetch_add(1, Ordering::SeqCst);
        Sample::ok(1)
    };

    let result = carrier.map(|v| v + 1).bind(|v| Sample::ok(v * 2)).await;
    assert_eq!(result, Outcome::ok(4));
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}
