//! Async extensions for outcome-rail.
//!
//! Two entry points mirror the synchronous algebra:
//!
//! - `_async` methods on [`Outcome`](crate::Outcome) itself, for handlers
//!   that return futures;
//! - [`FutureOutcomeExt`], for a pending `Future<Output = Outcome<T, E>>`,
//!   with both synchronous and asynchronous handlers.
//!
//! Chains are strictly sequential: each step awaits one future and resumes
//! once. Panics and cancellation of the wrapped futures are not intercepted;
//! a dropped chain simply never produces its outcome.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn divide(a: i32, b: i32) -> Fallible<i32> {
//!     if b == 0 {
//!         fail(Failure::fatal().with_message("Cannot divide by zero"))
//!     } else {
//!         success(a / b)
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let result = divide(20, 2).bind_async(|v| divide(v, 5)).map(|v| v * 10).await;
//!     assert_eq!(result, Outcome::ok(20));
//!
//!     let failed = divide(20, 0).bind_async(|v| divide(v, 5)).await;
//!     assert_eq!(failed.unwrap_error().message(), "Cannot divide by zero");
//! }
//! ```

mod future_ext;
mod futures;
mod outcome_async;

pub use future_ext::{FutureOutcomeExt, FutureOutcomeFlattenExt};
pub use futures::{BindErr, BindOk, MapErr, MapOk};
