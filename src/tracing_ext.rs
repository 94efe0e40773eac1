//! Tracing integration for outcome-rail.
//!
//! The combinator algebra never logs on its own. These extensions let call
//! sites emit one structured `tracing` event when an outcome turns out to be
//! an error, without changing the outcome.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::{Level, Span};

use crate::{Failure, Outcome};

/// Target used for every event emitted by this module.
pub const TRACE_TARGET: &str = "outcome_rail";

fn emit<E: Display>(level: Level, operation: &str, error: &E) {
    if level == Level::ERROR {
        tracing::error!(target: TRACE_TARGET, operation, error = %error, "operation failed");
    } else if level == Level::WARN {
        tracing::warn!(target: TRACE_TARGET, operation, error = %error, "operation failed");
    } else if level == Level::INFO {
        tracing::info!(target: TRACE_TARGET, operation, error = %error, "operation failed");
    } else if level == Level::DEBUG {
        tracing::debug!(target: TRACE_TARGET, operation, error = %error, "operation failed");
    } else {
        tracing::trace!(target: TRACE_TARGET, operation, error = %error, "operation failed");
    }
}

/// Extension trait logging the error side of an [`Outcome`].
///
/// # Example
///
/// ```
/// use outcome_rail::tracing_ext::TraceOutcomeExt;
/// use outcome_rail::{fail, success, Failure, Fallible};
///
/// fn load(id: u32) -> Fallible<&'static str> {
///     let found = match id {
///         1 => success("ada"),
///         _ => fail(Failure::not_found().with_metadata("id", id)),
///     };
///     found.trace_error("load_user")
/// }
///
/// assert!(load(2).is_error());
/// ```
pub trait TraceOutcomeExt: Sized {
    /// Emits a `WARN` event if the outcome is an error.
    fn trace_error(self, operation: &str) -> Self {
        self.trace_error_at(Level::WARN, operation)
    }

    /// Emits an event at `level` if the outcome is an error.
    fn trace_error_at(self, level: Level, operation: &str) -> Self;
}

impl<T, E: Display> TraceOutcomeExt for Outcome<T, E> {
    fn trace_error_at(self, level: Level, operation: &str) -> Self {
        if let Outcome::Err(error) = &self {
            emit(level, operation, error);
        }
        self
    }
}

/// Records `failure.code` and `failure.category` on `span`.
///
/// Only fields declared when the span was created are recorded; declare them
/// as `tracing::field::Empty` to fill them in later.
pub fn record_failure(span: &Span, failure: &Failure) {
    span.record("failure.code", failure.code());
    span.record("failure.category", failure.category().name());
}

#[cfg(feature = "async")]
pub use self::future::{FutureTraceExt, TracedOutcome};

#[cfg(feature = "async")]
mod future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{ready, Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::{Level, Span};

    use super::emit;
    use crate::types::alloc_type::Cow;
    use crate::Outcome;

    /// Extension trait for pending outcomes that logs the error side once resolved.
    ///
    /// The event is emitted inside the span that was current when the
    /// wrapper was created.
    pub trait FutureTraceExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
        fn trace_error<S>(self, operation: S) -> TracedOutcome<Self>
        where
            S: Into<Cow<'static, str>>,
        {
            self.trace_error_at(Level::WARN, operation)
        }

        fn trace_error_at<S>(self, level: Level, operation: S) -> TracedOutcome<Self>
        where
            S: Into<Cow<'static, str>>,
        {
            TracedOutcome { inner: self, span: Span::current(), level, operation: operation.into() }
        }
    }

    impl<F, T, E> FutureTraceExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}

    pin_project! {
        /// Future wrapper created by [`FutureTraceExt::trace_error`].
        #[must_use = "futures do nothing unless polled"]
        pub struct TracedOutcome<F> {
            #[pin]
            inner: F,
            span: Span,
            level: Level,
            operation: Cow<'static, str>,
        }
    }

    impl<F, T, E> Future for TracedOutcome<F>
    where
        F: Future<Output = Outcome<T, E>>,
        E: core::fmt::Display,
    {
        type Output = Outcome<T, E>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();
            let outcome = ready!(this.inner.poll(cx));
            if let Outcome::Err(error) = &outcome {
                let _entered = this.span.enter();
                emit(*this.level, this.operation, error);
            }
            Poll::Ready(outcome)
        }
    }
}
