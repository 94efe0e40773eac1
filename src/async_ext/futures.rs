//! Poll-driven futures applying a synchronous handler to a pending outcome.
//!
//! Each wrapper polls the inner future once to completion and then applies
//! its handler to the matching variant only; the other variant passes through.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::Outcome;

macro_rules! outcome_future {
    (
        $(#[$meta:meta])*
        $name:ident, $method:ident, <$t:ident, $e:ident, $r:ident> $bound:ident($arg:ty) -> $ret:ty => $output:ty
    ) => {
        pin_project! {
            $(#[$meta])*
            #[must_use = "futures do nothing unless polled"]
            pub struct $name<Fut, F> {
                #[pin]
                future: Fut,
                f: Option<F>,
            }
        }

        impl<Fut, F> $name<Fut, F> {
            #[inline]
            pub(crate) fn new(future: Fut, f: F) -> Self {
                Self { future, f: Some(f) }
            }
        }

        impl<Fut, F, $t, $e, $r> Future for $name<Fut, F>
        where
            Fut: Future<Output = Outcome<$t, $e>>,
            F: $bound($arg) -> $ret,
        {
            type Output = $output;

            fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
                let this = self.project();
                let outcome = ready!(this.future.poll(cx));
                let f = this
                    .f
                    .take()
                    .expect(concat!(stringify!($name), " polled after completion"));
                Poll::Ready(outcome.$method(f))
            }
        }

        impl<Fut, F, $t, $e, $r> FusedFuture for $name<Fut, F>
        where
            Fut: Future<Output = Outcome<$t, $e>>,
            F: $bound($arg) -> $ret,
        {
            fn is_terminated(&self) -> bool {
                self.f.is_none()
            }
        }
    };
}

outcome_future! {
    /// Future returned by [`FutureOutcomeExt::map`](super::FutureOutcomeExt::map).
    MapOk, map, <T, E, R> FnOnce(T) -> R => Outcome<R, E>
}

outcome_future! {
    /// Future returned by [`FutureOutcomeExt::map_error`](super::FutureOutcomeExt::map_error).
    MapErr, map_error, <T, E, R> FnOnce(E) -> R => Outcome<T, R>
}

outcome_future! {
    /// Future returned by [`FutureOutcomeExt::bind`](super::FutureOutcomeExt::bind).
    BindOk, bind, <T, E, R> FnOnce(T) -> Outcome<R, E> => Outcome<R, E>
}

outcome_future! {
    /// Future returned by [`FutureOutcomeExt::bind_error`](super::FutureOutcomeExt::bind_error).
    BindErr, bind_error, <T, E, R> FnOnce(E) -> Outcome<T, R> => Outcome<T, R>
}
