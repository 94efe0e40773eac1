//! Extension trait for `Future<Output = Outcome<T, E>>`.
//!
//! Mirrors the synchronous combinators on a pending outcome: the carrier is
//! awaited first, then the handler for its variant runs (and is awaited, for
//! the `_async` forms). Nothing is polled concurrently.

use core::future::Future;

use super::futures::{BindErr, BindOk, MapErr, MapOk};
use crate::Outcome;

/// Combinators over a pending [`Outcome`].
///
/// Blanket-implemented for every future resolving to an `Outcome`, so any
/// `async fn` returning one can be chained directly.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Fallible<String> {
///     if id == 0 { fail(Failure::not_found()) } else { success(format!("user-{id}")) }
/// }
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let name = load(7)
///         .map(|name| name.to_uppercase())
///         .bind_async(|name| async move { success(name.len()) })
///         .await;
///     assert_eq!(name, Outcome::ok(6));
///
///     assert!(load(0).is_error().await);
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Maps the success value once the outcome resolves.
    fn map<R, F>(self, f: F) -> MapOk<Self, F>
    where
        F: FnOnce(T) -> R,
    {
        MapOk::new(self, f)
    }

    /// Maps the error value once the outcome resolves.
    fn map_error<R, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(E) -> R,
    {
        MapErr::new(self, f)
    }

    /// Binds a synchronous step once the outcome resolves.
    fn bind<R, F>(self, f: F) -> BindOk<Self, F>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        BindOk::new(self, f)
    }

    /// Binds a synchronous recovery step once the outcome resolves.
    fn bind_error<R, F>(self, f: F) -> BindErr<Self, F>
    where
        F: FnOnce(E) -> Outcome<T, R>,
    {
        BindErr::new(self, f)
    }

    fn map_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<R, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        async move { self.await.map_async(f).await }
    }

    fn map_error_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, R>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = R>,
    {
        async move { self.await.map_error_async(f).await }
    }

    fn bind_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<R, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<R, E>>,
    {
        async move { self.await.bind_async(f).await }
    }

    fn bind_error_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, R>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, R>>,
    {
        async move { self.await.bind_error_async(f).await }
    }

    fn match_with<R, FE, FO>(self, on_error: FE, on_ok: FO) -> impl Future<Output = R>
    where
        FE: FnOnce(E) -> R,
        FO: FnOnce(T) -> R,
    {
        async move { self.await.match_with(on_error, on_ok) }
    }

    fn match_with_async<R, FE, FO, FutE, FutO>(
        self,
        on_error: FE,
        on_ok: FO,
    ) -> impl Future<Output = R>
    where
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
        FO: FnOnce(T) -> FutO,
        FutO: Future<Output = R>,
    {
        async move { self.await.match_with_async(on_error, on_ok).await }
    }

    fn fold<S, F>(self, initial: S, folder: F) -> impl Future<Output = S>
    where
        F: FnOnce(S, T) -> S,
    {
        async move { self.await.fold(initial, folder) }
    }

    fn fold_async<S, F, Fut>(self, initial: S, folder: F) -> impl Future<Output = S>
    where
        F: FnOnce(S, T) -> Fut,
        Fut: Future<Output = S>,
    {
        async move { self.await.fold_async(initial, folder).await }
    }

    fn fold_back<S, F>(self, folder: F, initial: S) -> impl Future<Output = S>
    where
        F: FnOnce(T, S) -> S,
    {
        async move { self.await.fold_back(folder, initial) }
    }

    fn fold_back_async<S, F, Fut>(self, folder: F, initial: S) -> impl Future<Output = S>
    where
        F: FnOnce(T, S) -> Fut,
        Fut: Future<Output = S>,
    {
        async move { self.await.fold_back_async(folder, initial).await }
    }

    fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        async move { self.await.unwrap_or(default) }
    }

    fn unwrap_or_else<F>(self, factory: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.unwrap_or_else(factory) }
    }

    fn unwrap_or_else_async<F, Fut>(self, factory: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.unwrap_or_else_async(factory).await }
    }

    fn unwrap_error_or(self, default: E) -> impl Future<Output = E> {
        async move { self.await.unwrap_error_or(default) }
    }

    fn unwrap_error_or_else<F>(self, factory: F) -> impl Future<Output = E>
    where
        F: FnOnce() -> E,
    {
        async move { self.await.unwrap_error_or_else(factory) }
    }

    fn unwrap_error_or_else_async<F, Fut>(self, factory: F) -> impl Future<Output = E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        async move { self.await.unwrap_error_or_else_async(factory).await }
    }

    fn is_ok(self) -> impl Future<Output = bool> {
        async move { self.await.is_ok() }
    }

    fn is_error(self) -> impl Future<Output = bool> {
        async move { self.await.is_error() }
    }

    fn contains(self, value: T) -> impl Future<Output = bool>
    where
        T: PartialEq,
    {
        async move { self.await.contains(&value) }
    }

    fn contains_by<F>(self, value: T, comparer: F) -> impl Future<Output = bool>
    where
        F: FnOnce(&T, &T) -> bool,
    {
        async move { self.await.contains_by(&value, comparer) }
    }

    fn exists<F>(self, predicate: F) -> impl Future<Output = bool>
    where
        F: FnOnce(&T) -> bool,
    {
        async move { self.await.exists(predicate) }
    }

    fn exists_async<F, Fut>(self, predicate: F) -> impl Future<Output = bool>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.exists_async(predicate).await }
    }

    /// Same as [`FutureOutcomeExt::map`].
    fn select<R, F>(self, selector: F) -> MapOk<Self, F>
    where
        F: FnOnce(T) -> R,
    {
        self.map(selector)
    }

    fn select_async<R, F, Fut>(self, selector: F) -> impl Future<Output = Outcome<R, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        self.map_async(selector)
    }

    fn select_many<I, R, S, P>(self, selector: S, projector: P) -> impl Future<Output = Outcome<R, E>>
    where
        S: FnOnce(&T) -> Outcome<I, E>,
        P: FnOnce(T, I) -> R,
    {
        async move { self.await.select_many(selector, projector) }
    }

    fn select_many_async<I, R, S, SFut, P>(
        self,
        selector: S,
        projector: P,
    ) -> impl Future<Output = Outcome<R, E>>
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = Outcome<I, E>>,
        P: FnOnce(T, I) -> R,
    {
        async move { self.await.select_many_async(selector, projector).await }
    }

    fn select_many_project_async<I, R, S, P, PFut>(
        self,
        selector: S,
        projector: P,
    ) -> impl Future<Output = Outcome<R, E>>
    where
        S: FnOnce(&T) -> Outcome<I, E>,
        P: FnOnce(T, I) -> PFut,
        PFut: Future<Output = R>,
    {
        async move { self.await.select_many_project_async(selector, projector).await }
    }

    fn select_many_async_project_async<I, R, S, SFut, P, PFut>(
        self,
        selector: S,
        projector: P,
    ) -> impl Future<Output = Outcome<R, E>>
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = Outcome<I, E>>,
        P: FnOnce(T, I) -> PFut,
        PFut: Future<Output = R>,
    {
        async move { self.await.select_many_async_project_async(selector, projector).await }
    }
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}

/// Flattening for a pending nested outcome.
pub trait FutureOutcomeFlattenExt<T, E>: Future<Output = Outcome<Outcome<T, E>, E>> + Sized {
    /// Awaits the carrier and removes one level of nesting.
    fn flatten(self) -> impl Future<Output = Outcome<T, E>> {
        async move { self.await.flatten() }
    }
}

impl<Fut, T, E> FutureOutcomeFlattenExt<T, E> for Fut where Fut: Future<Output = Outcome<Outcome<T, E>, E>> {}
