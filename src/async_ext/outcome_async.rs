//! Asynchronous-handler counterparts of the [`Outcome`] combinators.
//!
//! The outcome's variant is already known; only the handler suspends. Each
//! method awaits at most one handler future, and only for the variant the
//! outcome is in.

use core::future::Future;

use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Async counterpart of [`Outcome::map`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let doubled = Outcome::<i32, &str>::ok(21).map_async(|v| async move { v * 2 }).await;
    /// assert_eq!(doubled, Outcome::ok(42));
    /// # }
    /// ```
    pub async fn map_async<R, F, Fut>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value).await),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Async counterpart of [`Outcome::map_error`].
    pub async fn map_error_async<R, F, Fut>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error).await),
        }
    }

    /// Async counterpart of [`Outcome::bind`].
    pub async fn bind_async<R, F, Fut>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<R, E>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Async counterpart of [`Outcome::bind_error`].
    pub async fn bind_error_async<R, F, Fut>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, R>>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error).await,
        }
    }

    /// Async counterpart of [`Outcome::match_with`].
    pub async fn match_with_async<R, FE, FO, FutE, FutO>(self, on_error: FE, on_ok: FO) -> R
    where
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
        FO: FnOnce(T) -> FutO,
        FutO: Future<Output = R>,
    {
        match self {
            Self::Ok(value) => on_ok(value).await,
            Self::Err(error) => on_error(error).await,
        }
    }

    /// Async counterpart of [`Outcome::fold`].
    pub async fn fold_async<S, F, Fut>(self, initial: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> Fut,
        Fut: Future<Output = S>,
    {
        match self {
            Self::Ok(value) => folder(initial, value).await,
            Self::Err(_) => initial,
        }
    }

    /// Async counterpart of [`Outcome::fold_back`].
    pub async fn fold_back_async<S, F, Fut>(self, folder: F, initial: S) -> S
    where
        F: FnOnce(T, S) -> Fut,
        Fut: Future<Output = S>,
    {
        match self {
            Self::Ok(value) => folder(value, initial).await,
            Self::Err(_) => initial,
        }
    }

    /// Async counterpart of [`Outcome::unwrap_or_else`].
    pub async fn unwrap_or_else_async<F, Fut>(self, factory: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => factory().await,
        }
    }

    /// Async counterpart of [`Outcome::unwrap_error_or_else`].
    pub async fn unwrap_error_or_else_async<F, Fut>(self, factory: F) -> E
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        match self {
            Self::Ok(_) => factory().await,
            Self::Err(error) => error,
        }
    }

    /// Async counterpart of [`Outcome::exists`]; the predicate receives the value by move.
    pub async fn exists_async<F, Fut>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Ok(value) => predicate(value).await,
            Self::Err(_) => false,
        }
    }

    /// Async counterpart of [`Outcome::select`].
    pub async fn select_async<R, F, Fut>(self, selector: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        self.map_async(selector).await
    }

    /// [`Outcome::select_many`] with an async selector and a sync projector.
    pub async fn select_many_async<I, R, S, SFut, P>(self, selector: S, projector: P) -> Outcome<R, E>
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = Outcome<I, E>>,
        P: FnOnce(T, I) -> R,
    {
        self.bind_async(|x| async move { selector(&x).await.map(|y| projector(x, y)) })
            .await
    }

    /// [`Outcome::select_many`] with a sync selector and an async projector.
    pub async fn select_many_project_async<I, R, S, P, PFut>(
        self,
        selector: S,
        projector: P,
    ) -> Outcome<R, E>
    where
        S: FnOnce(&T) -> Outcome<I, E>,
        P: FnOnce(T, I) -> PFut,
        PFut: Future<Output = R>,
    {
        self.bind_async(|x| async move { selector(&x).map_async(|y| projector(x, y)).await })
            .await
    }

    /// [`Outcome::select_many`] with both selector and projector async.
    pub async fn select_many_async_project_async<I, R, S, SFut, P, PFut>(
        self,
        selector: S,
        projector: P,
    ) -> Outcome<R, E>
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = Outcome<I, E>>,
        P: FnOnce(T, I) -> PFut,
        PFut: Future<Output = R>,
    {
        self.bind_async(|x| async move { selector(&x).await.map_async(|y| projector(x, y)).await })
            .await
    }
}
