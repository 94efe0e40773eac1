use super::{Fallible, FallibleMany, Outcome};
use crate::failure::Failures;
use crate::types::alloc_type::Vec;

/// Combines two outcomes with `f` if both succeed.
///
/// Equivalent to `first.bind(|a| second.map(|b| f(a, b)))`: the first error
/// from the left wins.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine2, Outcome};
///
/// let sum = combine2(Outcome::<_, &str>::ok(1), Outcome::ok(2), |a, b| a + b);
/// assert_eq!(sum, Outcome::ok(3));
///
/// let failed = combine2(Outcome::<i32, _>::err("e"), Outcome::<i32, _>::err("f"), |a, b| a + b);
/// assert_eq!(failed, Outcome::err("e"));
/// ```
#[inline]
pub fn combine2<A, B, R, E, F>(first: Outcome<A, E>, second: Outcome<B, E>, f: F) -> Outcome<R, E>
where
    F: FnOnce(A, B) -> R,
{
    first.bind(|a| second.map(|b| f(a, b)))
}

/// Combines three outcomes with `f` if all succeed; the first error from the left wins.
#[inline]
pub fn combine3<A, B, C, R, E, F>(
    first: Outcome<A, E>,
    second: Outcome<B, E>,
    third: Outcome<C, E>,
    f: F,
) -> Outcome<R, E>
where
    F: FnOnce(A, B, C) -> R,
{
    first.bind(|a| second.bind(|b| third.map(|c| f(a, b, c))))
}

/// Collects every success value, or every failure if at least one item failed.
///
/// Unlike collecting into an `Outcome`, which stops at the first error, this
/// keeps going and reports all failures in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{accumulate, fail, success, Failure};
///
/// let all_good = accumulate([success(1), success(2)]);
/// assert_eq!(all_good.unwrap(), vec![1, 2]);
///
/// let checked = accumulate([
///     success(1),
///     fail(Failure::validation().with_code("Name.Empty")),
///     fail(Failure::validation().with_code("Age.Negative")),
/// ]);
/// assert_eq!(checked.unwrap_error().len(), 2);
/// ```
pub fn accumulate<T, I>(items: I) -> FallibleMany<Vec<T>>
where
    I: IntoIterator<Item = Fallible<T>>,
{
    let mut values = Vec::new();
    let mut failures: Option<Failures> = None;

    for item in items {
        match item {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(failure) => match failures.as_mut() {
                Some(all) => all.push(failure),
                None => failures = Some(Failures::single(failure)),
            },
        }
    }

    match failures {
        Some(failures) => Outcome::Err(failures),
        None => Outcome::Ok(values),
    }
}

/// Short-circuiting collection: stops at and returns the first error.
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut error = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(e) => {
                    error = Some(e);
                    None
                },
            })
            .collect();

        match error {
            Some(e) => Outcome::Err(e),
            None => Outcome::Ok(collected),
        }
    }
}
