// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::many::Many;
use crate::source::Source;
use crate::{delay, flat_map, hooks, log, on_error, sources, transform, zip};
use reflux_core::{
    Demand, Element, HookOutcome, Publisher, RefluxError, SignalStream, Subscription,
};
use reflux_runtime::timer::Timer;
#[cfg(feature = "runtime-tokio")]
use reflux_runtime::{runtime::Runtime, DefaultRuntime};
use std::error::Error;
use std::fmt::{self, Debug};
use std::future::Future;
use std::time::Duration;

/// A publisher of at most one value followed by one terminal signal.
///
/// The cardinality is fixed by construction: every constructor and operator
/// returning a `Single` produces at most one `Next`.
///
/// # Example
///
/// ```
/// use reflux_publisher::Single;
///
/// # #[tokio::main]
/// # async fn main() -> reflux_core::Result<()> {
/// let greeting = Single::just("A").map(|s| format!("{s}!"));
/// assert_eq!(greeting.to_future().await?, Some("A!".to_string()));
/// # Ok(())
/// # }
/// ```
pub struct Single<T: Element> {
    source: Source<T>,
}

impl<T: Element> Clone for Single<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Element> Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Single").finish_non_exhaustive()
    }
}

impl<T: Element> Publisher<T> for Single<T> {
    fn open(&self, subscription: &Subscription) -> SignalStream<T> {
        self.source.open(subscription)
    }
}

impl<T: Element> Single<T> {
    pub(crate) fn from_source(source: Source<T>) -> Self {
        Self { source }
    }

    pub(crate) fn source(&self) -> Source<T> {
        self.source.clone()
    }

    /// Emits `value`, then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_source(sources::just(value))
    }

    /// Completes without a value.
    pub fn empty() -> Self {
        Self::from_source(sources::empty())
    }

    /// Fails without a value.
    pub fn error(error: RefluxError) -> Self {
        Self::from_source(sources::error(error))
    }

    /// Builds the publisher to run on each subscribe.
    pub fn defer<F>(factory: F) -> Self
    where
        F: Fn() -> Single<T> + Send + Sync + 'static,
    {
        Self::from_source(sources::defer(factory))
    }

    /// Runs the future produced by `factory` on each subscribe and emits its value.
    pub fn from_future<Fut, F>(factory: F) -> Self
    where
        Fut: Future<Output = reflux_core::Result<T>> + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
    {
        Self::from_source(sources::from_future(factory))
    }

    pub fn map<U, F>(&self, f: F) -> Single<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Single::from_source(transform::map(self.source(), f))
    }

    /// Like [`map`](Self::map) with a fallible function; an `Err` terminates the
    /// sequence with [`RefluxError::UserError`].
    pub fn try_map<U, E, F>(&self, f: F) -> Single<U>
    where
        U: Element,
        E: Into<Box<dyn Error + Send + Sync>>,
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    {
        Single::from_source(transform::try_map(self.source(), f))
    }

    /// Completes empty when the value does not match `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_source(transform::filter(self.source(), predicate))
    }

    /// Continues with the single produced from the value.
    pub fn flat_map<U, F>(&self, f: F) -> Single<U>
    where
        U: Element,
        F: Fn(T) -> Single<U> + Send + Sync + 'static,
    {
        Single::from_source(flat_map::flat_map(self.source(), f))
    }

    /// Continues with the sequence produced from the value.
    pub fn flat_map_many<U, P, F>(&self, f: F) -> Many<U>
    where
        U: Element,
        P: Publisher<U>,
        F: Fn(T) -> P + Send + Sync + 'static,
    {
        Many::from_source(flat_map::flat_map(self.source(), f))
    }

    /// Continues with `handler(error)` when the upstream fails.
    pub fn on_error_resume<F>(&self, handler: F) -> Self
    where
        F: Fn(RefluxError) -> Single<T> + Send + Sync + 'static,
    {
        Self::from_source(on_error::on_error_resume(self.source(), handler))
    }

    /// Emits `fallback` and completes when the upstream fails.
    pub fn on_error_return(&self, fallback: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_source(on_error::on_error_return(self.source(), fallback))
    }

    pub fn do_on_subscribe<F, R>(&self, hook: F) -> Self
    where
        F: Fn(&Subscription) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_subscribe(self.source(), hook))
    }

    pub fn do_on_request<F, R>(&self, hook: F) -> Self
    where
        F: Fn(Demand) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_request(self.source(), hook))
    }

    /// Observes the outcome: `Some(value)` on success with a value, `None` when
    /// completing empty. Not called on error.
    pub fn do_on_success<F, R>(&self, hook: F) -> Self
    where
        F: Fn(Option<&T>) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_success(self.source(), hook))
    }

    pub fn do_on_error<F, R>(&self, hook: F) -> Self
    where
        F: Fn(&RefluxError) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_error(self.source(), hook))
    }

    /// Runs `hook` when the execution is cancelled before its terminal signal.
    pub fn do_on_cancel<F>(&self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_source(hooks::do_on_cancel(self.source(), hook))
    }

    /// Logs every lifecycle point under the default category.
    pub fn log(&self) -> Self
    where
        T: Debug,
    {
        self.log_with(log::DEFAULT_LOG_CATEGORY)
    }

    /// Logs every lifecycle point under `category`.
    pub fn log_with(&self, category: impl Into<String>) -> Self
    where
        T: Debug,
    {
        Self::from_source(log::log(self.source(), category))
    }

    /// Shifts the value by `duration` using the default timer.
    #[cfg(feature = "runtime-tokio")]
    pub fn delay_element(&self, duration: Duration) -> Self {
        self.delay_element_with(duration, DefaultRuntime::default().timer())
    }

    /// Shifts the value by `duration` using `timer`.
    pub fn delay_element_with<TM: Timer>(&self, duration: Duration, timer: TM) -> Self {
        Self::from_source(delay::delay_elements(self.source(), duration, timer))
    }

    /// Combines the values of `self` and `other`; empty if either is empty.
    pub fn zip_with<U: Element>(&self, other: &Single<U>) -> Single<(T, U)> {
        Single::from_source(zip::zip(self.source(), other.source()))
    }

    /// Emits the value of `self`, then the values of `other`.
    pub fn concat_with(&self, other: impl Into<Many<T>>) -> Many<T> {
        self.clone().into_many().concat_with(other)
    }

    /// Runs `self` and `other` concurrently, interleaving values by arrival.
    pub fn merge_with(&self, other: impl Into<Many<T>>) -> Many<T> {
        self.clone().into_many().merge_with(other)
    }

    /// Views this single as a sequence of at most one value.
    pub fn into_many(self) -> Many<T> {
        Many::from_source(self.source)
    }

    /// Subscribes and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence.
    #[cfg(feature = "runtime-tokio")]
    pub async fn to_future(&self) -> reflux_core::Result<Option<T>> {
        use reflux_exec::SubscribeExt;
        self.first_value().await
    }
}
