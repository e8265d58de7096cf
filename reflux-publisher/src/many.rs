// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::single::Single;
use crate::source::Source;
use crate::{
    collect, concat, delay, flat_map, hooks, log, merge, on_error, sources, transform, zip,
};
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

/// A publisher of zero or more values followed by one terminal signal.
///
/// `Many` is an immutable description: every subscribe starts a new, independent
/// execution, and operators return new publishers wrapping `self`.
///
/// # Example
///
/// ```
/// use reflux_publisher::Many;
///
/// # #[tokio::main]
/// # async fn main() -> reflux_core::Result<()> {
/// let tens = Many::range(1, 5).map(|x| x * 10);
/// assert_eq!(tens.collect().await?, vec![10, 20, 30, 40, 50]);
/// # Ok(())
/// # }
/// ```
pub struct Many<T: Element> {
    source: Source<T>,
}

impl<T: Element> Clone for Many<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Element> Debug for Many<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Many").finish_non_exhaustive()
    }
}

impl<T: Element> Publisher<T> for Many<T> {
    fn open(&self, subscription: &Subscription) -> SignalStream<T> {
        self.source.open(subscription)
    }
}

impl<T: Element> From<Single<T>> for Many<T> {
    fn from(single: Single<T>) -> Self {
        single.into_many()
    }
}

impl<T: Element> Many<T> {
    pub(crate) fn from_source(source: Source<T>) -> Self {
        Self { source }
    }

    pub(crate) fn source(&self) -> Source<T> {
        self.source.clone()
    }

    /// Wraps any publisher.
    pub fn from_publisher<P: Publisher<T>>(publisher: P) -> Self {
        Self::from_source(std::sync::Arc::new(publisher))
    }

    /// Emits `values` in order, then completes.
    pub fn just(values: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_source(sources::from_iter(values))
    }

    /// Emits the items of `values` in order, then completes.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
        I::IntoIter: Send + 'static,
    {
        Self::from_source(sources::from_iter(values))
    }

    /// Completes without values.
    pub fn empty() -> Self {
        Self::from_source(sources::empty())
    }

    /// Fails without values.
    pub fn error(error: RefluxError) -> Self {
        Self::from_source(sources::error(error))
    }

    /// Runs the future produced by `factory` on each subscribe and emits its value.
    pub fn from_future<Fut, F>(factory: F) -> Self
    where
        Fut: Future<Output = reflux_core::Result<T>> + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
    {
        Self::from_source(sources::from_future(factory))
    }

    /// Builds the publisher to run on each subscribe.
    pub fn defer<P, F>(factory: F) -> Self
    where
        P: Publisher<T>,
        F: Fn() -> P + Send + Sync + 'static,
    {
        Self::from_source(sources::defer(factory))
    }

    pub fn map<U, F>(&self, f: F) -> Many<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Many::from_source(transform::map(self.source(), f))
    }

    /// Like [`map`](Self::map) with a fallible function; an `Err` terminates the
    /// sequence with [`RefluxError::UserError`].
    pub fn try_map<U, E, F>(&self, f: F) -> Many<U>
    where
        U: Element,
        E: Into<Box<dyn Error + Send + Sync>>,
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    {
        Many::from_source(transform::try_map(self.source(), f))
    }

    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_source(transform::filter(self.source(), predicate))
    }

    /// Emits the first `count` values, then completes and cancels the upstream.
    pub fn take(&self, count: u64) -> Self {
        Self::from_source(transform::take(self.source(), count))
    }

    /// Maps every value to a publisher and merges the inner sequences by arrival.
    pub fn flat_map<U, P, F>(&self, f: F) -> Many<U>
    where
        U: Element,
        P: Publisher<U>,
        F: Fn(T) -> P + Send + Sync + 'static,
    {
        Many::from_source(flat_map::flat_map(self.source(), f))
    }

    /// Continues with the sequence of `handler(error)` when the upstream fails.
    pub fn on_error_resume<P, F>(&self, handler: F) -> Self
    where
        P: Publisher<T>,
        F: Fn(RefluxError) -> P + Send + Sync + 'static,
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

    pub fn do_on_next<F, R>(&self, hook: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_next(self.source(), hook))
    }

    pub fn do_on_error<F, R>(&self, hook: F) -> Self
    where
        F: Fn(&RefluxError) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_error(self.source(), hook))
    }

    pub fn do_on_complete<F, R>(&self, hook: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        Self::from_source(hooks::do_on_complete(self.source(), hook))
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

    /// Shifts every value by `duration` using the default timer.
    #[cfg(feature = "runtime-tokio")]
    pub fn delay_elements(&self, duration: Duration) -> Self {
        self.delay_elements_with(duration, DefaultRuntime::default().timer())
    }

    /// Shifts every value by `duration` using `timer`.
    pub fn delay_elements_with<TM: Timer>(&self, duration: Duration, timer: TM) -> Self {
        Self::from_source(delay::delay_elements(self.source(), duration, timer))
    }

    /// Runs the given publishers one after the other.
    pub fn concat(sources: Vec<Many<T>>) -> Self {
        Self::from_source(concat::concat(
            sources.iter().map(Many::source).collect(),
        ))
    }

    /// Continues with `other` once `self` completed.
    pub fn concat_with(&self, other: impl Into<Many<T>>) -> Self {
        Self::concat(vec![self.clone(), other.into()])
    }

    /// Runs the given publishers concurrently, interleaving values by arrival.
    pub fn merge(sources: Vec<Many<T>>) -> Self {
        Self::from_source(merge::merge(sources.iter().map(Many::source).collect()))
    }

    /// Runs `self` and `other` concurrently, interleaving values by arrival.
    pub fn merge_with(&self, other: impl Into<Many<T>>) -> Self {
        Self::merge(vec![self.clone(), other.into()])
    }

    /// Pairs the values of `self` and `other` by index.
    pub fn zip_with<U: Element>(&self, other: &Many<U>) -> Many<(T, U)> {
        Many::zip(self, other)
    }

    /// Pairs the values of `first` and `second` by index and combines each pair.
    pub fn zip_with_combinator<A, B, F>(first: &Many<A>, second: &Many<B>, combinator: F) -> Self
    where
        A: Element,
        B: Element,
        F: Fn(A, B) -> T + Send + Sync + 'static,
    {
        Many::zip(first, second).map(move |(a, b)| combinator(a, b))
    }

    /// The first value, cancelling the rest of the sequence.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Single<T> {
        Single::from_source(transform::take(self.source(), 1))
    }

    /// All values gathered into one `Vec`.
    pub fn collect_list(&self) -> Single<Vec<T>> {
        Single::from_source(collect::collect_list(self.source()))
    }

    /// Subscribes and waits for all values.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence.
    #[cfg(feature = "runtime-tokio")]
    pub async fn collect(&self) -> reflux_core::Result<Vec<T>> {
        use reflux_exec::SubscribeExt;
        self.collect_values().await
    }
}

impl Many<i32> {
    /// Emits `count` ascending integers starting at `start`, then completes.
    ///
    /// Fails on subscribe when the range would exceed `i32::MAX`.
    pub fn range(start: i32, count: u32) -> Self {
        Self::from_source(sources::range(start, count))
    }
}

impl Many<u64> {
    /// Emits `0, 1, 2, ...` every `period` on the default timer.
    #[cfg(feature = "runtime-tokio")]
    pub fn interval(period: Duration) -> Self {
        Self::interval_with(period, DefaultRuntime::default().timer())
    }

    /// Emits `0, 1, 2, ...` every `period` on `timer`.
    pub fn interval_with<TM: Timer>(period: Duration, timer: TM) -> Self {
        Self::from_source(sources::interval(period, timer))
    }
}

impl<A: Element, B: Element> Many<(A, B)> {
    /// Pairs the values of `first` and `second` by index.
    ///
    /// Both sides run concurrently. Completes as soon as either side completed
    /// and its buffered values were paired.
    pub fn zip(first: &Many<A>, second: &Many<B>) -> Self {
        Self::from_source(zip::zip(first.source(), second.source()))
    }
}

impl<T: Element> Many<Vec<T>> {
    /// Combines the values of all `sources` at each index into a `Vec`.
    pub fn zip_all(sources: Vec<Many<T>>) -> Self {
        Self::from_source(zip::zip_all(sources.iter().map(Many::source).collect()))
    }
}
