// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, Source};
use futures::stream::{self, StreamExt};
use reflux_core::{Element, Publisher, RefluxError, Signal, SignalStream};
use reflux_runtime::timer::Timer;
use std::future::Future;
use std::time::Duration;

pub(crate) fn just<T>(value: T) -> Source<T>
where
    T: Element + Clone + Sync,
{
    from_open(move |_| SignalStream::just(value.clone()))
}

pub(crate) fn empty<T: Element>() -> Source<T> {
    from_open(|_| SignalStream::empty())
}

pub(crate) fn error<T: Element>(error: RefluxError) -> Source<T> {
    from_open(move |_| SignalStream::error(error.clone()))
}

pub(crate) fn from_iter<T, I>(values: I) -> Source<T>
where
    T: Element,
    I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
    I::IntoIter: Send + 'static,
{
    from_open(move |_| SignalStream::from_values(stream::iter(values.clone())))
}

/// `count` ascending integers starting at `start`.
///
/// Fails at subscribe time when the last value would not fit in an `i32`.
pub(crate) fn range(start: i32, count: u32) -> Source<i32> {
    if count == 0 {
        return empty();
    }
    let Ok(last) = i32::try_from(i64::from(start) + i64::from(count) - 1) else {
        return error(RefluxError::stream_error(format!(
            "range({start}, {count}) exceeds i32::MAX"
        )));
    };

    from_open(move |_| SignalStream::from_values(stream::iter(start..=last)))
}

/// Emits `0, 1, 2, ...` every `period`, starting one period after subscribe.
///
/// Tick `n` is due at `subscribe + (n + 1) * period`, so time spent downstream
/// does not shift later ticks. Ticks already due are emitted without sleeping.
pub(crate) fn interval<TM: Timer>(period: Duration, timer: TM) -> Source<u64> {
    from_open(move |_| {
        let timer = timer.clone();
        let first_deadline = timer.now() + period;
        let ticks = stream::unfold((0u64, first_deadline), move |(tick, deadline)| {
            let now = timer.now();
            let remaining = if deadline > now {
                deadline - now
            } else {
                Duration::ZERO
            };
            let sleep = timer.sleep_future(remaining);
            async move {
                sleep.await;
                Some((Signal::Next(tick), (tick + 1, deadline + period)))
            }
        });
        SignalStream::new(ticks)
    })
}

/// Builds the publisher to run anew on every subscribe.
pub(crate) fn defer<T, P, F>(factory: F) -> Source<T>
where
    T: Element,
    P: Publisher<T>,
    F: Fn() -> P + Send + Sync + 'static,
{
    from_open(move |subscription| factory().open(subscription))
}

/// Runs the future produced by `factory` once per subscribe.
pub(crate) fn from_future<T, Fut, F>(factory: F) -> Source<T>
where
    T: Element,
    Fut: Future<Output = reflux_core::Result<T>> + Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
{
    from_open(move |_| {
        let future = factory();
        SignalStream::new(stream::once(future).map(Signal::from))
    })
}
