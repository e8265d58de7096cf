// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-element stages: `map`, `try_map`, `filter` and `take`.
//!
//! All of them run eagerly on the polling task. A stage that terminates early
//! (a failing `try_map`, a satisfied `take`) drops its upstream with the
//! terminal signal, which cancels it.

use crate::source::{from_open, Source};
use futures::future;
use futures::stream::{self, StreamExt};
use reflux_core::{Element, RefluxError, Signal, SignalStream};
use std::error::Error;
use std::sync::Arc;

pub(crate) fn map<T, U, F>(upstream: Source<T>, f: F) -> Source<U>
where
    T: Element,
    U: Element,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let f = Arc::new(f);
    from_open(move |subscription| {
        let f = Arc::clone(&f);
        SignalStream::new(
            upstream
                .open(subscription)
                .map(move |signal| signal.map(|value| f(value))),
        )
    })
}

pub(crate) fn try_map<T, U, E, F>(upstream: Source<T>, f: F) -> Source<U>
where
    T: Element,
    U: Element,
    E: Into<Box<dyn Error + Send + Sync>>,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    from_open(move |subscription| {
        let f = Arc::clone(&f);
        SignalStream::new(upstream.open(subscription).map(move |signal| {
            signal.and_then(|value| match f(value) {
                Ok(mapped) => Signal::Next(mapped),
                Err(error) => {
                    let error: Box<dyn Error + Send + Sync> = error.into();
                    Signal::Error(RefluxError::UserError(error.into()))
                }
            })
        }))
    })
}

pub(crate) fn filter<T, F>(upstream: Source<T>, predicate: F) -> Source<T>
where
    T: Element,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    from_open(move |subscription| {
        let predicate = Arc::clone(&predicate);
        SignalStream::new(upstream.open(subscription).filter(move |signal| {
            future::ready(signal.as_next().is_none_or(|value| predicate(value)))
        }))
    })
}

pub(crate) fn take<T: Element>(upstream: Source<T>, count: u64) -> Source<T> {
    from_open(move |subscription| {
        let upstream = upstream.open(subscription);
        if count == 0 {
            return SignalStream::empty();
        }

        let limited = upstream
            .scan(count, |remaining, signal| {
                let out = match signal {
                    Signal::Next(value) => {
                        *remaining -= 1;
                        if *remaining == 0 {
                            vec![Signal::Next(value), Signal::Complete]
                        } else {
                            vec![Signal::Next(value)]
                        }
                    }
                    terminal => vec![terminal],
                };
                future::ready(Some(stream::iter(out)))
            })
            .flatten();
        SignalStream::new(limited)
    })
}
