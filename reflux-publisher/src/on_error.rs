// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, open_inner, Source};
use crate::sources;
use futures::future::Either;
use futures::stream::{self, StreamExt};
use reflux_core::{Element, Publisher, RefluxError, Signal, SignalStream};
use std::sync::Arc;

/// Replaces an upstream error with the sequence of `handler(error)`.
///
/// Transparent when the upstream never fails. The fallback is opened only when
/// the error arrives.
pub(crate) fn on_error_resume<T, P, F>(upstream: Source<T>, handler: F) -> Source<T>
where
    T: Element,
    P: Publisher<T>,
    F: Fn(RefluxError) -> P + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    from_open(move |subscription| {
        let handler = Arc::clone(&handler);
        let resumed = upstream.open(subscription).flat_map(move |signal| match signal {
            Signal::Error(error) => Either::Right(open_inner(&handler(error))),
            other => Either::Left(stream::once(futures::future::ready(other))),
        });
        SignalStream::new(resumed)
    })
}

/// Replaces an upstream error with `fallback` followed by completion.
pub(crate) fn on_error_return<T>(upstream: Source<T>, fallback: T) -> Source<T>
where
    T: Element + Clone + Sync,
{
    on_error_resume(upstream, move |_| sources::just(fallback.clone()))
}
