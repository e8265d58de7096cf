// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, open_inner, Source};
use futures::stream::{SelectAll, Stream, StreamExt};
use reflux_core::{Element, Publisher, Signal, SignalStream};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Maximum number of inner publishers a `flat_map` stage runs at once.
///
/// While this many inners are running the upstream is not polled, so a fast
/// upstream is held back by slow inners.
pub const FLAT_MAP_CONCURRENCY: usize = 256;

type Project<T, U> = Arc<dyn Fn(T) -> SignalStream<U> + Send + Sync>;

/// Maps every value to an inner publisher and merges the inners by arrival.
///
/// Inners are opened as soon as their value arrives and run concurrently, at
/// most [`FLAT_MAP_CONCURRENCY`] of them. The stage completes once the upstream
/// and every inner have completed; the first error from any of them terminates
/// it and drops (cancels) all the others.
pub(crate) fn flat_map<T, U, P, F>(upstream: Source<T>, f: F) -> Source<U>
where
    T: Element,
    U: Element,
    P: Publisher<U>,
    F: Fn(T) -> P + Send + Sync + 'static,
{
    let project: Project<T, U> = Arc::new(move |value| open_inner(&f(value)));
    from_open(move |subscription| {
        SignalStream::new(FlatMap {
            upstream: Some(upstream.open(subscription)),
            inners: SelectAll::new(),
            project: Arc::clone(&project),
        })
    })
}

struct FlatMap<T, U> {
    upstream: Option<SignalStream<T>>,
    inners: SelectAll<SignalStream<U>>,
    project: Project<T, U>,
}

impl<T: Element, U: Element> Stream for FlatMap<T, U> {
    type Item = Signal<U>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        loop {
            // At most one upstream value per round so inners are never starved.
            let mut opened = false;
            let mut upstream_polled = false;
            if this.inners.len() < FLAT_MAP_CONCURRENCY {
                if let Some(upstream) = this.upstream.as_mut() {
                    upstream_polled = true;
                    match upstream.poll_next_unpin(cx) {
                        Poll::Ready(Some(Signal::Next(value))) => {
                            this.inners.push((this.project)(value));
                            opened = true;
                        }
                        Poll::Ready(Some(Signal::Error(error))) => {
                            return Poll::Ready(Some(Signal::Error(error)));
                        }
                        Poll::Ready(Some(Signal::Complete)) | Poll::Ready(None) => {
                            this.upstream = None;
                        }
                        Poll::Pending => {}
                    }
                }
            }

            match this.inners.poll_next_unpin(cx) {
                Poll::Ready(Some(Signal::Complete)) => continue,
                Poll::Ready(Some(signal)) => return Poll::Ready(Some(signal)),
                Poll::Ready(None) if this.upstream.is_none() => {
                    return Poll::Ready(Some(Signal::Complete));
                }
                Poll::Ready(None) | Poll::Pending => {
                    // A finished inner freed a slot after the upstream was skipped.
                    let slot_freed = this.upstream.is_some()
                        && !upstream_polled
                        && this.inners.len() < FLAT_MAP_CONCURRENCY;
                    if opened || slot_freed {
                        continue;
                    }
                    return Poll::Pending;
                }
            }
        }
    }
}
