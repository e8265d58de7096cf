// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Index-paired combination of concurrently running sources.
//!
//! Every source runs from subscribe on and buffers its values until all other
//! sources have a value at the same index. A buffer holds at most
//! [`ZIP_PREFETCH`] values: a source with a full buffer is not polled again
//! until a combined value consumes from it, which backpressures a fast source
//! against the slowest one instead of growing without bound.

use crate::source::{from_open, open_inner, Source};
use futures::stream::{Stream, StreamExt};
use reflux_core::{Element, RefluxError, Signal, SignalStream};
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Maximum number of values buffered per zipped source.
pub const ZIP_PREFETCH: usize = 32;

struct Side<T> {
    stream: SignalStream<T>,
    buffer: VecDeque<T>,
    done: bool,
}

impl<T> Side<T> {
    fn new(stream: SignalStream<T>) -> Self {
        Self {
            stream,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Buffers every value available without waiting.
    fn fill(&mut self, cx: &mut Context<'_>) -> Result<(), RefluxError> {
        while !self.done && self.buffer.len() < ZIP_PREFETCH {
            match self.stream.poll_next_unpin(cx) {
                Poll::Ready(Some(Signal::Next(value))) => self.buffer.push_back(value),
                Poll::Ready(Some(Signal::Error(error))) => return Err(error),
                Poll::Ready(Some(Signal::Complete)) | Poll::Ready(None) => self.done = true,
                Poll::Pending => break,
            }
        }
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.done && self.buffer.is_empty()
    }
}

pub(crate) fn zip<A, B>(first: Source<A>, second: Source<B>) -> Source<(A, B)>
where
    A: Element,
    B: Element,
{
    from_open(move |_| {
        SignalStream::new(Zip2 {
            first: Side::new(open_inner(&*first)),
            second: Side::new(open_inner(&*second)),
        })
    })
}

struct Zip2<A, B> {
    first: Side<A>,
    second: Side<B>,
}

// Buffered values are never pinned.
impl<A, B> Unpin for Zip2<A, B> {}

impl<A, B> Stream for Zip2<A, B> {
    type Item = Signal<(A, B)>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        if let Err(error) = this.first.fill(cx).and_then(|()| this.second.fill(cx)) {
            return Poll::Ready(Some(Signal::Error(error)));
        }

        if !this.first.buffer.is_empty() && !this.second.buffer.is_empty() {
            if let (Some(a), Some(b)) = (this.first.buffer.pop_front(), this.second.buffer.pop_front()) {
                return Poll::Ready(Some(Signal::Next((a, b))));
            }
        }

        if this.first.is_exhausted() || this.second.is_exhausted() {
            Poll::Ready(Some(Signal::Complete))
        } else {
            Poll::Pending
        }
    }
}

pub(crate) fn zip_all<T: Element>(sources: Vec<Source<T>>) -> Source<Vec<T>> {
    let sources: Arc<[Source<T>]> = sources.into();
    from_open(move |_| {
        let sides = sources
            .iter()
            .map(|source| Side::new(open_inner(&**source)))
            .collect();
        SignalStream::new(ZipAll { sides })
    })
}

struct ZipAll<T> {
    sides: Vec<Side<T>>,
}

impl<T> Unpin for ZipAll<T> {}

impl<T> Stream for ZipAll<T> {
    type Item = Signal<Vec<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let sides = &mut self.sides;
        if sides.is_empty() {
            return Poll::Ready(Some(Signal::Complete));
        }

        for side in sides.iter_mut() {
            if let Err(error) = side.fill(cx) {
                return Poll::Ready(Some(Signal::Error(error)));
            }
        }

        if sides.iter().all(|side| !side.buffer.is_empty()) {
            let row: Vec<T> = sides
                .iter_mut()
                .filter_map(|side| side.buffer.pop_front())
                .collect();
            return Poll::Ready(Some(Signal::Next(row)));
        }

        if sides.iter().any(Side::is_exhausted) {
            Poll::Ready(Some(Signal::Complete))
        } else {
            Poll::Pending
        }
    }
}
