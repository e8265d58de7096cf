// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RefluxError;
use crate::signal::Signal;
use futures::stream::{self, BoxStream, FusedStream, Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// The running execution of a publisher for one subscription.
///
/// Wraps any stream of [`Signal`]s and enforces the terminal-once rule:
///
/// - after `Error` or `Complete` the stream yields `None`
/// - an inner stream that ends without a terminal signal yields `Complete`
/// - the inner stream is dropped as soon as the terminal signal is seen, which
///   releases (and so cancels) everything upstream of it
///
/// Dropping a `SignalStream` before its terminal signal is how cancellation
/// propagates upstream.
pub struct SignalStream<T> {
    inner: Option<BoxStream<'static, Signal<T>>>,
}

impl<T: Send + 'static> SignalStream<T> {
    /// Wraps a stream of signals.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Signal<T>> + Send + 'static,
    {
        Self {
            inner: Some(stream.boxed()),
        }
    }

    /// Wraps a stream of values, completing when it ends.
    pub fn from_values<S>(values: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self::new(values.map(Signal::Next))
    }

    /// A stream that emits `value` then completes.
    pub fn just(value: T) -> Self {
        Self::new(stream::iter([Signal::Next(value), Signal::Complete]))
    }

    /// A stream that completes immediately.
    pub fn empty() -> Self {
        Self::new(stream::iter([Signal::Complete]))
    }

    /// A stream that fails immediately.
    pub fn error(error: RefluxError) -> Self {
        Self::new(stream::iter([Signal::Error(error)]))
    }
}

impl<T> SignalStream<T> {
    /// Returns `true` once the terminal signal has been yielded.
    pub fn is_terminated(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T> Stream for SignalStream<T> {
    type Item = Signal<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(inner) = self.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match inner.poll_next_unpin(cx) {
            Poll::Ready(Some(signal)) => {
                if signal.is_terminal() {
                    self.inner = None;
                }
                Poll::Ready(Some(signal))
            }
            Poll::Ready(None) => {
                self.inner = None;
                Poll::Ready(Some(Signal::Complete))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> FusedStream for SignalStream<T> {
    fn is_terminated(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T> fmt::Debug for SignalStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalStream")
            .field("terminated", &self.inner.is_none())
            .finish()
    }
}
