// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::signal_stream::SignalStream;
use crate::subscription::Subscription;
use std::sync::Arc;

/// Bounds shared by every element flowing through a publisher chain.
pub trait Element: Send + 'static {}

impl<T: Send + 'static> Element for T {}

/// An immutable, re-subscribable description of a signal sequence.
///
/// Publishers are cold: every call to [`open`](Publisher::open) starts a fresh,
/// independent execution whose state lives entirely in the returned
/// [`SignalStream`]. A publisher never stores execution state itself.
///
/// `open` runs synchronously during subscribe. Stages use it to register
/// request observers on the `subscription` and to open their upstream; the
/// signals themselves are produced when the returned stream is polled.
pub trait Publisher<T: Element>: Send + Sync + 'static {
    /// Starts a new execution bound to `subscription`.
    fn open(&self, subscription: &Subscription) -> SignalStream<T>;
}

impl<T: Element, P: Publisher<T> + ?Sized> Publisher<T> for Arc<P> {
    fn open(&self, subscription: &Subscription) -> SignalStream<T> {
        (**self).open(subscription)
    }
}

impl<T: Element, P: Publisher<T> + ?Sized> Publisher<T> for Box<P> {
    fn open(&self, subscription: &Subscription) -> SignalStream<T> {
        (**self).open(subscription)
    }
}
