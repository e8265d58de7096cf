// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{Element, Publisher, SignalStream, Subscription};
use std::sync::Arc;

/// Type-erased upstream shared by every stage built on top of it.
pub(crate) type Source<T> = Arc<dyn Publisher<T>>;

/// A publisher defined by its `open` function.
struct FnPublisher<F>(F);

impl<T, F> Publisher<T> for FnPublisher<F>
where
    T: Element,
    F: Fn(&Subscription) -> SignalStream<T> + Send + Sync + 'static,
{
    fn open(&self, subscription: &Subscription) -> SignalStream<T> {
        (self.0)(subscription)
    }
}

pub(crate) fn from_open<T, F>(open: F) -> Source<T>
where
    T: Element,
    F: Fn(&Subscription) -> SignalStream<T> + Send + Sync + 'static,
{
    Arc::new(FnPublisher(open))
}

/// Opens a publisher nested inside another execution with its own unbounded demand.
///
/// Used for flat-mapped inners, fallbacks and combinator sources. A request
/// observer of the inner failing turns the inner into an error.
pub(crate) fn open_inner<T: Element>(publisher: &dyn Publisher<T>) -> SignalStream<T> {
    let subscription = Subscription::new();
    let stream = publisher.open(&subscription);
    subscription.request_unbounded();

    match subscription.take_fault() {
        Some(fault) => {
            debug!("Inner publisher failed on request: {}", fault);
            SignalStream::error(fault)
        }
        None => stream,
    }
}
