// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, Source};
use futures::stream::{self, StreamExt};
use reflux_core::{Element, Signal, SignalStream};

/// Gathers every value into one `Vec` emitted on completion.
pub(crate) fn collect_list<T: Element>(upstream: Source<T>) -> Source<Vec<T>> {
    from_open(move |subscription| {
        let mut signals = upstream.open(subscription);
        let gathered = async move {
            let mut values = Vec::new();
            while let Some(signal) = signals.next().await {
                match signal {
                    Signal::Next(value) => values.push(value),
                    Signal::Error(error) => return Signal::Error(error),
                    Signal::Complete => break,
                }
            }
            Signal::Next(values)
        };
        SignalStream::new(stream::once(gathered))
    })
}
