// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, open_inner, Source};
use futures::future;
use futures::stream::{self, StreamExt};
use reflux_core::{Element, SignalStream};
use std::sync::Arc;

/// Runs `sources` one after the other.
///
/// A source is opened only once the previous one completed. The first error
/// terminates the sequence and the remaining sources are never opened.
pub(crate) fn concat<T: Element>(sources: Vec<Source<T>>) -> Source<T> {
    let sources: Arc<[Source<T>]> = sources.into();
    from_open(move |_| {
        let sources = Arc::clone(&sources);
        let sequential = stream::iter(0..sources.len())
            .flat_map(move |index| open_inner(&*sources[index]))
            .filter(|signal| future::ready(!signal.is_complete()));
        SignalStream::new(sequential)
    })
}
