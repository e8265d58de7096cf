// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, open_inner, Source};
use futures::future;
use futures::stream::{self, StreamExt};
use reflux_core::{Element, SignalStream};
use std::sync::Arc;

/// Runs all `sources` concurrently, interleaving values by arrival.
///
/// Completes when every source completed. The first error terminates the
/// sequence and drops (cancels) the other sources.
pub(crate) fn merge<T: Element>(sources: Vec<Source<T>>) -> Source<T> {
    let sources: Arc<[Source<T>]> = sources.into();
    from_open(move |_| {
        let opened = sources.iter().map(|source| open_inner(&**source));
        let merged = stream::select_all(opened).filter(|signal| future::ready(!signal.is_complete()));
        SignalStream::new(merged)
    })
}
