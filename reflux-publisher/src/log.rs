// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::hooks::OnCancel;
use crate::source::{from_open, Source};
use futures::stream::StreamExt;
use reflux_core::{Element, Signal, SignalStream};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Default category of the `log` stage.
pub const DEFAULT_LOG_CATEGORY: &str = "reflux";

#[cfg(feature = "tracing")]
fn emit(category: &str, event: fmt::Arguments<'_>) {
    tracing::info!(category, "{}", event);
}

#[cfg(not(feature = "tracing"))]
fn emit(category: &str, event: fmt::Arguments<'_>) {
    println!("[{category}] {event}");
}

/// Reports every lifecycle point of the execution to the log sink.
///
/// Signals are passed through unchanged and without delay.
pub(crate) fn log<T>(upstream: Source<T>, category: impl Into<String>) -> Source<T>
where
    T: Element + Debug,
{
    let category: Arc<str> = Arc::from(category.into());
    from_open(move |subscription| {
        let on_request = Arc::clone(&category);
        subscription.on_request(move |demand| emit(&on_request, format_args!("request({demand})")));

        let stream = upstream.open(subscription);
        emit(&category, format_args!("onSubscribe()"));

        let on_signal = Arc::clone(&category);
        let signals = stream.map(move |signal: Signal<T>| {
            emit(&on_signal, format_args!("{signal}"));
            signal
        });

        let on_cancel = Arc::clone(&category);
        SignalStream::new(OnCancel {
            inner: SignalStream::new(signals),
            hook: Some(Arc::new(move || emit(&on_cancel, format_args!("cancel()")))),
        })
    })
}
