// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use reflux_core::Signal;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Upper bound for waiting helpers before they give up and panic.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _signal = stream.next() => {
            panic!(
                "Unexpected signal emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Next signal of `stream`, panicking on end of stream or timeout.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Signal<T>
where
    S: Stream<Item = Signal<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(signal)) => signal,
        Ok(None) => panic!("Expected a signal but the stream ended"),
        Err(_) => panic!("Timeout waiting for a signal after {timeout_ms}ms"),
    }
}
