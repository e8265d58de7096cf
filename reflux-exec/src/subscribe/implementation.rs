// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::subscriber::{ErrorMode, Subscriber};
use futures::future::{select, Either};
use futures::{FutureExt, StreamExt};
use reflux_core::{Element, RefluxError, Result, Signal, SignalStream, Subscription};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::pin::pin;

// Runs `drive`, turning a panic raised by an operator or hook into an error signal.
//
// The panicking execution is dropped (cancelling its upstream) before the error
// is delivered. A panic inside a terminal callback is returned from `join`.
pub(crate) async fn run<T: Element>(
    stream: SignalStream<T>,
    mut subscriber: Subscriber<T>,
    subscription: Subscription,
) -> Result<()> {
    let driven = AssertUnwindSafe(drive(stream, &mut subscriber, subscription.clone()))
        .catch_unwind()
        .await;

    match driven {
        Ok(outcome) => outcome,
        Err(payload) => {
            let error = panic_error(payload.as_ref());
            if subscription.mark_terminated() {
                warn!("Execution panicked: {}", error);
                deliver_error(&mut subscriber, error)
            } else {
                error!("Terminal callback panicked: {}", error);
                Err(error)
            }
        }
    }
}

pub(crate) fn panic_error(payload: &(dyn Any + Send)) -> RefluxError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    RefluxError::stream_error(format!("panicked: {message}"))
}

// Drives one execution to its end.
//
// The upstream is polled ahead of demand by one signal, so terminal signals are
// delivered without outstanding demand while values wait for it. Returning drops
// `stream`, which cancels everything upstream.
async fn drive<T: Element>(
    mut stream: SignalStream<T>,
    subscriber: &mut Subscriber<T>,
    subscription: Subscription,
) -> Result<()> {
    loop {
        if let Some(fault) = subscription.take_fault() {
            warn!("Subscription failed outside of the signal flow: {}", fault);
            subscription.mark_terminated();
            return deliver_error(subscriber, fault);
        }
        if subscription.is_cancelled() {
            debug!("Subscription cancelled");
            return Ok(());
        }

        let signal = {
            let interrupted = pin!(subscription.interrupted());
            match select(stream.next(), interrupted).await {
                Either::Left((Some(signal), _)) => signal,
                Either::Left((None, _)) => return Ok(()),
                Either::Right(_) => continue,
            }
        };

        match signal {
            Signal::Next(value) => {
                if subscription.acquire().await {
                    subscriber.next(value);
                }
            }
            Signal::Error(error) => {
                subscription.mark_terminated();
                return deliver_error(subscriber, error);
            }
            Signal::Complete => {
                subscription.mark_terminated();
                subscriber.complete();
                return Ok(());
            }
        }
    }
}

fn deliver_error<T>(subscriber: &mut Subscriber<T>, error: RefluxError) -> Result<()> {
    let mode = subscriber.config().error_mode;
    match subscriber.error(error) {
        None => Ok(()),
        Some(unhandled) if mode == ErrorMode::Strict => Err(unhandled),
        Some(unhandled) => {
            error!("Error dropped, subscriber has no error callback: {}", unhandled);
            Ok(())
        }
    }
}
