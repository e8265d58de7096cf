// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect stages observing lifecycle points without altering the signals.
//!
//! Hooks run before the observed signal reaches the next stage downstream.
//! A hook returning an error replaces the sequence with
//! [`RefluxError::HookError`], dropping (and so cancelling) the upstream.

use crate::source::{from_open, Source};
use futures::stream::{Stream, StreamExt};
use reflux_core::{Demand, Element, HookOutcome, RefluxError, Signal, SignalStream, Subscription};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

pub(crate) fn do_on_subscribe<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn(&Subscription) -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    from_open(move |subscription| {
        // Upstream stages see the subscription first.
        let stream = upstream.open(subscription);
        match hook(subscription).into_hook_result("do_on_subscribe") {
            Ok(()) => stream,
            Err(error) => SignalStream::error(error),
        }
    })
}

pub(crate) fn do_on_request<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn(Demand) -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    let hook = Arc::new(hook);
    from_open(move |subscription| {
        // Registered before opening upstream: requests travel from downstream up.
        let hook = Arc::clone(&hook);
        subscription.on_request(move |demand| hook(demand));
        upstream.open(subscription)
    })
}

pub(crate) fn do_on_next<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    let hook = Arc::new(hook);
    from_open(move |subscription| {
        let hook = Arc::clone(&hook);
        SignalStream::new(upstream.open(subscription).map(move |signal| match signal {
            Signal::Next(value) => match hook(&value).into_hook_result("do_on_next") {
                Ok(()) => Signal::Next(value),
                Err(error) => Signal::Error(error),
            },
            terminal => terminal,
        }))
    })
}

/// Observes the outcome of a single-valued sequence: `Some(value)` on its value,
/// `None` when it completes empty.
pub(crate) fn do_on_success<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn(Option<&T>) -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    let hook = Arc::new(hook);
    from_open(move |subscription| {
        let hook = Arc::clone(&hook);
        SignalStream::new(upstream.open(subscription).scan(false, move |seen, signal| {
            let signal = match signal {
                Signal::Next(value) => {
                    *seen = true;
                    match hook(Some(&value)).into_hook_result("do_on_success") {
                        Ok(()) => Signal::Next(value),
                        Err(error) => Signal::Error(error),
                    }
                }
                Signal::Complete if !*seen => match hook(None).into_hook_result("do_on_success") {
                    Ok(()) => Signal::Complete,
                    Err(error) => Signal::Error(error),
                },
                other => other,
            };
            futures::future::ready(Some(signal))
        }))
    })
}

pub(crate) fn do_on_error<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn(&RefluxError) -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    let hook = Arc::new(hook);
    from_open(move |subscription| {
        let hook = Arc::clone(&hook);
        SignalStream::new(upstream.open(subscription).map(move |signal| match signal {
            Signal::Error(error) => match hook(&error).into_hook_result("do_on_error") {
                Ok(()) => Signal::Error(error),
                Err(hook_error) => Signal::Error(hook_error),
            },
            other => other,
        }))
    })
}

pub(crate) fn do_on_complete<T, F, R>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn() -> R + Send + Sync + 'static,
    R: HookOutcome,
{
    let hook = Arc::new(hook);
    from_open(move |subscription| {
        let hook = Arc::clone(&hook);
        SignalStream::new(upstream.open(subscription).map(move |signal| match signal {
            Signal::Complete => match hook().into_hook_result("do_on_complete") {
                Ok(()) => Signal::Complete,
                Err(error) => Signal::Error(error),
            },
            other => other,
        }))
    })
}

/// Runs `hook` when the execution is dropped before its terminal signal.
pub(crate) fn do_on_cancel<T, F>(upstream: Source<T>, hook: F) -> Source<T>
where
    T: Element,
    F: Fn() + Send + Sync + 'static,
{
    let hook: Arc<dyn Fn() + Send + Sync> = Arc::new(hook);
    from_open(move |subscription| {
        SignalStream::new(OnCancel {
            inner: upstream.open(subscription),
            hook: Some(Arc::clone(&hook)),
        })
    })
}

/// Stream calling its hook on drop unless a terminal signal went through.
pub(crate) struct OnCancel<T> {
    pub(crate) inner: SignalStream<T>,
    pub(crate) hook: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl<T> Stream for OnCancel<T> {
    type Item = Signal<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let polled = self.inner.poll_next_unpin(cx);
        if let Poll::Ready(Some(signal)) = &polled {
            if signal.is_terminal() {
                self.hook = None;
            }
        }
        polled
    }
}

impl<T> Drop for OnCancel<T> {
    fn drop(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }
}
