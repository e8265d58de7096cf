// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub(crate) mod implementation;

use crate::disposable::Disposable;
use crate::subscriber::Subscriber;
use async_trait::async_trait;
use futures::channel::oneshot;
use implementation::{panic_error, run};
use parking_lot::Mutex;
use reflux_core::{Element, Publisher, RefluxError, Result, Signal, SignalStream, Subscription};
use reflux_runtime::executor::Executor;
use reflux_runtime::runtime::Runtime;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Extension trait starting executions of any [`Publisher`].
///
/// Every call starts a fresh, independent execution (publishers are cold).
#[async_trait]
pub trait SubscribeExt<T: Element>: Publisher<T> + Sized {
    /// Subscribes on the given executor.
    ///
    /// Runs synchronously up to the first request: the chain is opened (firing
    /// `do_on_subscribe` observers), the subscriber's `on_subscribe` callback runs,
    /// and its initial demand is requested (firing `do_on_request` observers).
    /// Signals are then delivered from a task spawned on `executor`.
    ///
    /// A panic raised while opening the chain or inside an operator is delivered
    /// as an error signal.
    fn subscribe_on<E: Executor>(&self, subscriber: Subscriber<T>, executor: &E) -> Disposable {
        let mut subscriber = subscriber;
        let subscription = Subscription::new();
        let stream = catch_unwind(AssertUnwindSafe(|| self.open(&subscription)))
            .unwrap_or_else(|payload| SignalStream::error(panic_error(payload.as_ref())));

        subscriber.subscribed(&subscription);
        if let Some(demand) = subscriber.config().initial_request {
            subscription.request_demand(demand);
        }

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let driven = subscription.clone();
        executor.spawn(async move {
            let outcome = run(stream, subscriber, driven).await;
            let _ = outcome_tx.send(outcome);
        });

        Disposable::new(subscription, outcome_rx)
    }

    /// Subscribes on the executor of `runtime`.
    fn subscribe_in<R: Runtime>(&self, subscriber: Subscriber<T>, runtime: &R) -> Disposable {
        self.subscribe_on(subscriber, &runtime.executor())
    }

    /// Subscribes on the default runtime's executor.
    #[cfg(feature = "runtime-tokio")]
    fn subscribe(&self, subscriber: Subscriber<T>) -> Disposable {
        self.subscribe_in(subscriber, &reflux_runtime::DefaultRuntime::default())
    }

    /// Subscribes with unbounded demand and waits for every signal of one execution.
    ///
    /// The returned sequence always ends with its terminal signal.
    async fn collect_signals_on<E: Executor>(&self, executor: &E) -> Vec<Signal<T>> {
        let signals = Arc::new(Mutex::new(Vec::new()));
        let on_next = Arc::clone(&signals);
        let on_error = Arc::clone(&signals);
        let on_complete = Arc::clone(&signals);

        let subscriber = Subscriber::new()
            .on_next(move |value| on_next.lock().push(Signal::Next(value)))
            .on_error(move |error| on_error.lock().push(Signal::Error(error)))
            .on_complete(move || on_complete.lock().push(Signal::Complete));

        if let Err(error) = self.subscribe_on(subscriber, executor).join().await {
            signals.lock().push(Signal::Error(error));
        }

        let collected = std::mem::take(&mut *signals.lock());
        collected
    }

    /// Like [`collect_signals_on`](Self::collect_signals_on) with the default executor.
    #[cfg(feature = "runtime-tokio")]
    async fn collect_signals(&self) -> Vec<Signal<T>> {
        let executor = reflux_runtime::DefaultRuntime::default().executor();
        self.collect_signals_on(&executor).await
    }

    /// Waits for all values of one execution.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence.
    #[cfg(feature = "runtime-tokio")]
    async fn collect_values(&self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        for signal in self.collect_signals().await {
            match signal {
                Signal::Next(value) => values.push(value),
                Signal::Error(error) => return Err(error),
                Signal::Complete => break,
            }
        }
        Ok(values)
    }

    /// Waits for the first value of one execution, cancelling after it.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence before a value arrived.
    #[cfg(feature = "runtime-tokio")]
    async fn first_value(&self) -> Result<Option<T>> {
        let (value_tx, value_rx) = oneshot::channel();
        let value_tx = Arc::new(Mutex::new(Some(value_tx)));
        let on_next = Arc::clone(&value_tx);
        let on_error = Arc::clone(&value_tx);
        let on_complete = Arc::clone(&value_tx);

        let subscriber = Subscriber::new()
            .request_on_subscribe(reflux_core::Demand::Bounded(1))
            .on_next(move |value| {
                if let Some(tx) = on_next.lock().take() {
                    let _ = tx.send(Ok(Some(value)));
                }
            })
            .on_error(move |error| {
                if let Some(tx) = on_error.lock().take() {
                    let _ = tx.send(Err(error));
                }
            })
            .on_complete(move || {
                if let Some(tx) = on_complete.lock().take() {
                    let _ = tx.send(Ok(None));
                }
            });

        let disposable = self.subscribe(subscriber);
        let outcome = value_rx.await.unwrap_or_else(|_| {
            Err(RefluxError::stream_error(
                "subscription ended without a terminal signal",
            ))
        });
        disposable.cancel();
        outcome
    }
}

impl<T: Element, P: Publisher<T>> SubscribeExt<T> for P {}
