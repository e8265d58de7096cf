// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The terminal consumer of a publisher chain.
//!
//! A [`Subscriber`] is a plain configuration value: one optional callback per
//! lifecycle point plus a [`SubscribeConfig`]. It is moved into the execution
//! started by `subscribe` and owned by it from then on.

use reflux_core::{Demand, RefluxError, Subscription};
use std::fmt;

/// What happens to an error that reaches a subscriber without an error callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// The error is logged and dropped; the execution ends normally.
    #[default]
    Lenient,
    /// The error is surfaced through [`Disposable::join`](crate::Disposable::join).
    Strict,
}

/// Per-subscription settings carried by a [`Subscriber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribeConfig {
    /// Demand requested right after `on_subscribe`; `None` leaves requesting to
    /// the `on_subscribe` callback.
    pub initial_request: Option<Demand>,
    /// Handling of errors without an error callback.
    pub error_mode: ErrorMode,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        Self {
            initial_request: Some(Demand::Unbounded),
            error_mode: ErrorMode::Lenient,
        }
    }
}

type OnSubscribe = Box<dyn FnOnce(&Subscription) + Send>;
type OnNext<T> = Box<dyn FnMut(T) + Send>;
type OnError = Box<dyn FnOnce(RefluxError) + Send>;
type OnComplete = Box<dyn FnOnce() + Send>;

/// Callback set receiving the signals of one subscription.
///
/// # Example
///
/// ```
/// use reflux_exec::Subscriber;
///
/// let subscriber = Subscriber::new()
///     .on_next(|value: i32| println!("{value}"))
///     .on_error(|err| eprintln!("Error: {err}"))
///     .on_complete(|| println!("Done"));
/// # drop(subscriber);
/// ```
pub struct Subscriber<T> {
    on_subscribe: Option<OnSubscribe>,
    on_next: Option<OnNext<T>>,
    on_error: Option<OnError>,
    on_complete: Option<OnComplete>,
    config: SubscribeConfig,
}

impl<T> Subscriber<T> {
    /// A subscriber with no callbacks requesting unbounded demand.
    pub fn new() -> Self {
        Self {
            on_subscribe: None,
            on_next: None,
            on_error: None,
            on_complete: None,
            config: SubscribeConfig::default(),
        }
    }

    /// Shorthand for a subscriber with only a value callback.
    pub fn from_fn<F>(on_next: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        Self::new().on_next(on_next)
    }

    /// Shorthand for a subscriber with value, error and completion callbacks.
    pub fn with_handlers<N, E, C>(on_next: N, on_error: E, on_complete: C) -> Self
    where
        N: FnMut(T) + Send + 'static,
        E: FnOnce(RefluxError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        Self::new()
            .on_next(on_next)
            .on_error(on_error)
            .on_complete(on_complete)
    }

    /// Called once with the subscription, before any demand is requested.
    #[must_use]
    pub fn on_subscribe<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Subscription) + Send + 'static,
    {
        self.on_subscribe = Some(Box::new(f));
        self
    }

    /// Called for every value, in order.
    #[must_use]
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.on_next = Some(Box::new(f));
        self
    }

    /// Called at most once, when the sequence fails.
    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RefluxError) + Send + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Called at most once, when the sequence completes.
    #[must_use]
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Demand requested right after `on_subscribe`.
    #[must_use]
    pub fn request_on_subscribe(mut self, demand: Demand) -> Self {
        self.config.initial_request = Some(demand);
        self
    }

    /// Leaves all requesting to the `on_subscribe` callback.
    #[must_use]
    pub fn manual_demand(mut self) -> Self {
        self.config.initial_request = None;
        self
    }

    /// Surface errors without an error callback through `Disposable::join`.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.config.error_mode = ErrorMode::Strict;
        self
    }

    /// Settings of this subscriber.
    pub fn config(&self) -> &SubscribeConfig {
        &self.config
    }

    pub(crate) fn subscribed(&mut self, subscription: &Subscription) {
        if let Some(on_subscribe) = self.on_subscribe.take() {
            on_subscribe(subscription);
        }
    }

    pub(crate) fn next(&mut self, value: T) {
        if let Some(on_next) = self.on_next.as_mut() {
            on_next(value);
        }
    }

    /// Delivers the error; returns it back when there is no callback for it.
    pub(crate) fn error(&mut self, error: RefluxError) -> Option<RefluxError> {
        match self.on_error.take() {
            Some(on_error) => {
                on_error(error);
                None
            }
            None => Some(error),
        }
    }

    pub(crate) fn complete(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl<T> Default for Subscriber<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("on_subscribe", &self.on_subscribe.is_some())
            .field("on_next", &self.on_next.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("config", &self.config)
            .finish()
    }
}
