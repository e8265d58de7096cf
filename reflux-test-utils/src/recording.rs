// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::helpers::DEFAULT_TIMEOUT;
use reflux_core::{Element, Publisher, RefluxError, Subscription};
use reflux_exec::{Disposable, SubscribeExt, Subscriber};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::timeout;

/// One observation made by a recording subscriber.
#[derive(Debug)]
pub enum Event<T> {
    Subscribed,
    Next(T),
    Error(RefluxError),
    Complete,
}

impl<T> Event<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Error(_) | Event::Complete)
    }
}

// Errors compare by message so expected sequences can be written inline.
impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Subscribed, Event::Subscribed) | (Event::Complete, Event::Complete) => true,
            (Event::Next(a), Event::Next(b)) => a == b,
            (Event::Error(a), Event::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// A running subscription recording everything it observes.
#[derive(Debug)]
pub struct Recording<T> {
    events: UnboundedReceiver<Event<T>>,
    disposable: Disposable,
}

/// Subscribes to `publisher` with unbounded demand and records its signals.
pub fn record<T, P>(publisher: &P) -> Recording<T>
where
    T: Element,
    P: Publisher<T>,
{
    subscribe_recording(publisher, Subscriber::new())
}

/// Subscribes to `publisher` without requesting anything.
///
/// Demand is issued through [`Recording::subscription`].
pub fn record_manual<T, P>(publisher: &P) -> Recording<T>
where
    T: Element,
    P: Publisher<T>,
{
    subscribe_recording(publisher, Subscriber::new().manual_demand())
}

fn subscribe_recording<T, P>(publisher: &P, subscriber: Subscriber<T>) -> Recording<T>
where
    T: Element,
    P: Publisher<T>,
{
    let (tx, rx) = unbounded_channel();
    let on_subscribe = tx.clone();
    let on_next = tx.clone();
    let on_error = tx.clone();
    let subscriber = subscriber
        .on_subscribe(move |_| {
            let _ = on_subscribe.send(Event::Subscribed);
        })
        .on_next(move |value| {
            let _ = on_next.send(Event::Next(value));
        })
        .on_error(move |error| {
            let _ = on_error.send(Event::Error(error));
        })
        .on_complete(move || {
            let _ = tx.send(Event::Complete);
        });

    Recording {
        events: rx,
        disposable: publisher.subscribe(subscriber),
    }
}

impl<T: Element> Recording<T> {
    /// Next observed event, panicking after [`DEFAULT_TIMEOUT`].
    ///
    /// Returns `None` once the execution ended and every event was read.
    pub async fn next_event(&mut self) -> Option<Event<T>> {
        match timeout(DEFAULT_TIMEOUT, self.events.recv()).await {
            Ok(event) => event,
            Err(_) => panic!("Timeout waiting for the next event"),
        }
    }

    /// Every event up to and including the terminal one.
    ///
    /// Panics if the sequence does not terminate within [`DEFAULT_TIMEOUT`].
    pub async fn events(mut self) -> Vec<Event<T>> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            let terminal = event.is_terminal();
            events.push(event);
            if terminal {
                break;
            }
        }
        events
    }

    /// The values observed until the terminal event.
    pub async fn values(self) -> Vec<T> {
        self.events()
            .await
            .into_iter()
            .filter_map(|event| match event {
                Event::Next(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn subscription(&self) -> &Subscription {
        self.disposable.subscription()
    }

    pub fn cancel(&self) {
        self.disposable.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposable.is_disposed()
    }
}
