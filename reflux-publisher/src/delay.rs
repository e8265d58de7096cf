// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::{from_open, Source};
use futures::stream::{Stream, StreamExt};
use pin_project::pin_project;
use reflux_core::{Element, Signal, SignalStream};
use reflux_runtime::timer::Timer;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use std::time::Duration;

/// Shifts every value by `duration`, measured from the moment it is received.
///
/// The next upstream value is pulled only once the current one was emitted, so
/// values of an eager upstream leave one `duration` apart. Errors and
/// completion are forwarded as soon as they are received.
pub(crate) fn delay_elements<T, TM>(upstream: Source<T>, duration: Duration, timer: TM) -> Source<T>
where
    T: Element,
    TM: Timer,
{
    from_open(move |subscription| {
        SignalStream::new(DelayStream {
            upstream: upstream.open(subscription),
            timer: timer.clone(),
            duration,
            sleep: None,
            pending: None,
        })
    })
}

#[pin_project]
struct DelayStream<T, TM: Timer> {
    upstream: SignalStream<T>,
    timer: TM,
    duration: Duration,
    #[pin]
    sleep: Option<TM::Sleep>,
    pending: Option<T>,
}

impl<T, TM: Timer> Stream for DelayStream<T, TM> {
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                ready!(sleep.poll(cx));
                this.sleep.set(None);
                if let Some(value) = this.pending.take() {
                    return Poll::Ready(Some(Signal::Next(value)));
                }
            }

            match ready!(this.upstream.poll_next_unpin(cx)) {
                Some(Signal::Next(value)) => {
                    *this.pending = Some(value);
                    this.sleep.set(Some(this.timer.sleep_future(*this.duration)));
                }
                other => return Poll::Ready(other),
            }
        }
    }
}
