// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::oneshot;
use reflux_core::{RefluxError, Result, Subscription};

/// Handle returned by `subscribe`.
///
/// Dropping a `Disposable` does not cancel the execution: like a fire-and-forget
/// subscription, it keeps running until its terminal signal. Call
/// [`cancel`](Self::cancel) to stop it early.
#[derive(Debug)]
pub struct Disposable {
    subscription: Subscription,
    outcome: oneshot::Receiver<Result<()>>,
}

impl Disposable {
    pub(crate) fn new(subscription: Subscription, outcome: oneshot::Receiver<Result<()>>) -> Self {
        Self {
            subscription,
            outcome,
        }
    }

    /// Cancels the execution. Idempotent.
    pub fn cancel(&self) {
        self.subscription.cancel();
    }

    /// Returns `true` once the execution was cancelled or reached its terminal signal.
    pub fn is_disposed(&self) -> bool {
        !self.subscription.is_active()
    }

    /// The subscription driving the execution, e.g. to request more elements.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Waits for the execution to end.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence when the subscriber has no
    /// error callback and runs in [`ErrorMode::Strict`](crate::ErrorMode::Strict),
    /// or a stream error if the driving task was dropped by its executor.
    pub async fn join(self) -> Result<()> {
        match self.outcome.await {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => Err(RefluxError::stream_error(
                "subscription task dropped before termination",
            )),
        }
    }
}
