// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull/cancel handle shared between a subscriber and the execution it started.
//!
//! A [`Subscription`] is created once per `subscribe` call and is the execution
//! context of that call: it carries the cancellation flag, the outstanding demand,
//! the `do_on_request` observers registered by the stages of the chain, and the
//! first fault raised outside of the signal flow (invalid demand, failing request hook).

use crate::cancellation_token::CancellationToken;
use crate::error::RefluxError;
use crate::hook::HookOutcome;
use event_listener::Event;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

const UNBOUNDED: u64 = u64::MAX;

/// Amount of elements requested by a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
    /// A finite number of elements
    Bounded(u64),
    /// No limit, the publisher may emit as fast as it can
    Unbounded,
}

impl Demand {
    const fn from_raw(raw: u64) -> Self {
        if raw == UNBOUNDED {
            Demand::Unbounded
        } else {
            Demand::Bounded(raw)
        }
    }

    const fn into_raw(self) -> u64 {
        match self {
            Demand::Bounded(n) => n,
            Demand::Unbounded => UNBOUNDED,
        }
    }

    /// Returns `true` for [`Demand::Unbounded`].
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Demand::Unbounded)
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Demand::Bounded(n) => write!(f, "{n}"),
            Demand::Unbounded => f.write_str("unbounded"),
        }
    }
}

type RequestHook = Arc<dyn Fn(Demand) -> crate::Result<()> + Send + Sync>;

/// Handle a subscriber holds on the execution started by `subscribe`.
///
/// Clones share the same state. Demand accounting saturates at
/// [`Demand::Unbounded`], which is sticky.
#[derive(Clone, Default)]
pub struct Subscription {
    inner: Arc<State>,
}

#[derive(Default)]
struct State {
    token: CancellationToken,
    requested: AtomicU64,
    demand_changed: Event,
    request_hooks: Mutex<Vec<RequestHook>>,
    fault: Mutex<Option<RefluxError>>,
    terminated: AtomicBool,
}

impl Subscription {
    /// Creates a subscription with no outstanding demand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `n` more elements.
    ///
    /// `request(0)` is a protocol violation: the subscription fails with
    /// [`RefluxError::InvalidDemand`] and the execution terminates with that error.
    pub fn request(&self, n: u64) {
        if n == 0 {
            self.fail(RefluxError::InvalidDemand { requested: 0 });
            return;
        }
        self.request_demand(Demand::Bounded(n));
    }

    /// Removes any limit on the number of elements.
    pub fn request_unbounded(&self) {
        self.request_demand(Demand::Unbounded);
    }

    /// Adds `demand` to the outstanding demand after notifying the request observers.
    ///
    /// No-op once the subscription is cancelled or terminated.
    pub fn request_demand(&self, demand: Demand) {
        if !self.is_active() {
            return;
        }

        // Hooks may request or register on this subscription again.
        let hooks = self.inner.request_hooks.lock().clone();
        let hook_result = hooks.iter().try_for_each(|hook| hook(demand));
        if let Err(error) = hook_result {
            self.fail(error);
            return;
        }

        let added = demand.into_raw();
        let _ = self
            .inner
            .requested
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if current == UNBOUNDED {
                    None
                } else {
                    Some(current.saturating_add(added))
                }
            });
        self.inner.demand_changed.notify(usize::MAX);
    }

    /// Currently outstanding demand.
    pub fn requested(&self) -> Demand {
        Demand::from_raw(self.inner.requested.load(Ordering::Acquire))
    }

    /// Consumes one unit of demand if any is outstanding.
    pub fn try_consume(&self) -> bool {
        self.inner
            .requested
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| match current {
                0 => None,
                UNBOUNDED => Some(UNBOUNDED),
                n => Some(n - 1),
            })
            .is_ok()
    }

    /// Waits until one unit of demand can be consumed.
    ///
    /// Returns `false` if the subscription is cancelled or failed while waiting.
    pub async fn acquire(&self) -> bool {
        loop {
            if !self.is_active() || self.has_fault() {
                return false;
            }
            if self.try_consume() {
                return true;
            }

            let listener = self.inner.demand_changed.listen();
            if !self.is_active() || self.has_fault() {
                return false;
            }
            if self.try_consume() {
                return true;
            }
            listener.await;
        }
    }

    /// Resolves once the subscription is cancelled or a fault is pending.
    ///
    /// Lets a driver stop waiting on its upstream as soon as there is nothing
    /// more to deliver but the fault.
    pub async fn interrupted(&self) {
        loop {
            if self.is_cancelled() || self.has_fault() {
                return;
            }
            let listener = self.inner.demand_changed.listen();
            if self.is_cancelled() || self.has_fault() {
                return;
            }
            listener.await;
        }
    }

    /// Cancels the subscription.
    ///
    /// Idempotent: cancelling an already cancelled or terminated subscription has
    /// no further effect.
    pub fn cancel(&self) {
        if self.inner.token.cancel() {
            self.inner.demand_changed.notify(usize::MAX);
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.inner.token.is_cancelled()
    }

    /// Token that resolves when the subscription is cancelled.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.token
    }

    /// Records a fault raised outside of the signal flow.
    ///
    /// Only the first fault is kept.
    pub fn fail(&self, error: RefluxError) {
        {
            let mut fault = self.inner.fault.lock();
            if fault.is_none() {
                *fault = Some(error);
            }
        }
        self.inner.demand_changed.notify(usize::MAX);
    }

    /// Returns `true` if a fault is waiting to be delivered.
    pub fn has_fault(&self) -> bool {
        self.inner.fault.lock().is_some()
    }

    /// Takes the pending fault, if any.
    pub fn take_fault(&self) -> Option<RefluxError> {
        self.inner.fault.lock().take()
    }

    /// Marks the subscription as terminated by a terminal signal.
    ///
    /// Returns `true` only for the first call.
    pub fn mark_terminated(&self) -> bool {
        let first = !self.inner.terminated.swap(true, Ordering::AcqRel);
        if first {
            self.inner.demand_changed.notify(usize::MAX);
        }
        first
    }

    /// Returns `true` once a terminal signal has been delivered.
    pub fn is_terminated(&self) -> bool {
        self.inner.terminated.load(Ordering::Acquire)
    }

    /// Returns `true` while the subscription is neither cancelled nor terminated.
    pub fn is_active(&self) -> bool {
        !self.is_cancelled() && !self.is_terminated()
    }

    /// Registers an observer invoked on every request, before demand is added.
    ///
    /// An observer returning an error fails the subscription with
    /// [`RefluxError::HookError`].
    pub fn on_request<F, R>(&self, hook: F)
    where
        F: Fn(Demand) -> R + Send + Sync + 'static,
        R: HookOutcome,
    {
        self.inner
            .request_hooks
            .lock()
            .push(Arc::new(move |demand| {
                hook(demand).into_hook_result("do_on_request")
            }));
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("requested", &self.requested())
            .field("cancelled", &self.is_cancelled())
            .field("terminated", &self.is_terminated())
            .finish()
    }
}
