// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscribers and the execution driver of the Reflux reactive engine.
//!
//! [`SubscribeExt`] turns any [`Publisher`](reflux_core::Publisher) into a running
//! execution: it opens the chain, hands the [`Subscription`](reflux_core::Subscription)
//! to the [`Subscriber`], and spawns the driver that delivers signals as demand
//! allows. The returned [`Disposable`] cancels or awaits that execution.

#[macro_use]
mod logging;

pub mod disposable;
pub mod subscribe;
pub mod subscriber;

pub use disposable::Disposable;
pub use subscribe::SubscribeExt;
pub use subscriber::{ErrorMode, SubscribeConfig, Subscriber};
