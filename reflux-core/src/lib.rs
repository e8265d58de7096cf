// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core primitives of the Reflux reactive engine.
//!
//! - [`Signal`] - the `Next` / `Error` / `Complete` vocabulary
//! - [`SignalStream`] - one running execution, terminal-once by construction
//! - [`Publisher`] - cold, re-subscribable producer of signal sequences
//! - [`Subscription`] and [`Demand`] - cancellation and demand accounting
//! - [`RefluxError`] - root error type

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod hook;
pub mod publisher;
pub mod signal;
pub mod signal_stream;
pub mod subscription;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{RefluxError, Result};
pub use self::hook::HookOutcome;
pub use self::publisher::{Element, Publisher};
pub use self::signal::Signal;
pub use self::signal_stream::SignalStream;
pub use self::subscription::{Demand, Subscription};
