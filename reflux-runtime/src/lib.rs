// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer and executor abstraction for the Reflux reactive engine.
//!
//! The engine only needs two things from an async runtime: "resume after a
//! duration" ([`timer::Timer`]) and "run this on a worker" ([`executor::Executor`]).
//! The `runtime-tokio` feature (enabled by default) provides both on top of tokio.

pub mod executor;
pub mod impls;
pub mod runtime;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioExecutor, TokioRuntime, TokioTimer};

/// Runtime used by the convenience entry points of the other crates.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;
