// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Reflux
//!
//! A reactive engine of deferred, cancellable publishers: [`Single`] emits at most
//! one value, [`Many`] any number, and both end with exactly one terminal signal.
//!
//! ## Overview
//!
//! Publishers are cold descriptions. Nothing runs until a [`Subscriber`] subscribes;
//! every subscribe starts a fresh execution with its own [`Subscription`], which
//! carries the subscriber's demand and its cancellation flag. Errors are ordinary
//! terminal signals that travel downstream until an `on_error_*` operator or the
//! subscriber consumes them.
//!
//! ## Quick Start
//!
//! ```rust
//! use reflux::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> reflux::Result<()> {
//!     let values = Many::range(1, 5)
//!         .flat_map(|i| Many::range(i * 10, 2))
//!         .collect()
//!         .await?;
//!     assert_eq!(values.len(), 10);
//!
//!     let recovered = Single::<&str>::error(RefluxError::stream_error("A"))
//!         .on_error_return("B")
//!         .to_future()
//!         .await?;
//!     assert_eq!(recovered, Some("B"));
//!     Ok(())
//! }
//! ```
//!
//! ## Subscribing with callbacks
//!
//! ```rust
//! use reflux::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> reflux::Result<()> {
//! let disposable = Many::range(1, 3).subscribe(
//!     Subscriber::new()
//!         .on_next(|v| println!("{v}"))
//!         .on_error(|e| eprintln!("Error: {e}"))
//!         .on_complete(|| println!("Completed")),
//! );
//! disposable.join().await?;
//! # Ok(())
//! # }
//! ```

pub use reflux_core::{
    CancellationToken, Demand, Element, HookOutcome, Publisher, RefluxError, Result, Signal,
    SignalStream, Subscription,
};
pub use reflux_exec::{Disposable, ErrorMode, SubscribeConfig, SubscribeExt, Subscriber};
pub use reflux_publisher::{Many, Single, DEFAULT_LOG_CATEGORY, FLAT_MAP_CONCURRENCY, ZIP_PREFETCH};
pub use reflux_runtime::{executor::Executor, runtime::Runtime, timer::Timer};

#[cfg(feature = "runtime-tokio")]
pub use reflux_runtime::{DefaultRuntime, TokioExecutor, TokioRuntime, TokioTimer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use reflux_core::{Demand, Publisher, RefluxError, Signal, Subscription};
    pub use reflux_exec::{Disposable, SubscribeExt, Subscriber};
    pub use reflux_publisher::{Many, Single};
}
