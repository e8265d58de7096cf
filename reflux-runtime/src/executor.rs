// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::future::Future;

/// "Run this on a worker" provider.
///
/// Subscriptions are driven by a task handed to [`spawn`](Executor::spawn); the
/// executor decides where it runs (thread pool, single-threaded event loop, ...).
pub trait Executor: Clone + Send + Sync + Debug + 'static {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
