// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{executor::Executor, timer::Timer};

/// Pairs the timer and executor of one async runtime.
pub trait Runtime: Clone + Default + Send + Sync + 'static {
    type Timer: Timer + Default;
    type Executor: Executor + Default;

    fn timer(&self) -> Self::Timer {
        Self::Timer::default()
    }

    fn executor(&self) -> Self::Executor {
        Self::Executor::default()
    }
}
