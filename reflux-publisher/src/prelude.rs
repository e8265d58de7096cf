// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and subscribe to publisher chains.

pub use crate::{Many, Single};
pub use reflux_core::{Demand, Publisher, RefluxError, Signal, Subscription};
pub use reflux_exec::{Disposable, SubscribeExt, Subscriber};
