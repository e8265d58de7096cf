// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::test_error::TestError;
use reflux_core::Element;
use reflux_publisher::Many;
use std::time::Duration;

/// `count` integers from `start`, each emitted `period` after the previous one.
pub fn timed_range(start: i32, count: u32, period: Duration) -> Many<i32> {
    Many::range(start, count).delay_elements(period)
}

/// Emits `values`, then fails with a [`TestError`] carrying `message`.
pub fn values_then_error<T>(values: Vec<T>, message: &str) -> Many<T>
where
    T: Element + Clone + Sync,
{
    Many::just(values).concat_with(Many::error(TestError::reflux(message)))
}
