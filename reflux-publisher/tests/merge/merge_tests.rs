// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::{Many, Single};
use reflux_test_utils::{record, timed_range, Event, TestError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_merge_interleaves_by_arrival() -> anyhow::Result<()> {
    // Arrange
    let slow = timed_range(1, 3, Duration::from_millis(100)).map(|v| format!("slow{v}"));
    let fast = timed_range(1, 3, Duration::from_millis(60)).map(|v| format!("fast{v}"));

    // Act
    let values = Many::merge(vec![slow, fast]).collect().await?;

    // Assert
    assert_eq!(
        values,
        vec!["fast1", "slow1", "fast2", "fast3", "slow2", "slow3"]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_merge_runs_sources_concurrently() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();

    // Act
    let values = timed_range(1, 5, Duration::from_millis(100))
        .merge_with(timed_range(6, 5, Duration::from_millis(100)))
        .collect()
        .await?;

    // Assert
    assert_eq!(values.len(), 10);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(700), "{elapsed:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_merge_completes_after_last_source() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let merged = Many::merge(vec![
        Many::range(1, 2),
        timed_range(3, 1, Duration::from_millis(300)),
    ]);

    // Act
    let values = merged.collect().await?;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);
    assert!(start.elapsed() >= Duration::from_millis(300));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_merge_error_cancels_other_sources() -> anyhow::Result<()> {
    // Arrange
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    let long = timed_range(1, 10, Duration::from_millis(100))
        .do_on_cancel(move || flag.store(true, Ordering::SeqCst));
    let failing = Single::just(())
        .delay_element(Duration::from_millis(250))
        .flat_map_many(|_| Many::<i32>::error(TestError::reflux("A")));

    // Act
    let events = record(&long.merge_with(failing)).events().await;

    // Assert
    assert_eq!(
        events,
        vec![
            Event::Subscribed,
            Event::Next(1),
            Event::Next(2),
            Event::Error(TestError::reflux("A"))
        ]
    );
    assert!(cancelled.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn test_merge_of_nothing_completes() -> anyhow::Result<()> {
    let events = record(&Many::<i32>::merge(Vec::new())).events().await;

    assert_eq!(events, vec![Event::Subscribed, Event::Complete]);
    Ok(())
}
