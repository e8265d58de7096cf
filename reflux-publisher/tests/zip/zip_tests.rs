// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::{Many, Single, ZIP_PREFETCH};
use reflux_test_utils::{record, timed_range, values_then_error, Event, TestError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_zip_waits_for_slowest_side() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let fast = timed_range(1, 5, Duration::from_millis(500));
    let slow = timed_range(1, 5, Duration::from_millis(1000));

    // Act
    let pairs = Many::zip(&fast, &slow).collect().await?;

    // Assert
    assert_eq!(pairs, vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(5000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(7500), "{elapsed:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zip_completes_with_shortest_side() -> anyhow::Result<()> {
    // Arrange
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    let long = timed_range(1, 10, Duration::from_millis(100))
        .do_on_cancel(move || flag.store(true, Ordering::SeqCst));
    let short = Many::just(vec!["a", "b", "c"]);

    // Act
    let pairs = short.zip_with(&long).collect().await?;

    // Assert
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    assert!(cancelled.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zip_fails_when_a_side_fails() -> anyhow::Result<()> {
    // Arrange
    let late_error = Single::just(())
        .delay_element(Duration::from_millis(100))
        .flat_map_many(|_| Many::<i32>::error(TestError::reflux("A")));
    let failing = timed_range(1, 2, Duration::from_millis(100)).concat_with(late_error);
    let other = timed_range(10, 5, Duration::from_millis(50));

    // Act
    let events = record(&Many::zip(&failing, &other)).events().await;

    // Assert
    assert_eq!(
        events,
        vec![
            Event::Subscribed,
            Event::Next((1, 10)),
            Event::Next((2, 11)),
            Event::Error(TestError::reflux("A"))
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_zip_error_discards_buffered_values() -> anyhow::Result<()> {
    let failing = values_then_error(vec![1], "A");
    let other = Many::range(10, 5);

    let events = record(&Many::zip(&failing, &other)).events().await;

    assert_eq!(
        events,
        vec![Event::Subscribed, Event::Error(TestError::reflux("A"))]
    );
    Ok(())
}

#[tokio::test]
async fn test_zip_all_combines_every_source() -> anyhow::Result<()> {
    // Arrange
    let sources = vec![Many::range(1, 3), Many::range(10, 3), Many::range(100, 4)];

    // Act
    let rows = Many::zip_all(sources).collect().await?;

    // Assert
    assert_eq!(
        rows,
        vec![vec![1, 10, 100], vec![2, 11, 101], vec![3, 12, 102]]
    );
    Ok(())
}

#[tokio::test]
async fn test_zip_all_of_nothing_completes() -> anyhow::Result<()> {
    let rows = Many::<Vec<i32>>::zip_all(Vec::new()).collect().await?;

    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_zip_with_combinator() -> anyhow::Result<()> {
    let names = Many::just(vec!["x", "y"]);
    let numbers = Many::range(1, 2);

    let values = Many::zip_with_combinator(&names, &numbers, |n, i| format!("{n}{i}"))
        .collect()
        .await?;

    assert_eq!(values, vec!["x1", "y2"]);
    Ok(())
}

#[tokio::test]
async fn test_single_zip_with() -> anyhow::Result<()> {
    let pair = Single::just("A").zip_with(&Single::just(1)).to_future().await?;
    let empty = Single::just("A")
        .zip_with(&Single::<i32>::empty())
        .to_future()
        .await?;

    assert_eq!(pair, Some(("A", 1)));
    assert_eq!(empty, None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zip_bounds_buffer_of_fast_side() -> anyhow::Result<()> {
    // Arrange
    let pulled = Arc::new(AtomicUsize::new(0));
    let counter = pulled.clone();
    let fast = Many::from_iter(0..10_000).do_on_next(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let slow = timed_range(0, 2, Duration::from_millis(100));

    // Act
    let pairs = Many::zip(&fast, &slow).collect().await?;

    // Assert
    assert_eq!(pairs.len(), 2);
    assert!(pulled.load(Ordering::SeqCst) <= ZIP_PREFETCH + 2);
    Ok(())
}
