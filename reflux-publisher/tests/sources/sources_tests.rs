// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_publisher::{Many, Single};
use reflux_test_utils::{record, Event, TestError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn test_single_just_emits_value_then_completes() -> anyhow::Result<()> {
    let events = record(&Single::just("A")).events().await;

    assert_eq!(
        events,
        vec![Event::Subscribed, Event::Next("A"), Event::Complete]
    );
    Ok(())
}

#[tokio::test]
async fn test_single_empty_completes() -> anyhow::Result<()> {
    let events = record(&Single::<i32>::empty()).events().await;

    assert_eq!(events, vec![Event::Subscribed, Event::Complete]);
    Ok(())
}

#[tokio::test]
async fn test_single_error_fails() -> anyhow::Result<()> {
    let events = record(&Single::<i32>::error(TestError::reflux("A")))
        .events()
        .await;

    assert_eq!(
        events,
        vec![Event::Subscribed, Event::Error(TestError::reflux("A"))]
    );
    Ok(())
}

#[tokio::test]
async fn test_range_emits_ascending_then_completes() -> anyhow::Result<()> {
    let events = record(&Many::range(1, 5)).events().await;

    assert_eq!(
        events,
        vec![
            Event::Subscribed,
            Event::Next(1),
            Event::Next(2),
            Event::Next(3),
            Event::Next(4),
            Event::Next(5),
            Event::Complete
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_range_with_zero_count_is_empty() -> anyhow::Result<()> {
    assert!(Many::range(10, 0).collect().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_range_up_to_max_is_allowed() -> anyhow::Result<()> {
    let values = Many::range(i32::MAX - 1, 2).collect().await?;

    assert_eq!(values, vec![i32::MAX - 1, i32::MAX]);
    Ok(())
}

#[tokio::test]
async fn test_range_overflow_fails_on_subscribe() -> anyhow::Result<()> {
    let result = Many::range(i32::MAX, 2).collect().await;

    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_many_just_and_from_iter() -> anyhow::Result<()> {
    assert_eq!(Many::just(vec!["a", "b"]).collect().await?, vec!["a", "b"]);
    assert_eq!(Many::from_iter(1..=3).collect().await?, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_many_empty_and_error() -> anyhow::Result<()> {
    let empty = record(&Many::<i32>::empty()).events().await;
    let failed = record(&Many::<i32>::error(TestError::reflux("E")))
        .events()
        .await;

    assert_eq!(empty, vec![Event::Subscribed, Event::Complete]);
    assert_eq!(
        failed,
        vec![Event::Subscribed, Event::Error(TestError::reflux("E"))]
    );
    Ok(())
}

#[tokio::test]
async fn test_defer_builds_a_fresh_publisher_per_subscribe() -> anyhow::Result<()> {
    // Arrange
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let deferred = Single::defer(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        Single::just(n)
    });

    // Act
    let first = deferred.to_future().await?;
    let second = deferred.to_future().await?;

    // Assert
    assert_eq!(first, Some(0));
    assert_eq!(second, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_publisher_is_cold() -> anyhow::Result<()> {
    // Arrange
    let subscribed = Arc::new(Mutex::new(0));
    let counter = subscribed.clone();
    let many = Many::range(1, 2).do_on_subscribe(move |_| *counter.lock() += 1);

    // Act & Assert
    assert_eq!(*subscribed.lock(), 0);
    many.collect().await?;
    many.collect().await?;
    assert_eq!(*subscribed.lock(), 2);
    Ok(())
}

#[tokio::test]
async fn test_from_future_runs_per_subscribe() -> anyhow::Result<()> {
    let single = Single::from_future(|| async { Ok::<_, reflux_core::RefluxError>(21 * 2) });
    let failing = Single::<i32>::from_future(|| async { Err(TestError::reflux("no")) });

    assert_eq!(single.to_future().await?, Some(42));
    assert!(failing.to_future().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_many_defer_and_from_future() -> anyhow::Result<()> {
    let deferred = Many::defer(|| Many::range(1, 2));
    let future = Many::from_future(|| async { Ok(7) });

    assert_eq!(deferred.collect().await?, vec![1, 2]);
    assert_eq!(future.collect().await?, vec![7]);
    Ok(())
}
