// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::{Many, Single};
use reflux_test_utils::TestError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_into_many_keeps_value() -> anyhow::Result<()> {
    let values = Single::just(7).into_many().collect().await?;

    assert_eq!(values, vec![7]);
    Ok(())
}

#[tokio::test]
async fn test_from_single_into_many() -> anyhow::Result<()> {
    let many: Many<&str> = Single::empty().into();

    assert!(many.collect().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_to_future_outcomes() -> anyhow::Result<()> {
    // Act
    let value = Single::just("A").to_future().await?;
    let empty = Single::<&str>::empty().to_future().await?;
    let failed = Single::<&str>::error(TestError::reflux("B")).to_future().await;

    // Assert
    assert_eq!(value, Some("A"));
    assert_eq!(empty, None);
    assert_eq!(
        failed.map_err(|e| e.to_string()),
        Err(TestError::reflux("B").to_string())
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_single_merge_with_orders_by_arrival() -> anyhow::Result<()> {
    let late = Single::just("late").delay_element(Duration::from_millis(100));

    let values = late.merge_with(Single::just("early")).collect().await?;

    assert_eq!(values, vec!["early", "late"]);
    Ok(())
}

#[tokio::test]
async fn test_defer_builds_publisher_per_subscribe() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let single = Single::defer(move || Single::just(counter.fetch_add(1, Ordering::SeqCst)));

    // Act
    let first = single.to_future().await?;
    let second = single.to_future().await?;

    // Assert
    assert_eq!(first, Some(0));
    assert_eq!(second, Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_from_future_runs_per_subscribe() -> anyhow::Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let single = Single::from_future(move || {
        let counter = counter.clone();
        async move { Ok(counter.fetch_add(1, Ordering::SeqCst) * 10) }
    });

    assert_eq!(single.to_future().await?, Some(0));
    assert_eq!(single.to_future().await?, Some(10));
    Ok(())
}
