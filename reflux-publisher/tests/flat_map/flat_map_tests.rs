// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::{Many, Single, FLAT_MAP_CONCURRENCY};
use reflux_test_utils::timed_range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn positions(values: &[i32], wanted: &[i32]) -> Vec<usize> {
    wanted
        .iter()
        .map(|w| values.iter().position(|v| v == w).unwrap())
        .collect()
}

#[tokio::test]
async fn test_flat_map_emits_every_inner_value() -> anyhow::Result<()> {
    // Act
    let values = Many::range(1, 5)
        .flat_map(|i| Many::range(i * 10, 2))
        .collect()
        .await?;

    // Assert
    assert_eq!(values.len(), 10);
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![10, 11, 20, 21, 30, 31, 40, 41, 50, 51]);
    for i in 1..=5 {
        let order = positions(&values, &[i * 10, i * 10 + 1]);
        assert!(order[0] < order[1], "inner {i} out of order: {values:?}");
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_flat_map_runs_inners_concurrently() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();

    // Act
    let values = Many::range(1, 3)
        .flat_map(|i| timed_range(i * 10, 2, Duration::from_millis(100)))
        .collect()
        .await?;

    // Assert
    assert_eq!(values.len(), 6);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(300), "{elapsed:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_flat_map_interleaves_by_arrival() -> anyhow::Result<()> {
    // Act
    let values = Many::just(vec![300u64, 100, 200])
        .flat_map(|ms| Single::just(ms).delay_element(Duration::from_millis(ms)))
        .collect()
        .await?;

    // Assert
    assert_eq!(values, vec![100, 200, 300]);
    Ok(())
}

#[tokio::test]
async fn test_flat_map_of_empty_upstream_completes() -> anyhow::Result<()> {
    let values = Many::<i32>::empty()
        .flat_map(|i| Many::range(i, 3))
        .collect()
        .await?;

    assert!(values.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_flat_map_waits_for_all_inners() -> anyhow::Result<()> {
    let values = Many::range(1, 2)
        .flat_map(|_| Many::<i32>::empty())
        .collect()
        .await?;

    assert!(values.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_single_flat_map_many() -> anyhow::Result<()> {
    let values = Single::just(3)
        .flat_map_many(|n| Many::range(1, n as u32))
        .collect()
        .await?;

    assert_eq!(values, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_single_flat_map_chains_singles() -> anyhow::Result<()> {
    let value = Single::just("A")
        .flat_map(|s| Single::just(format!("{s}B")))
        .to_future()
        .await?;

    assert_eq!(value, Some("AB".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_single_flat_map_on_empty_is_empty() -> anyhow::Result<()> {
    let value = Single::<i32>::empty()
        .flat_map(|x| Single::just(x + 1))
        .to_future()
        .await?;

    assert_eq!(value, None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_flat_map_bounds_inners_of_fast_upstream() -> anyhow::Result<()> {
    // Arrange
    let pulled = Arc::new(AtomicUsize::new(0));
    let counter = pulled.clone();
    let upstream = Many::from_iter(0u64..200_000).do_on_next(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    let first = upstream
        .flat_map(|i| Single::just(i).delay_element(Duration::from_millis(10)))
        .take(1)
        .collect()
        .await?;

    // Assert
    assert_eq!(first.len(), 1);
    let pulled = pulled.load(Ordering::SeqCst);
    assert!(pulled <= FLAT_MAP_CONCURRENCY + 1, "pulled {pulled}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_flat_map_opens_next_inners_as_slots_free() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let count = u32::try_from(FLAT_MAP_CONCURRENCY * 2)?;

    // Act
    let values = Many::range(0, count)
        .flat_map(|i| Single::just(i).delay_element(Duration::from_millis(100)))
        .collect()
        .await?;

    // Assert
    assert_eq!(values.len(), FLAT_MAP_CONCURRENCY * 2);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(300), "{elapsed:?}");
    Ok(())
}
