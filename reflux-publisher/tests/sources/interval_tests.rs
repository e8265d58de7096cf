// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::Many;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_interval_ticks_every_period() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();

    // Act
    let ticks = Many::interval(Duration::from_millis(100))
        .take(3)
        .collect()
        .await?;

    // Assert
    assert_eq!(ticks, vec![0, 1, 2]);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(300), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(400), "{elapsed:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_interval_does_not_drift_behind_slow_downstream() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();

    // Act
    let ticks = Many::interval(Duration::from_millis(100))
        .delay_elements(Duration::from_millis(30))
        .take(3)
        .collect()
        .await?;

    // Assert
    assert_eq!(ticks, vec![0, 1, 2]);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(330), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(360), "{elapsed:?}");
    Ok(())
}
