// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{Publisher, Signal, Subscription};
use reflux_publisher::{Many, Single};
use reflux_test_utils::{
    assert_no_element_emitted, record, unwrap_stream, values_then_error, Event, TestError,
};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_delay_holds_value_back() -> anyhow::Result<()> {
    // Arrange
    let subscription = Subscription::new();
    let mut stream = Many::range(1, 2)
        .delay_elements(Duration::from_millis(200))
        .open(&subscription);

    // Act & Assert
    assert_no_element_emitted(&mut stream, 150).await;
    assert_eq!(unwrap_stream(&mut stream, 100).await, Signal::Next(1));
    assert_no_element_emitted(&mut stream, 150).await;
    assert_eq!(unwrap_stream(&mut stream, 100).await, Signal::Next(2));
    assert_eq!(unwrap_stream(&mut stream, 10).await, Signal::Complete);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_keeps_order_and_spacing() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();

    // Act
    let values = Many::range(1, 5)
        .delay_elements(Duration::from_millis(100))
        .collect()
        .await?;

    // Assert
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_forwards_error_immediately() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let delayed = Many::<i32>::error(TestError::reflux("A")).delay_elements(Duration::from_secs(10));

    // Act
    let events = record(&delayed).events().await;

    // Assert
    assert_eq!(
        events,
        vec![Event::Subscribed, Event::Error(TestError::reflux("A"))]
    );
    assert!(start.elapsed() < Duration::from_secs(1));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_emits_values_before_error() -> anyhow::Result<()> {
    let delayed = values_then_error(vec![1, 2], "A").delay_elements(Duration::from_millis(50));

    let events = record(&delayed).events().await;

    assert_eq!(
        events,
        vec![
            Event::Subscribed,
            Event::Next(1),
            Event::Next(2),
            Event::Error(TestError::reflux("A"))
        ]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_of_empty_completes_immediately() -> anyhow::Result<()> {
    let start = Instant::now();

    let value = Single::<i32>::empty()
        .delay_element(Duration::from_secs(10))
        .to_future()
        .await?;

    assert_eq!(value, None);
    assert!(start.elapsed() < Duration::from_secs(1));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_delay_drops_pending_value() -> anyhow::Result<()> {
    // Arrange
    let mut recording = record(&Single::just(1).delay_element(Duration::from_millis(500)));
    assert_eq!(recording.next_event().await, Some(Event::Subscribed));

    // Act
    tokio::time::sleep(Duration::from_millis(100)).await;
    recording.cancel();
    tokio::time::sleep(Duration::from_secs(1)).await;

    // Assert
    assert!(recording.is_disposed());
    assert_eq!(recording.next_event().await, None);
    Ok(())
}
