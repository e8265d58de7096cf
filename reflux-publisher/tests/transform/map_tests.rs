// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_publisher::{Many, Single};
use reflux_test_utils::{record, Event};

#[tokio::test]
async fn test_map_transforms_every_value() -> anyhow::Result<()> {
    let values = Many::range(1, 5).map(|x| x * 10).collect().await?;

    assert_eq!(values, vec![10, 20, 30, 40, 50]);
    Ok(())
}

#[tokio::test]
async fn test_map_changes_type() -> anyhow::Result<()> {
    let events = record(&Single::just(3).map(|x| format!("#{x}"))).events().await;

    assert_eq!(
        events,
        vec![
            Event::Subscribed,
            Event::Next("#3".to_string()),
            Event::Complete
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_map_keeps_empty_empty() -> anyhow::Result<()> {
    let value = Single::<i32>::empty().map(|x| x + 1).to_future().await?;

    assert_eq!(value, None);
    Ok(())
}

#[tokio::test]
async fn test_filter_drops_non_matching_values() -> anyhow::Result<()> {
    let even = Many::range(1, 6).filter(|x| x % 2 == 0).collect().await?;
    let rejected = Single::just(1).filter(|x| *x > 5).to_future().await?;

    assert_eq!(even, vec![2, 4, 6]);
    assert_eq!(rejected, None);
    Ok(())
}

#[tokio::test]
async fn test_chained_maps_compose() -> anyhow::Result<()> {
    let values = Many::range(1, 3)
        .map(|x| x + 1)
        .map(|x| x * x)
        .map(|x| x.to_string())
        .collect()
        .await?;

    assert_eq!(values, vec!["4", "9", "16"]);
    Ok(())
}
