// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Reflux reactive engine.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Recording<T>`
//!
//! Subscribes to a publisher and records every signal it observes as an
//! [`Event`], including the initial `Subscribed`:
//!
//! ```rust
//! use reflux_publisher::Single;
//! use reflux_test_utils::{record, Event};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let events = record(&Single::just(42)).events().await;
//! assert_eq!(events, vec![Event::Subscribed, Event::Next(42), Event::Complete]);
//! # }
//! ```
//!
//! ## Fixture sources
//!
//! - [`timed_range`] - a range emitting one value per period
//! - [`values_then_error`] - values followed by a [`TestError`]

pub mod helpers;
pub mod recording;
pub mod sources;
pub mod test_error;

pub use helpers::{assert_no_element_emitted, unwrap_stream, DEFAULT_TIMEOUT};
pub use recording::{record, record_manual, Event, Recording};
pub use sources::{timed_range, values_then_error};
pub use test_error::TestError;
