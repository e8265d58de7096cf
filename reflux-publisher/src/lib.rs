// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! [`Single`] and [`Many`] publishers and their operators.
//!
//! # Operator Categories
//!
//! ### Sources
//!
//! - **`just` / `empty` / `error`**: fixed sequences
//! - **[`range`](Many::range)**, **[`from_iter`](Many::from_iter)**, **[`interval`](Many::interval)**
//! - **`defer` / `from_future`**: sequences built anew on each subscribe
//!
//! ### Transformation
//!
//! - **`map` / `try_map` / `filter` / [`take`](Many::take)**
//! - **[`flat_map`](Many::flat_map)** and **[`flat_map_many`](Single::flat_map_many)**:
//!   concurrent inner publishers merged by arrival, at most
//!   [`FLAT_MAP_CONCURRENCY`] at once
//!
//! ### Error Recovery
//!
//! - **`on_error_resume`**: continue with a fallback publisher
//! - **`on_error_return`**: continue with a fallback value
//!
//! ### Combination
//!
//! - **[`concat`](Many::concat)**: sequential, each source opened after the previous completed
//! - **[`merge`](Many::merge)**: concurrent, interleaved by arrival
//! - **[`zip`](Many::zip)** / **[`zip_all`](Many::zip_all)**: concurrent, paired by index
//!
//! ### Time
//!
//! - **[`delay_elements`](Many::delay_elements)**: shifts every value by a fixed duration
//!
//! ### Side Effects
//!
//! - **`do_on_subscribe` / `do_on_request` / `do_on_next` / `do_on_success` /
//!   `do_on_error` / `do_on_complete` / `do_on_cancel`**
//! - **`log`**: reports every lifecycle point to the `tracing` sink
//!
//! # Example
//!
//! ```
//! use reflux_publisher::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> reflux_core::Result<()> {
//! let pairs = Many::zip(&Many::range(1, 3), &Many::just(vec!["a", "b", "c"]));
//!
//! assert_eq!(pairs.collect().await?, vec![(1, "a"), (2, "b"), (3, "c")]);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

mod collect;
mod concat;
mod delay;
mod flat_map;
mod hooks;
mod log;
mod many;
mod merge;
mod on_error;
pub mod prelude;
mod single;
mod source;
mod sources;
mod transform;
mod zip;

pub use flat_map::FLAT_MAP_CONCURRENCY;
pub use log::DEFAULT_LOG_CATEGORY;
pub use many::Many;
pub use single::Single;
pub use zip::ZIP_PREFETCH;
