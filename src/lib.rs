#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unreachable_pub
)]
#![allow(elided_lifetimes_in_paths)]

//! Limit how many units of work run concurrently.
//!
//! [`WorkerLimit`] wraps a [`Service`] so that at most `max_workers`
//! requests are in flight at once, across every clone of the wrapped
//! service. A caller that finds all slots taken parks in `poll_ready`
//! until a running unit of work finishes and frees one. A slot is
//! released on every exit path, whether the work succeeds, fails, or
//! its future is dropped before completing.
//!
//! Plain async functions become services with [`work_fn`].
//!
//! [`Service`]: tower_service::Service
//!
//! # Examples
//!
//! ```
//! use futures::future::poll_fn;
//! use std::convert::Infallible;
//! use tower_service::Service;
//! use work_limit::{work_fn, WorkerLimit};
//!
//! # tokio_test::block_on(async {
//! // At most two greetings are rendered at the same time.
//! let work = work_fn(|name: &'static str| async move {
//!     Ok::<_, Infallible>(format!("hello {}", name))
//! });
//! let mut limited = WorkerLimit::new(work, 2);
//!
//! poll_fn(|cx| limited.poll_ready(cx)).await.unwrap();
//! let greeting = limited.call("world").await.unwrap();
//! assert_eq!(greeting, "hello world");
//! # });
//! ```

pub mod concurrency;
mod work;

pub use crate::concurrency::{SharedWorkerLimitLayer, WorkerLimit, WorkerLimitLayer};
pub use crate::work::{work_fn, WorkFn};
