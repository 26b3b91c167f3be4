//! Limit the number of units of work being processed concurrently.

pub mod future;
mod layer;
mod service;

pub use self::layer::{SharedWorkerLimitLayer, WorkerLimitLayer};
pub use self::service::WorkerLimit;
