use std::sync::Arc;

use super::WorkerLimit;
use tokio::sync::Semaphore;
use tower_layer::Layer;

/// Enforces a limit on how many units of work the underlying service
/// runs concurrently.
///
/// Each wrapped service gets its own pool of `max_workers` slots.
#[derive(Debug, Clone)]
pub struct WorkerLimitLayer {
    max_workers: usize,
}

impl WorkerLimitLayer {
    /// Create a new worker limit layer.
    ///
    /// # Panics
    ///
    /// This function panics if `max_workers` is 0.
    pub fn new(max_workers: usize) -> Self {
        assert!(max_workers > 0, "max_workers must be at least 1");

        WorkerLimitLayer { max_workers }
    }
}

impl<S> Layer<S> for WorkerLimitLayer {
    type Service = WorkerLimit<S>;

    fn layer(&self, service: S) -> Self::Service {
        WorkerLimit::new(service, self.max_workers)
    }
}

/// Enforces a limit on how many units of work the underlying service
/// runs concurrently.
///
/// This variant accepts an owned semaphore (`Arc<Semaphore>`), so one
/// pool of slots can gate several distinct services.
#[derive(Debug, Clone)]
pub struct SharedWorkerLimitLayer {
    semaphore: Arc<Semaphore>,
}

impl SharedWorkerLimitLayer {
    /// Create a new `SharedWorkerLimitLayer` drawing slots from `semaphore`.
    pub fn new(semaphore: Arc<Semaphore>) -> Self {
        SharedWorkerLimitLayer { semaphore }
    }
}

impl<S> Layer<S> for SharedWorkerLimitLayer {
    type Service = WorkerLimit<S>;

    fn layer(&self, service: S) -> Self::Service {
        WorkerLimit::with_semaphore(service, self.semaphore.clone())
    }
}
