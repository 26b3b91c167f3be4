use super::future::ResponseFuture;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::PollSemaphore;
use tower_service::Service;

use std::{
    sync::Arc,
    task::{Context, Poll},
};

/// Enforces a limit on how many units of work the underlying service
/// runs concurrently.
#[derive(Debug)]
pub struct WorkerLimit<T> {
    inner: T,
    semaphore: PollSemaphore,
    /// The currently acquired semaphore permit, if there is sufficient
    /// concurrency to dispatch a new unit of work.
    ///
    /// The permit is acquired in `poll_ready`, and taken in `call` when
    /// the work is dispatched.
    permit: Option<OwnedSemaphorePermit>,
}

impl<T> WorkerLimit<T> {
    /// Create a new worker limiter, allowing at most `max_workers`
    /// units of work to run at once.
    ///
    /// # Panics
    ///
    /// This function panics if `max_workers` is 0.
    pub fn new(inner: T, max_workers: usize) -> Self {
        assert!(max_workers > 0, "max_workers must be at least 1");

        Self::with_semaphore(inner, Arc::new(Semaphore::new(max_workers)))
    }

    /// Create a new worker limiter drawing slots from a shared semaphore.
    pub fn with_semaphore(inner: T, semaphore: Arc<Semaphore>) -> Self {
        WorkerLimit {
            inner,
            semaphore: PollSemaphore::new(semaphore),
            permit: None,
        }
    }

    /// Get a reference to the inner service
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Get a mutable reference to the inner service
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume `self`, returning the inner service
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<S, Request> Service<Request> for WorkerLimit<S>
where
    S: Service<Request>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if self.permit.is_none() {
            self.permit = match self.semaphore.poll_acquire(cx) {
                Poll::Ready(permit) => permit,
                Poll::Pending => {
                    tracing::trace!("worker limit reached; waiting for a free slot");
                    return Poll::Pending;
                }
            };
            debug_assert!(
                self.permit.is_some(),
                "WorkerLimit semaphore is never closed, so `poll_acquire` \
                 should never fail",
            );
        }

        // Once we've acquired a permit, poll the inner service.
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        // Take the permit
        let permit = self
            .permit
            .take()
            .expect("max workers in-flight; poll_ready must be called first");

        // Dispatch the work to the inner service
        let future = self.inner.call(request);

        ResponseFuture::new(future, permit)
    }
}

impl<T: Clone> Clone for WorkerLimit<T> {
    fn clone(&self) -> Self {
        // Since we hold an `OwnedSemaphorePermit`, we can't derive `Clone`.
        // Instead, when cloning the service, create a new service with the
        // same semaphore, but with the permit in the un-acquired state.
        Self {
            inner: self.inner.clone(),
            semaphore: self.semaphore.clone(),
            permit: None,
        }
    }
}
