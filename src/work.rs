use std::future::Future;
use std::task::{Context, Poll};
use tower_service::Service;

/// Returns a new [`WorkFn`] with the given closure.
pub fn work_fn<T>(f: T) -> WorkFn<T> {
    WorkFn { f }
}

/// A [`Service`] implemented by a closure, representing one unit of work.
///
/// `WorkFn` is always ready; compose it with
/// [`WorkerLimit`](crate::WorkerLimit) to bound how many invocations of
/// the closure run at once.
#[derive(Copy, Clone, Debug)]
pub struct WorkFn<T> {
    f: T,
}

impl<T, F, Request, R, E> Service<Request> for WorkFn<T>
where
    T: FnMut(Request) -> F,
    F: Future<Output = Result<R, E>>,
{
    type Response = R;
    type Error = E;
    type Future = F;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), E>> {
        Ok(()).into()
    }

    fn call(&mut self, req: Request) -> Self::Future {
        (self.f)(req)
    }
}
