use map_reduce_core::WorkerRuntime;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tokio task-based runtime
pub struct TokioRuntime;

impl WorkerRuntime for TokioRuntime {
    type Handle<T: Send + 'static> = JoinHandle<T>;
    type Error = tokio::task::JoinError;

    fn spawn<F, Fut, T>(f: F) -> Self::Handle<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::spawn(f())
    }

    fn join<T: Send + 'static>(
        handle: Self::Handle<T>,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send {
        handle
    }
}
