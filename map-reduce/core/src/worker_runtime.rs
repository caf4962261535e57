use std::future::Future;

/// Trait for abstracting the execution context of mapper, collector and reducer tasks
pub trait WorkerRuntime: Send + Sync + 'static {
    type Handle<T: Send + 'static>: Send;
    type Error: std::fmt::Display + Send;

    /// Spawn a task that runs independently of the caller
    fn spawn<F, Fut, T>(f: F) -> Self::Handle<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static;

    /// Wait for the task to complete.
    /// Err means the task panicked or was cancelled before producing a value.
    fn join<T: Send + 'static>(
        handle: Self::Handle<T>,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send;
}
