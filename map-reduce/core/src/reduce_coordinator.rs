use crate::{
    Grouping, MapReduceJob, PipelineError, ResultMap, ResultStore, TaskLimiter, WorkerRuntime,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Runs one reducer task per distinct key and merges every result into a
/// fresh [`ResultStore`]. Returns only after all tasks have been joined.
pub struct ReduceCoordinator<J: MapReduceJob, R: WorkerRuntime, S: ResultStore> {
    job: Arc<J>,
    limiter: TaskLimiter,
    _phantom: std::marker::PhantomData<(R, S)>,
}

impl<J, R, S> ReduceCoordinator<J, R, S>
where
    J: MapReduceJob,
    R: WorkerRuntime,
    S: ResultStore,
{
    pub fn new(job: Arc<J>, limiter: TaskLimiter) -> Self {
        Self {
            job,
            limiter,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Consumes a closed grouping and returns the reduced mapping
    pub async fn run(&self, grouping: Grouping) -> Result<ResultMap, PipelineError> {
        let store = S::default();
        let mut handles = Vec::with_capacity(grouping.len());
        let mut failure = None;
        let mut stopped = None;

        for (key, values) in grouping {
            let permit = match self.limiter.acquire().await {
                Ok(permit) => permit,
                Err(e) => {
                    stopped = Some(e);
                    break;
                }
            };

            let job = Arc::clone(&self.job);
            let store = store.clone();
            let limiter = self.limiter.clone();
            let task_key = key.clone();
            let handle = R::spawn(move || async move {
                let _permit = permit;
                let result = job.reduce(&task_key, &values);
                let merged = store.merge(result);
                if merged.is_err() {
                    limiter.close();
                }
                merged
            });
            handles.push((key, handle));
        }

        debug!(tasks = handles.len(), "waiting for reducers");

        // Join everything, even after a failure, so no task outlives the run
        for (key, handle) in handles {
            let outcome = match R::join(handle).await {
                Ok(merged) => merged,
                Err(e) => Err(PipelineError::ReduceTaskFailed {
                    key,
                    reason: e.to_string(),
                }),
            };
            if let Err(e) = outcome {
                error!("{}", e);
                failure.get_or_insert(e);
            }
        }

        match failure.or(stopped) {
            Some(e) => Err(e),
            None => store.take(),
        }
    }
}
