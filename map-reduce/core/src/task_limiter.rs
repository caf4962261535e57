use crate::PipelineError;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Slot held by a live task; None when the limiter is unbounded
pub type TaskPermit = Option<OwnedSemaphorePermit>;

/// Caps the number of live tasks in one phase.
///
/// The driver acquires a permit before spawning and moves it into the task,
/// so the slot is freed when the task ends, whether it succeeds or panics.
#[derive(Clone, Debug)]
pub struct TaskLimiter {
    semaphore: Option<Arc<Semaphore>>,
}

impl TaskLimiter {
    /// `max_tasks == 0` means unbounded
    pub fn new(max_tasks: usize) -> Self {
        let semaphore = (max_tasks > 0).then(|| Arc::new(Semaphore::new(max_tasks)));
        Self { semaphore }
    }

    pub fn is_bounded(&self) -> bool {
        self.semaphore.is_some()
    }

    /// Stop handing out slots after a task has failed.
    /// Pending and later `acquire` calls return `LimiterClosed`; permits
    /// already held stay valid. No effect on an unbounded limiter, whose
    /// driver never waits between spawns.
    pub fn close(&self) {
        if let Some(semaphore) = &self.semaphore {
            semaphore.close();
        }
    }

    /// Wait for a free slot
    pub async fn acquire(&self) -> Result<TaskPermit, PipelineError> {
        match &self.semaphore {
            Some(semaphore) => Arc::clone(semaphore)
                .acquire_owned()
                .await
                .map(Some)
                .map_err(|_| PipelineError::LimiterClosed),
            None => Ok(None),
        }
    }
}
