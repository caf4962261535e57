use crate::{
    Config, ConfigError, EmissionChannel, EmissionSender, Grouping, LockedResultMap, MapReduceJob,
    PipelineError, ReduceCoordinator, ResultMap, ResultStore, ShuffleCollector, TaskLimiter,
    WorkerRuntime,
};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Phases of a run, strictly in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Idle,
    Mapping,
    Shuffling,
    Reducing,
    Complete,
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelinePhase::Idle => "IDLE",
            PipelinePhase::Mapping => "MAP",
            PipelinePhase::Shuffling => "SHUFFLE",
            PipelinePhase::Reducing => "REDUCE",
            PipelinePhase::Complete => "COMPLETE",
        };
        f.write_str(name)
    }
}

/// Counters and timings of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub records: usize,
    pub emissions: usize,
    pub distinct_keys: usize,
    /// Map and shuffle overlap, so they are timed together
    pub map_duration: Duration,
    pub reduce_duration: Duration,
}

/// Drives a map -> shuffle -> reduce run inside the current process.
///
/// Generic over the job, the task runtime, the emission conduit and the
/// result store. A pipeline holds no per-run state and can be reused.
pub struct Pipeline<J, R, C, S = LockedResultMap>
where
    J: MapReduceJob,
    R: WorkerRuntime,
    C: EmissionChannel,
    S: ResultStore,
{
    job: Arc<J>,
    config: Config,
    _phantom: std::marker::PhantomData<(R, C, S)>,
}

impl<J, R, C, S> Pipeline<J, R, C, S>
where
    J: MapReduceJob,
    R: WorkerRuntime,
    C: EmissionChannel,
    S: ResultStore,
{
    pub fn new(job: J, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            job: Arc::new(job),
            config,
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the job over `records` and returns the aggregated mapping
    pub async fn run(&self, records: &[String]) -> Result<ResultMap, PipelineError> {
        self.run_with_stats(records)
            .await
            .map(|(results, _)| results)
    }

    pub async fn run_with_stats(
        &self,
        records: &[String],
    ) -> Result<(ResultMap, PipelineStats), PipelineError> {
        let mut stats = PipelineStats {
            records: records.len(),
            ..PipelineStats::default()
        };
        debug!(phase = %PipelinePhase::Idle, records = records.len(), "pipeline ready");

        // MAP + SHUFFLE PHASE
        let started = Instant::now();
        let grouping = self.map_and_shuffle(records).await?;
        stats.map_duration = started.elapsed();
        stats.emissions = grouping.emission_count();
        stats.distinct_keys = grouping.len();

        // REDUCE PHASE
        info!(
            phase = %PipelinePhase::Reducing,
            keys = grouping.len(),
            "starting reducers"
        );
        let started = Instant::now();
        let coordinator = ReduceCoordinator::<J, R, S>::new(
            Arc::clone(&self.job),
            TaskLimiter::new(self.config.max_reduce_tasks),
        );
        let results = coordinator.run(grouping).await?;
        stats.reduce_duration = started.elapsed();
        info!(phase = %PipelinePhase::Reducing, "all reducers completed");

        info!(
            phase = %PipelinePhase::Complete,
            records = stats.records,
            emissions = stats.emissions,
            keys = stats.distinct_keys,
            "pipeline finished"
        );
        Ok((results, stats))
    }

    /// Spawns one mapper per record and a collector that groups their emissions.
    ///
    /// Each mapper owns a sender clone and the driver drops its own after
    /// spawning, so the conduit closes exactly when the last mapper exits.
    /// The grouping is only returned after every mapper and the collector
    /// have been joined.
    async fn map_and_shuffle(&self, records: &[String]) -> Result<Grouping, PipelineError> {
        info!(
            phase = %PipelinePhase::Mapping,
            records = records.len(),
            "starting mappers"
        );

        let (sender, receiver) = C::open(self.config.emission_buffer);
        let collector = R::spawn(move || ShuffleCollector::new(receiver).run());

        let limiter = TaskLimiter::new(self.config.max_map_tasks);
        let mut handles = Vec::with_capacity(records.len());
        let mut failure = None;
        let mut stopped = None;

        for record in records {
            let permit = match limiter.acquire().await {
                Ok(permit) => permit,
                Err(e) => {
                    debug!("map task failed, no further mappers spawned");
                    stopped = Some(e);
                    break;
                }
            };

            let job = Arc::clone(&self.job);
            let sender = sender.clone();
            let limiter = limiter.clone();
            let record = record.clone();
            let handle = R::spawn(move || async move {
                let _permit = permit;
                let outcome = map_record(job.as_ref(), &record, &sender).await;
                if outcome.is_err() {
                    limiter.close();
                }
                outcome
            });
            handles.push(handle);
        }
        drop(sender);

        // Map barrier
        let mut emitted = 0;
        for (task_id, handle) in handles.into_iter().enumerate() {
            let outcome = match R::join(handle).await {
                Ok(Ok(count)) => Ok(count),
                Ok(Err(e)) => Err(PipelineError::MapTaskFailed {
                    task_id,
                    reason: e.to_string(),
                }),
                Err(e) => Err(PipelineError::MapTaskFailed {
                    task_id,
                    reason: e.to_string(),
                }),
            };
            match outcome {
                Ok(count) => emitted += count,
                Err(e) => {
                    error!("{}", e);
                    failure.get_or_insert(e);
                }
            }
        }
        info!(phase = %PipelinePhase::Mapping, emitted, "all mappers completed");

        let grouping = R::join(collector)
            .await
            .map_err(|e| PipelineError::ShuffleFailed(e.to_string()))?;
        info!(
            phase = %PipelinePhase::Shuffling,
            keys = grouping.len(),
            "grouping closed"
        );

        // The task error explains why the limiter was closed, so it wins
        if let Some(e) = failure.or(stopped) {
            return Err(e);
        }
        if grouping.emission_count() != emitted {
            return Err(PipelineError::EmissionMismatch {
                emitted,
                grouped: grouping.emission_count(),
            });
        }
        Ok(grouping)
    }
}

/// Body of one mapper task: map the record, hand off each emission in turn
async fn map_record<J, Tx>(job: &J, record: &str, sender: &Tx) -> Result<usize, PipelineError>
where
    J: MapReduceJob,
    Tx: EmissionSender,
{
    let emissions = job.map(record);
    let count = emissions.len();
    for emission in emissions {
        sender.emit(emission).await?;
    }
    Ok(count)
}
