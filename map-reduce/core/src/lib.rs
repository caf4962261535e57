mod key_value;
pub use key_value::{KeyValue, ResultMap};

mod error;
pub use error::{ConfigError, PipelineError};

mod config;
pub use config::Config;

mod map_reduce_job;
pub use map_reduce_job::MapReduceJob;

mod grouping;
pub use grouping::Grouping;

pub mod emission_channel;
pub use emission_channel::{EmissionChannel, EmissionReceiver, EmissionSender};

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

pub mod result_store;
pub use result_store::ResultStore;

mod locked_result_map;
pub use locked_result_map::LockedResultMap;

mod task_limiter;
pub use task_limiter::{TaskLimiter, TaskPermit};

mod shuffle_collector;
pub use shuffle_collector::ShuffleCollector;

mod reduce_coordinator;
pub use reduce_coordinator::ReduceCoordinator;

mod pipeline;
pub use pipeline::{Pipeline, PipelinePhase, PipelineStats};

pub mod utils;
