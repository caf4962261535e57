pub mod input;
pub mod logging;
pub mod mpsc_emission_channel;
pub mod tokio_runtime;

use map_reduce_core::Pipeline;
use map_reduce_word_count::WordCountJob;
use mpsc_emission_channel::MpscEmissionChannel;
use tokio_runtime::TokioRuntime;

/// Word count over tokio tasks, a bounded mpsc conduit and a mutex-guarded result map
pub type WordCountPipeline = Pipeline<WordCountJob, TokioRuntime, MpscEmissionChannel>;
