mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use map_reduce_core::{Config, ConfigError};
use map_reduce_task_channels::{input, logging, WordCountPipeline};
use map_reduce_word_count::{format_ranking, top_words, WordCountJob};
use std::time::Instant;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let start_time = Instant::now();

    // Load configuration from JSON file
    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "{} not found, using default configuration",
                cli.config.display()
            );
            Config::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("loading {}", cli.config.display()));
        }
    };
    cli.apply_overrides(&mut config);
    config.log_summary();

    let records = input::read_records(&cli.input).await?;
    info!(records = records.len(), "starting word count");

    let pipeline = WordCountPipeline::new(WordCountJob, config)?;
    let (results, stats) = pipeline.run_with_stats(&records).await?;

    let ranking = top_words(&results, pipeline.config().top_n);
    let source = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    println!("Top {} most frequent words in {}:", ranking.len(), source);
    for line in format_ranking(&ranking) {
        println!("{}", line);
    }

    info!(
        records = stats.records,
        emissions = stats.emissions,
        distinct_words = stats.distinct_keys,
        map_ms = stats.map_duration.as_millis() as u64,
        reduce_ms = stats.reduce_duration.as_millis() as u64,
        total_ms = start_time.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}
