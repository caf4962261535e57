use map_reduce_core::utils::generate_corpus;
use map_reduce_core::{Config, ResultMap};
use map_reduce_task_channels::WordCountPipeline;
use map_reduce_word_count::{tokenize, WordCountJob};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Sequential count to compare the pipeline against
fn reference_count(records: &[String]) -> ResultMap {
    let mut counts = ResultMap::new();
    for record in records {
        for word in tokenize(record) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    counts
}

fn total_tokens(records: &[String]) -> i64 {
    records.iter().map(|r| tokenize(r).count() as i64).sum()
}

async fn assert_matches_reference(config: Config, seed: u64, num_records: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let corpus = generate_corpus(&mut rng, num_records, 12, 4);

    let pipeline = WordCountPipeline::new(WordCountJob, config).unwrap();
    let (results, stats) = pipeline.run_with_stats(&corpus).await.unwrap();

    let total = total_tokens(&corpus);
    assert_eq!(results.values().sum::<i64>(), total, "emissions lost or duplicated");
    assert_eq!(stats.emissions as i64, total);
    assert_eq!(results, reference_count(&corpus));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_thousands_of_records_unbounded() {
    assert_matches_reference(Config::default(), 1, 5_000).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_thousands_of_records_single_slot_conduit() {
    let config = Config {
        emission_buffer: 1,
        ..Config::default()
    };
    assert_matches_reference(config, 2, 3_000).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_thousands_of_records_with_worker_caps() {
    let config = Config {
        emission_buffer: 8,
        max_map_tasks: 16,
        max_reduce_tasks: 4,
        ..Config::default()
    };
    assert_matches_reference(config, 3, 5_000).await;
}

#[tokio::test]
async fn test_current_thread_runtime_with_caps() {
    let config = Config {
        emission_buffer: 2,
        max_map_tasks: 3,
        max_reduce_tasks: 2,
        ..Config::default()
    };
    assert_matches_reference(config, 4, 1_000).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(5);
    let corpus = generate_corpus(&mut rng, 2_000, 10, 3);
    let pipeline = WordCountPipeline::new(WordCountJob, Config::default()).unwrap();

    let first = pipeline.run(&corpus).await.unwrap();
    for _ in 0..3 {
        assert_eq!(pipeline.run(&corpus).await.unwrap(), first);
    }
}
