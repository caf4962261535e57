use map_reduce_core::ResultMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: i64,
}

/// Returns the `n` most frequent words, count descending then word ascending
pub fn top_words(results: &ResultMap, n: usize) -> Vec<RankedWord> {
    let mut sorted: Vec<_> = results.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    sorted
        .into_iter()
        .take(n)
        .map(|(word, count)| RankedWord {
            word: word.clone(),
            count: *count,
        })
        .collect()
}

/// One line per entry: right-aligned rank, padded word, count
pub fn format_ranking(ranking: &[RankedWord]) -> Vec<String> {
    ranking
        .iter()
        .enumerate()
        .map(|(idx, entry)| format!("{:>3}. {:<15} {}", idx + 1, entry.word, entry.count))
        .collect()
}
