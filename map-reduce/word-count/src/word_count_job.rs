use crate::tokenize;
use map_reduce_core::{KeyValue, MapReduceJob};

/// Counts word occurrences: every token maps to `(word, 1)` and reducers sum
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountJob;

impl MapReduceJob for WordCountJob {
    fn map(&self, record: &str) -> Vec<KeyValue> {
        tokenize(record).map(|word| KeyValue::new(word, 1)).collect()
    }

    fn reduce(&self, key: &str, values: &[i64]) -> KeyValue {
        KeyValue::new(key, values.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_emits_one_per_token() {
        let emissions = WordCountJob.map("the quick fox");
        assert_eq!(
            emissions,
            vec![
                KeyValue::new("the", 1),
                KeyValue::new("quick", 1),
                KeyValue::new("fox", 1),
            ]
        );
    }

    #[test]
    fn test_map_of_garbage_is_empty() {
        assert!(WordCountJob.map("... 42 ???").is_empty());
    }

    #[test]
    fn test_reduce_sums_in_any_order() {
        assert_eq!(WordCountJob.reduce("fox", &[1, 1, 1]), KeyValue::new("fox", 3));
        assert_eq!(WordCountJob.reduce("fox", &[3, 1, 2]), KeyValue::new("fox", 6));
        assert_eq!(WordCountJob.reduce("fox", &[2, 3, 1]), KeyValue::new("fox", 6));
    }

    #[test]
    fn test_reduce_of_empty_group_is_zero() {
        assert_eq!(WordCountJob.reduce("none", &[]), KeyValue::new("none", 0));
    }
}
