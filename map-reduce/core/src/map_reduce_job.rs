use crate::KeyValue;

/// The problem-specific half of a map-reduce run.
///
/// Both functions must be pure: the pipeline calls `map` from one task per
/// record and `reduce` from one task per key, with no coordination between
/// them. Calling either twice on the same input must give the same output.
pub trait MapReduceJob: Send + Sync + 'static {
    /// Turn one input record into zero or more emissions
    fn map(&self, record: &str) -> Vec<KeyValue>;

    /// Fold every value emitted for `key` into a single pair.
    /// Values arrive in no particular order.
    fn reduce(&self, key: &str, values: &[i64]) -> KeyValue;
}
