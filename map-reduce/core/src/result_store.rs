use crate::{KeyValue, PipelineError, ResultMap};

/// Trait for the shared result mapping written by concurrent reducer tasks.
/// Clones share the same underlying map.
pub trait ResultStore: Clone + Default + Send + Sync + 'static {
    /// Insert one reduced pair, replacing any previous value for the key
    fn merge(&self, result: KeyValue) -> Result<(), PipelineError>;

    /// Move the accumulated mapping out, leaving the store empty
    fn take(&self) -> Result<ResultMap, PipelineError>;
}
