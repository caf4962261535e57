use std::collections::HashMap;

/// Final output of a run: key -> aggregated value, in no particular order
pub type ResultMap = HashMap<String, i64>;

/// A single key/value pair, emitted by mappers and produced by reducers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue {
    pub key: String,
    pub value: i64,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
