use crate::{KeyValue, PipelineError, ResultMap, ResultStore};
use std::sync::{Arc, Mutex};

/// Result map guarded by a single mutex.
/// The lock is held for one insert at a time and never across an await.
#[derive(Clone, Default)]
pub struct LockedResultMap {
    map: Arc<Mutex<ResultMap>>,
}

impl LockedResultMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for LockedResultMap {
    fn merge(&self, result: KeyValue) -> Result<(), PipelineError> {
        let mut map = self.map.lock().map_err(|_| PipelineError::LockPoisoned)?;
        map.insert(result.key, result.value);
        Ok(())
    }

    fn take(&self) -> Result<ResultMap, PipelineError> {
        let mut map = self.map.lock().map_err(|_| PipelineError::LockPoisoned)?;
        Ok(std::mem::take(&mut *map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_merge_then_take() {
        let store = LockedResultMap::new();
        store.merge(KeyValue::new("the", 2)).unwrap();
        store.merge(KeyValue::new("fox", 1)).unwrap();

        let results = store.take().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results["the"], 2);
        assert_eq!(results["fox"], 1);

        // take leaves the store empty
        assert!(store.take().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_the_same_map() {
        let store = LockedResultMap::new();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || store.merge(KeyValue::new(format!("key{}", i), i)))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let results = store.take().unwrap();
        assert_eq!(results.len(), 16);
        assert_eq!(results["key7"], 7);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = LockedResultMap::new();
        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.map.lock().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();

        assert_eq!(
            store.merge(KeyValue::new("a", 1)),
            Err(PipelineError::LockPoisoned)
        );
    }
}
