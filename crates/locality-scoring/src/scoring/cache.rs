use super::domain::LocalityScores;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Bounded score cache with insertion-order eviction.
///
/// Reads never reorder entries; once the entry count exceeds the capacity the oldest inserted key
/// is dropped.
#[derive(Debug)]
pub struct ScoreCache {
    capacity: usize,
    entries: HashMap<String, LocalityScores>,
    order: VecDeque<String>,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ScoreCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY) + 1),
            order: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<LocalityScores> {
        self.entries.get(key).copied()
    }

    /// Store `scores` under `key`, returning any keys evicted to stay within capacity.
    ///
    /// An existing key keeps its original insertion position.
    pub fn insert(&mut self, key: String, scores: LocalityScores) -> Vec<String> {
        if self.entries.insert(key.clone(), scores).is_none() {
            self.order.push_back(key);
        }

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            trace!(key = %oldest, "evicted oldest locality score entry");
            evicted.push(oldest);
        }
        evicted
    }
}
