use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::debug;

use super::cache::{ScoreCache, DEFAULT_CACHE_CAPACITY};
use super::composer::{compose_scores, explain_scores};
use super::domain::{LocalityScores, PropertyInput, ScoreBreakdown};
use super::variance::{NoVariance, RandomVariance, VarianceSource};

/// Scoring context owning the memo cache and the jitter source.
///
/// Construct one per process (or per test) and share it by reference; all methods take `&self`.
pub struct LocalityScoringService {
    cache: Mutex<ScoreCache>,
    variance: Mutex<Box<dyn VarianceSource>>,
    reference_year: Option<i32>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of cache occupancy and hit counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl Default for LocalityScoringService {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalityScoringService {
    /// Entropy-seeded jitter, default cache bound, current calendar year.
    pub fn new() -> Self {
        Self::with_variance(Box::new(RandomVariance::from_entropy()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_variance(Box::new(RandomVariance::seeded(seed)))
    }

    /// Jitter disabled; identical inputs always produce identical scores.
    pub fn deterministic() -> Self {
        Self::with_variance(Box::new(NoVariance))
    }

    pub fn with_variance(variance: Box<dyn VarianceSource>) -> Self {
        Self {
            cache: Mutex::new(ScoreCache::new(DEFAULT_CACHE_CAPACITY)),
            variance: Mutex::new(variance),
            reference_year: None,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Replace the cache with an empty one bounded at `capacity`.
    pub fn with_cache_capacity(self, capacity: usize) -> Self {
        Self {
            cache: Mutex::new(ScoreCache::new(capacity)),
            ..self
        }
    }

    /// Pin the year used for construction-age decay.
    pub fn with_reference_year(self, year: i32) -> Self {
        Self {
            reference_year: Some(year),
            ..self
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Compute scores without consulting or filling the cache.
    pub fn calculate_locality_scores(&self, property: &PropertyInput) -> LocalityScores {
        let mut variance = lock(&self.variance);
        compose_scores(property, self.reference_year(), &mut **variance)
    }

    /// Memoized scores keyed by id, location, price, and type.
    ///
    /// The first computation for a key is returned unchanged for as long as the entry survives.
    pub fn get_cached_locality_scores(&self, property: &PropertyInput) -> LocalityScores {
        let key = property.cache_key();
        let mut cache = lock(&self.cache);

        if let Some(scores) = cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(property_id = %property.id, "locality score cache hit");
            return scores;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let scores = self.calculate_locality_scores(property);
        let evicted = cache.insert(key, scores);
        debug!(
            property_id = %property.id,
            locality = scores.locality_score,
            walk = scores.walk_score,
            amenities = scores.amenities_score,
            evicted = evicted.len(),
            "locality scores computed"
        );
        scores
    }

    /// Jitter-free factor breakdown; never touches the cache.
    pub fn explain(&self, property: &PropertyInput) -> ScoreBreakdown {
        explain_scores(property, self.reference_year())
    }

    pub fn cache_len(&self) -> usize {
        lock(&self.cache).len()
    }

    pub fn cache_capacity(&self) -> usize {
        lock(&self.cache).capacity()
    }

    pub fn cache_contains(&self, property: &PropertyInput) -> bool {
        lock(&self.cache).contains(&property.cache_key())
    }

    pub fn cache_stats(&self) -> CacheStats {
        let cache = lock(&self.cache);
        CacheStats {
            entries: cache.len(),
            capacity: cache.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
