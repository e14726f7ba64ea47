//! Heuristic locality, walkability, and amenities scores for a listing.
//!
//! Scores start from a city table, pick up location keyword, price, property-type, and
//! construction-age modifiers, receive a small bounded jitter, and are clamped into fixed bands.
//! [`LocalityScoringService`] memoizes results per listing fingerprint in a bounded FIFO cache.

pub mod cache;
mod composer;
pub mod domain;
pub mod import;
pub mod modifiers;
pub mod tables;
pub mod variance;
mod service;

pub use cache::{ScoreCache, DEFAULT_CACHE_CAPACITY};
pub use composer::{compose_scores, explain_scores};
pub use domain::{
    CityData, LocalityScores, PropertyInput, PropertyType, ScoreBadge, ScoreBreakdown,
    ScoreComponent, ScoreFactor, TypeAdjustment,
};
pub use import::{load_properties, parse_properties, PropertyImportError};
pub use service::{CacheStats, LocalityScoringService};
pub use variance::{NoVariance, RandomVariance, VarianceSource};
