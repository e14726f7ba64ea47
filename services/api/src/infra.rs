use locality_scoring::scoring::{
    LocalityScoringService, LocalityScores, PropertyInput, ScoreBadge,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) scoring: Arc<LocalityScoringService>,
}

/// Public payload for one scored listing.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ScoredListingView {
    pub(crate) id: String,
    pub(crate) location: String,
    pub(crate) scores: LocalityScores,
    pub(crate) badges: [ScoreBadge; 3],
}

impl ScoredListingView {
    pub(crate) fn new(property: &PropertyInput, scores: LocalityScores) -> Self {
        Self {
            id: property.id.clone(),
            location: property.location.clone(),
            scores,
            badges: scores.badges(),
        }
    }
}

pub(crate) fn render_badges(view: &ScoredListingView) -> String {
    view.badges
        .iter()
        .map(|badge| format!("{} {}", badge.label, badge.value))
        .collect::<Vec<_>>()
        .join(" | ")
}
