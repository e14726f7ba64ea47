use locality_scoring::scoring::{load_properties, LocalityScoringService, PropertyType};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/listings.csv")
}

#[test]
fn imported_listings_score_within_bands() {
    let properties = load_properties(fixture()).expect("fixture imports");
    assert_eq!(properties.len(), 6);
    assert_eq!(properties[2].kind(), PropertyType::Commercial);
    assert!(properties[3].area.is_none());

    let service = LocalityScoringService::seeded(21).with_reference_year(2025);
    for property in &properties {
        let scores = service.get_cached_locality_scores(property);
        assert!((40..=99).contains(&scores.locality_score));
        assert!((30..=99).contains(&scores.walk_score));
        assert!((35..=99).contains(&scores.amenities_score));
    }
    assert_eq!(service.cache_len(), properties.len());
}

#[test]
fn unknown_city_falls_back_to_default_table() {
    let properties = load_properties(fixture()).expect("fixture imports");
    let nashik = properties
        .iter()
        .find(|property| property.id == "lst-105")
        .expect("nashik listing present");

    let service = LocalityScoringService::deterministic().with_reference_year(2025);
    let breakdown = service.explain(nashik);
    assert!(breakdown.city.is_none());
    // Default 60, land -5, price per sq ft 180 earns nothing.
    assert_eq!(breakdown.scores.locality_score, 55);
    assert_eq!(breakdown.scores.walk_score, 40);
    assert_eq!(breakdown.scores.amenities_score, 54);
}
