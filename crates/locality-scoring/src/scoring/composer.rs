use super::domain::{
    LocalityScores, PropertyInput, ScoreBreakdown, ScoreComponent, ScoreFactor, AMENITIES_RANGE,
    LOCALITY_RANGE, WALK_RANGE,
};
use super::modifiers::{
    age_modifier, location_premium, match_city, price_modifier, type_adjustment,
};
use super::tables::{
    AMENITIES_PREMIUM_WEIGHT, AMENITIES_PRICE_WEIGHT, AMENITIES_VARIANCE, DEFAULT_CITY,
    LOCALITY_VARIANCE, WALK_PREMIUM_WEIGHT, WALK_PRICE_WEIGHT, WALK_VARIANCE,
};
use super::variance::{NoVariance, VarianceSource};

/// Unclamped, jitter-free score triple.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawScores {
    locality: f64,
    walk: f64,
    amenities: f64,
}

fn collect_components(
    property: &PropertyInput,
    reference_year: i32,
) -> (Option<&'static str>, Vec<ScoreComponent>) {
    let matched = match_city(&property.location);
    let city = matched.map(|(_, data)| data).unwrap_or(DEFAULT_CITY);
    let city_name = matched.map(|(name, _)| name);

    let premium = location_premium(&property.location) as f64;
    let price = price_modifier(property.price, property.area) as f64;
    let kind = property.kind();
    let adjustment = type_adjustment(kind);
    let age = age_modifier(property.year_built, reference_year) as f64;

    let mut components = Vec::with_capacity(5);

    components.push(ScoreComponent {
        factor: ScoreFactor::CityBase,
        locality: city.base as f64,
        walk: city.walkability as f64,
        amenities: city.amenities as f64,
        notes: match city_name {
            Some(name) => format!("city table entry '{name}'"),
            None => "no known city in location; default entry".to_string(),
        },
    });

    components.push(ScoreComponent {
        factor: ScoreFactor::AreaPremium,
        locality: premium,
        walk: WALK_PREMIUM_WEIGHT * premium,
        amenities: AMENITIES_PREMIUM_WEIGHT * premium,
        notes: format!("location keyword premium {premium:.0}"),
    });

    let price_notes = match property.area {
        Some(area) if area > 0.0 => format!(
            "price per sq ft {:.0} earns {price:.0}",
            property.price / area
        ),
        _ => format!("absolute price {:.0} earns {price:.0}", property.price),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Price,
        locality: price,
        walk: WALK_PRICE_WEIGHT * price,
        amenities: AMENITIES_PRICE_WEIGHT * price,
        notes: price_notes,
    });

    components.push(ScoreComponent {
        factor: ScoreFactor::PropertyType,
        locality: adjustment.locality as f64,
        walk: adjustment.walk as f64,
        amenities: adjustment.amenities as f64,
        notes: format!("type '{}' treated as {}", property.property_type, kind.label()),
    });

    components.push(ScoreComponent {
        factor: ScoreFactor::Age,
        locality: age,
        walk: 0.0,
        amenities: 0.0,
        notes: match property.year_built {
            Some(year) => format!("built {year}, {} years old", reference_year - year),
            None => "construction year unknown".to_string(),
        },
    });

    (city_name, components)
}

fn sum_components(components: &[ScoreComponent]) -> RawScores {
    components.iter().fold(
        RawScores {
            locality: 0.0,
            walk: 0.0,
            amenities: 0.0,
        },
        |acc, component| RawScores {
            locality: acc.locality + component.locality,
            walk: acc.walk + component.walk,
            amenities: acc.amenities + component.amenities,
        },
    )
}

fn finalize(raw: f64, jitter: f64, (min, max): (i32, i32)) -> u8 {
    let value = (raw + jitter).round();
    value.clamp(min as f64, max as f64) as u8
}

/// Compose the three scores for `property`, drawing jitter from `variance`.
///
/// Every returned score lies inside its band regardless of input magnitude.
pub fn compose_scores(
    property: &PropertyInput,
    reference_year: i32,
    variance: &mut dyn VarianceSource,
) -> LocalityScores {
    let (_, components) = collect_components(property, reference_year);
    let raw = sum_components(&components);

    LocalityScores {
        locality_score: finalize(
            raw.locality,
            variance.jitter(LOCALITY_VARIANCE),
            LOCALITY_RANGE,
        ),
        walk_score: finalize(raw.walk, variance.jitter(WALK_VARIANCE), WALK_RANGE),
        amenities_score: finalize(
            raw.amenities,
            variance.jitter(AMENITIES_VARIANCE),
            AMENITIES_RANGE,
        ),
    }
}

/// Jitter-free breakdown of each factor's contribution plus the resulting scores.
pub fn explain_scores(property: &PropertyInput, reference_year: i32) -> ScoreBreakdown {
    let (city, components) = collect_components(property, reference_year);
    let scores = compose_scores(property, reference_year, &mut NoVariance);

    ScoreBreakdown {
        city,
        components,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::variance::RandomVariance;

    const YEAR: i32 = 2025;

    struct FixedVariance(f64);

    impl VarianceSource for FixedVariance {
        fn jitter(&mut self, max_variance: f64) -> f64 {
            self.0.clamp(-max_variance, max_variance)
        }
    }

    fn bandra() -> PropertyInput {
        PropertyInput::new("test-1", "Bandra West, Mumbai", 25_000_000.0, "apartment")
            .with_area(1200.0)
            .with_year_built(2020)
    }

    #[test]
    fn bandra_apartment_lands_at_top_of_band() {
        let scores = compose_scores(&bandra(), YEAR, &mut NoVariance);
        // 85 + 8 + 10 + 3 + 1 before clamping.
        assert_eq!(scores.locality_score, 99);
        // 75 + 4.8 + 5 + 5 = 89.8
        assert_eq!(scores.walk_score, 90);
        assert_eq!(scores.amenities_score, 99);
    }

    #[test]
    fn default_city_without_modifiers() {
        let property = PropertyInput::new("p-1", "Springfield", 1_000_000.0, "unknown");
        let scores = compose_scores(&property, YEAR, &mut NoVariance);
        assert_eq!(
            scores,
            LocalityScores {
                locality_score: 60,
                walk_score: 50,
                amenities_score: 62,
            }
        );
    }

    #[test]
    fn worst_case_inputs_degrade_without_failing() {
        let property = PropertyInput::new("p-2", "", -5.0, "land")
            .with_area(-10.0)
            .with_year_built(1900);
        let scores = compose_scores(&property, YEAR, &mut FixedVariance(-100.0));
        // 60 - 5 - 4 - 3 = 48 locality, 50 - 10 - 4 = 36 walk, 62 - 8 - 3 = 51 amenities.
        assert_eq!(scores.locality_score, 48);
        assert_eq!(scores.walk_score, 36);
        assert_eq!(scores.amenities_score, 51);
    }

    #[test]
    fn finalize_clamps_to_each_band() {
        assert_eq!(finalize(-1_000.0, 0.0, LOCALITY_RANGE), 40);
        assert_eq!(finalize(1_000.0, 0.0, LOCALITY_RANGE), 99);
        assert_eq!(finalize(-1_000.0, 0.0, WALK_RANGE), 30);
        assert_eq!(finalize(72.5, 0.0, WALK_RANGE), 73);
        assert_eq!(finalize(-1_000.0, 0.0, AMENITIES_RANGE), 35);
        assert_eq!(finalize(1_000.0, 0.0, AMENITIES_RANGE), 99);
    }

    #[test]
    fn jitter_shifts_each_score_within_its_window() {
        let property = PropertyInput::new("p-3", "Pune", 1_000_000.0, "townhouse");
        let baseline = compose_scores(&property, YEAR, &mut NoVariance);
        let bumped = compose_scores(&property, YEAR, &mut FixedVariance(10.0));

        assert_eq!(bumped.locality_score, baseline.locality_score + 3);
        assert_eq!(bumped.walk_score, baseline.walk_score + 4);
        assert_eq!(bumped.amenities_score, baseline.amenities_score + 3);
    }

    #[test]
    fn random_scores_respect_ranges() {
        let mut variance = RandomVariance::seeded(2024);
        let locations = ["Bandra West, Mumbai", "Bhopal", "", "Whitefield tech park"];
        let kinds = ["villa", "apartment", "land", "commercial", "barn"];
        for location in locations {
            for kind in kinds {
                for price in [-1.0, 0.0, 3_000_000.0, 90_000_000.0] {
                    let property = PropertyInput::new("r", location, price, kind);
                    let scores = compose_scores(&property, YEAR, &mut variance);
                    assert!((40..=99).contains(&scores.locality_score));
                    assert!((30..=99).contains(&scores.walk_score));
                    assert!((35..=99).contains(&scores.amenities_score));
                }
            }
        }
    }

    #[test]
    fn explanation_lists_every_factor() {
        let breakdown = explain_scores(&bandra(), YEAR);

        assert_eq!(breakdown.city, Some("mumbai"));
        assert_eq!(breakdown.components.len(), 5);
        let premium = breakdown
            .component(ScoreFactor::AreaPremium)
            .expect("premium component");
        assert_eq!(premium.locality, 8.0);
        assert!((premium.walk - 4.8).abs() < 1e-9);
        let age = breakdown.component(ScoreFactor::Age).expect("age component");
        assert_eq!(age.locality, 1.0);
        assert_eq!(age.walk, 0.0);
        assert_eq!(
            breakdown.scores,
            compose_scores(&bandra(), YEAR, &mut NoVariance)
        );
    }
}
