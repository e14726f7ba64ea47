use super::domain::{CityData, PropertyType, TypeAdjustment};
use super::tables::{
    ABSOLUTE_PRICE_TIERS, AGE_BANDS, AGE_FLOOR_DELTA, CITY_TABLE, COMMERCIAL_BONUS,
    COMMERCIAL_KEYWORDS, DEFAULT_CITY, MAX_LOCATION_PREMIUM, PREMIUM_AREAS, PREMIUM_AREA_BONUS,
    PRICE_PER_AREA_TIERS,
};

/// First table city contained in the location, with its base scores.
pub(crate) fn match_city(location: &str) -> Option<(&'static str, CityData)> {
    let normalized = location.to_lowercase();
    CITY_TABLE
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(key, data)| (*key, *data))
}

pub fn city_data(location: &str) -> CityData {
    match_city(location)
        .map(|(_, data)| data)
        .unwrap_or(DEFAULT_CITY)
}

/// Premium-neighborhood and commercial keyword bonuses, each applied at most once.
pub fn location_premium(location: &str) -> i32 {
    let normalized = location.to_lowercase();
    let mut premium = 0;

    if PREMIUM_AREAS.iter().any(|area| normalized.contains(area)) {
        premium += PREMIUM_AREA_BONUS;
    }

    if COMMERCIAL_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
    {
        premium += COMMERCIAL_BONUS;
    }

    premium.min(MAX_LOCATION_PREMIUM)
}

/// Price bonus from price per square foot, or from absolute price when area is unusable.
pub fn price_modifier(price: f64, area: Option<f64>) -> i32 {
    match area {
        Some(area) if area > 0.0 => ladder(price / area, PRICE_PER_AREA_TIERS),
        _ => ladder(price, ABSOLUTE_PRICE_TIERS),
    }
}

fn ladder(value: f64, tiers: &[(f64, i32)]) -> i32 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

pub fn type_adjustment(kind: PropertyType) -> TypeAdjustment {
    let (locality, walk, amenities) = match kind {
        PropertyType::Villa | PropertyType::House => (5, -5, -2),
        PropertyType::Apartment | PropertyType::Condo => (3, 5, 5),
        PropertyType::Townhouse => (2, 0, 2),
        PropertyType::Commercial => (-2, 8, 8),
        PropertyType::Land => (-5, -10, -8),
        PropertyType::Other => (0, 0, 0),
    };

    TypeAdjustment {
        locality,
        walk,
        amenities,
    }
}

/// Locality-only age decay relative to `reference_year`.
pub fn age_modifier(year_built: Option<i32>, reference_year: i32) -> i32 {
    let Some(year_built) = year_built else {
        return 0;
    };

    let age = reference_year - year_built;
    AGE_BANDS
        .iter()
        .find(|(upper, _)| age < *upper)
        .map(|(_, delta)| *delta)
        .unwrap_or(AGE_FLOOR_DELTA)
}
