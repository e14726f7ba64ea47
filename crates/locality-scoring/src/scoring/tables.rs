use super::domain::CityData;

const fn city(base: i32, walkability: i32, amenities: i32) -> CityData {
    CityData {
        base,
        walkability,
        amenities,
    }
}

pub const DEFAULT_CITY: CityData = city(60, 50, 62);

/// Known cities, matched by substring against the lowercased location in this order.
/// Suburbs whose names contain a metro name sit ahead of that metro.
pub const CITY_TABLE: &[(&str, CityData)] = &[
    ("navi mumbai", city(77, 66, 79)),
    ("thane", city(76, 65, 78)),
    ("mumbai", city(85, 75, 88)),
    ("new delhi", city(84, 72, 86)),
    ("delhi", city(82, 70, 85)),
    ("gurugram", city(80, 60, 84)),
    ("gurgaon", city(80, 60, 84)),
    ("noida", city(75, 58, 78)),
    ("bengaluru", city(83, 68, 86)),
    ("bangalore", city(83, 68, 86)),
    ("hyderabad", city(80, 65, 82)),
    ("chennai", city(79, 66, 81)),
    ("pune", city(78, 67, 80)),
    ("kolkata", city(76, 72, 78)),
    ("ahmedabad", city(72, 62, 74)),
    ("chandigarh", city(74, 64, 75)),
    ("goa", city(74, 55, 70)),
    ("kochi", city(71, 62, 72)),
    ("jaipur", city(70, 60, 72)),
    ("lucknow", city(68, 58, 70)),
    ("coimbatore", city(67, 58, 68)),
    ("indore", city(66, 58, 68)),
    ("nagpur", city(65, 56, 66)),
    ("bhopal", city(64, 55, 66)),
];

pub const PREMIUM_AREA_BONUS: i32 = 8;
pub const COMMERCIAL_BONUS: i32 = 5;
pub const MAX_LOCATION_PREMIUM: i32 = 15;

pub const PREMIUM_AREAS: &[&str] = &[
    "bandra",
    "juhu",
    "worli",
    "colaba",
    "malabar hill",
    "lower parel",
    "powai",
    "andheri west",
    "vasant vihar",
    "greater kailash",
    "defence colony",
    "golf course road",
    "koramangala",
    "indiranagar",
    "whitefield",
    "jubilee hills",
    "banjara hills",
    "gachibowli",
    "koregaon park",
    "kalyani nagar",
    "boat club road",
    "alwarpet",
    "adyar",
    "ballygunge",
    "salt lake",
];

pub const COMMERCIAL_KEYWORDS: &[&str] = &[
    "mall",
    "tech park",
    "it park",
    "cyber city",
    "business district",
    "sez",
    "metro",
    "station",
    "airport",
    "highway",
    "expressway",
    "school",
    "college",
    "hospital",
    "market",
];

/// Price-per-square-foot ladder (INR), checked top down.
pub const PRICE_PER_AREA_TIERS: &[(f64, i32)] = &[
    (15_000.0, 10),
    (10_000.0, 7),
    (7_000.0, 4),
    (4_000.0, 2),
];

/// Absolute price ladder (INR) used when no usable area is supplied.
pub const ABSOLUTE_PRICE_TIERS: &[(f64, i32)] = &[
    (50_000_000.0, 8),
    (20_000_000.0, 6),
    (10_000_000.0, 4),
    (5_000_000.0, 2),
];

/// Upper age bound (exclusive) and locality delta, checked top down.
pub const AGE_BANDS: &[(i32, i32)] = &[(5, 3), (10, 1), (20, 0), (30, -2)];
pub const AGE_FLOOR_DELTA: i32 = -4;

pub const LOCALITY_VARIANCE: f64 = 3.0;
pub const WALK_VARIANCE: f64 = 4.0;
pub const AMENITIES_VARIANCE: f64 = 3.0;

pub const WALK_PREMIUM_WEIGHT: f64 = 0.6;
pub const WALK_PRICE_WEIGHT: f64 = 0.5;
pub const AMENITIES_PREMIUM_WEIGHT: f64 = 0.8;
pub const AMENITIES_PRICE_WEIGHT: f64 = 0.7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_keys_are_lowercase_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in CITY_TABLE {
            assert_eq!(*key, key.to_lowercase());
            assert!(seen.insert(*key), "duplicate city key {key}");
        }
    }

    #[test]
    fn suburbs_precede_their_metro() {
        let position = |name: &str| {
            CITY_TABLE
                .iter()
                .position(|(key, _)| *key == name)
                .expect("city present")
        };
        assert!(position("navi mumbai") < position("mumbai"));
        assert!(position("new delhi") < position("delhi"));
    }
}
