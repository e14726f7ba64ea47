use serde::{Deserialize, Serialize};

/// Listing snapshot supplied by the caller; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub id: String,
    pub location: String,
    /// Accepted but not yet used by any modifier.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Accepted but not yet used by any modifier.
    #[serde(default)]
    pub longitude: Option<f64>,
    pub price: f64,
    /// Floor size in square feet.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub year_built: Option<i32>,
}

impl PropertyInput {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        property_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            latitude: None,
            longitude: None,
            price,
            area: None,
            property_type: property_type.into(),
            year_built: None,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_year_built(mut self, year: i32) -> Self {
        self.year_built = Some(year);
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Memoization key: id, location, price, and raw type only.
    ///
    /// Area, coordinates, and construction year are not part of the key, so inputs that differ
    /// only in those fields share an entry.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.id, self.location, self.price, self.property_type
        )
    }

    pub fn kind(&self) -> PropertyType {
        PropertyType::parse(&self.property_type)
    }
}

/// Recognized property categories. Anything else scores as [`PropertyType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Villa,
    House,
    Apartment,
    Condo,
    Townhouse,
    Commercial,
    Land,
    Other,
}

impl PropertyType {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "villa" => Self::Villa,
            "house" => Self::House,
            "apartment" => Self::Apartment,
            "condo" => Self::Condo,
            "townhouse" => Self::Townhouse,
            "commercial" => Self::Commercial,
            "land" => Self::Land,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
            PropertyType::Other => "other",
        }
    }
}

/// Base scores for a known city (or the fallback entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityData {
    pub base: i32,
    pub walkability: i32,
    pub amenities: i32,
}

/// Per-dimension deltas applied by the property-type modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TypeAdjustment {
    pub locality: i32,
    pub walk: i32,
    pub amenities: i32,
}

pub const LOCALITY_RANGE: (i32, i32) = (40, 99);
pub const WALK_RANGE: (i32, i32) = (30, 99);
pub const AMENITIES_RANGE: (i32, i32) = (35, 99);

/// Final clamped scores shown on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalityScores {
    pub locality_score: u8,
    pub walk_score: u8,
    pub amenities_score: u8,
}

impl LocalityScores {
    /// Badges in display order for the property detail view.
    pub fn badges(&self) -> [ScoreBadge; 3] {
        [
            ScoreBadge {
                label: "Locality Score",
                value: self.locality_score,
            },
            ScoreBadge {
                label: "Walkability",
                value: self.walk_score,
            },
            ScoreBadge {
                label: "Amenities",
                value: self.amenities_score,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub label: &'static str,
    pub value: u8,
}

/// Named contribution to a score, kept for audit views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CityBase,
    AreaPremium,
    Price,
    PropertyType,
    Age,
}

/// Raw (unclamped) contribution of one factor to each of the three scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub locality: f64,
    pub walk: f64,
    pub amenities: f64,
    pub notes: String,
}

/// Variance-free explanation of how a property's scores were assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub city: Option<&'static str>,
    pub components: Vec<ScoreComponent>,
    pub scores: LocalityScores,
}

impl ScoreBreakdown {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}
