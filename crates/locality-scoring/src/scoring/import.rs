use super::domain::PropertyInput;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PropertyImportError {
    #[error("failed to read property export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid property CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a listing export with headers
/// `id,location,latitude,longitude,price,area,type,year_built`.
///
/// Only `id`, `location`, `price`, and `type` are required columns; blank optional cells read
/// as absent.
pub fn parse_properties<R: Read>(reader: R) -> Result<Vec<PropertyInput>, PropertyImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut properties = Vec::new();
    for row in csv_reader.deserialize::<PropertyRow>() {
        properties.push(row?.into());
    }
    Ok(properties)
}

pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyInput>, PropertyImportError> {
    let file = File::open(path)?;
    parse_properties(file)
}

#[derive(Debug, Deserialize)]
struct PropertyRow {
    id: String,
    location: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    longitude: Option<f64>,
    price: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    area: Option<f64>,
    #[serde(rename = "type")]
    property_type: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    year_built: Option<i32>,
}

impl From<PropertyRow> for PropertyInput {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: row.id,
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            price: row.price,
            area: row.area,
            property_type: row.property_type,
            year_built: row.year_built,
        }
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_and_sparse_rows() {
        let csv = "id,location,latitude,longitude,price,area,type,year_built\n\
p-1,\"Bandra West, Mumbai\",19.06,72.83,25000000,1200,apartment,2020\n\
p-2,Bhopal,,,4500000,,villa,\n";

        let properties = parse_properties(csv.as_bytes()).expect("csv parses");
        assert_eq!(properties.len(), 2);

        let first = &properties[0];
        assert_eq!(first.location, "Bandra West, Mumbai");
        assert_eq!(first.area, Some(1200.0));
        assert_eq!(first.latitude, Some(19.06));
        assert_eq!(first.year_built, Some(2020));

        let second = &properties[1];
        assert!(second.area.is_none());
        assert!(second.latitude.is_none());
        assert!(second.year_built.is_none());
        assert_eq!(second.property_type, "villa");
    }

    #[test]
    fn optional_columns_may_be_omitted() {
        let csv = "id,location,price,type\nq-1,Goa,9000000,villa\n";
        let properties = parse_properties(csv.as_bytes()).expect("csv parses");
        assert_eq!(properties[0], PropertyInput::new("q-1", "Goa", 9_000_000.0, "villa"));
    }

    #[test]
    fn malformed_numbers_surface_as_csv_errors() {
        let csv = "id,location,price,area,type\nq-2,Pune,12000000,big,condo\n";
        let err = parse_properties(csv.as_bytes()).expect_err("bad area rejected");
        assert!(matches!(err, PropertyImportError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_properties("/nonexistent/listings.csv").expect_err("missing file");
        assert!(matches!(err, PropertyImportError::Io(_)));
    }
}
