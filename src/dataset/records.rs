//! On-disk dataset records.
//!
//! These mirror the JSON format one-to-one. They are converted into
//! `Catalog`/`Dataset` only after validation.

use serde::{Deserialize, Serialize};

use crate::core::{Attributes, City, Coordinates, Question};

/// A city as written in the dataset file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Unique key.
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl CityRecord {
    /// Convert into a catalog city.
    #[must_use]
    pub fn into_city(self) -> City {
        City {
            key: self.id,
            name: self.name,
            country: self.country,
            attributes: self.attributes,
            coordinates: self.coordinates,
        }
    }
}

/// The whole dataset file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl DatasetRecord {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
