//! City records - static catalog data.
//!
//! A `City` holds everything the game knows about one place: display
//! name and country, the attributes questions test, and optional
//! coordinates for the map. Cities never change after load.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Identifier for a city within a loaded catalog.
///
/// IDs are dense indices assigned in load order, so ordering by `CityId`
/// is catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u32);

impl CityId {
    /// Create a new city ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as a catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// Geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, -90 (south) to 90 (north).
    pub lat: f64,
    /// Longitude, -180 (west) to 180 (east).
    pub lng: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite and on the globe.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Static city record.
///
/// ## Example
///
/// ```
/// use city_hunt::core::{City, Coordinates};
///
/// let lisbon = City::new("lisbon", "Lisbon", "Portugal")
///     .with_attr("continent", "Europe")
///     .with_attr("coastal", true)
///     .with_coordinates(Coordinates::new(38.72, -9.14));
///
/// assert_eq!(lisbon.get_text("continent"), Some("Europe"));
/// assert_eq!(lisbon.get_bool("coastal"), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique dataset key ("lisbon").
    pub key: String,

    /// Display name.
    pub name: String,

    /// Country name.
    pub country: String,

    /// Attributes tested by questions.
    pub attributes: Attributes,

    /// Position for the map. `None` if unknown.
    pub coordinates: Option<Coordinates>,
}

impl City {
    /// Create a new city with no attributes and no coordinates.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            country: country.into(),
            attributes: Attributes::default(),
            coordinates: None,
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the coordinates (builder pattern).
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn attr(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Get an attribute value by string key.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Get a boolean attribute.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_attr(key).and_then(|v| v.as_bool())
    }

    /// Check whether this city's `key` attribute equals `value`.
    ///
    /// A missing attribute never matches.
    #[must_use]
    pub fn matches(&self, key: &AttributeKey, value: &AttributeValue) -> bool {
        self.attr(key) == Some(value)
    }

    /// "Name, Country" for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}
