//! City catalog and the dataset bundle.
//!
//! The `Catalog` stores all cities in load order and looks them up by
//! `CityId` or dataset key. A `Dataset` pairs it with the ordered
//! question list. Both are immutable once the game starts.

use im::Vector;
use rustc_hash::FxHashMap;

use super::city::{City, CityId};
use super::question::Question;

/// Registry of cities.
///
/// ## Example
///
/// ```
/// use city_hunt::core::{Catalog, City};
///
/// let mut catalog = Catalog::new();
/// let id = catalog.register(City::new("rome", "Rome", "Italy"));
///
/// assert_eq!(catalog.get(id).unwrap().name, "Rome");
/// assert_eq!(catalog.find_key("rome"), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cities: Vec<City>,
    by_key: FxHashMap<String, CityId>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city and return its ID.
    ///
    /// Panics if a city with the same key already exists. The dataset
    /// loader checks for duplicates before registering.
    pub fn register(&mut self, city: City) -> CityId {
        if self.by_key.contains_key(&city.key) {
            panic!("City with key {:?} already registered", city.key);
        }
        let id = CityId::new(self.cities.len() as u32);
        self.by_key.insert(city.key.clone(), id);
        self.cities.push(city);
        id
    }

    /// Get a city by ID.
    #[must_use]
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    /// Look up a city ID by dataset key.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<CityId> {
        self.by_key.get(key).copied()
    }

    /// Get the number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterate over `(id, city)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (CityId::new(i as u32), c))
    }

    /// Every city ID in catalog order. This is the starting candidate set.
    #[must_use]
    pub fn all_ids(&self) -> Vector<CityId> {
        (0..self.cities.len() as u32).map(CityId::new).collect()
    }

    /// Resolve a list of IDs to cities, skipping unknown IDs.
    pub fn resolve<'a, 'i>(&'a self, ids: impl IntoIterator<Item = &'i CityId>) -> Vec<&'a City> {
        ids.into_iter().filter_map(|id| self.get(*id)).collect()
    }
}

/// A catalog plus the ordered question list.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// All cities.
    pub catalog: Catalog,

    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

impl Dataset {
    /// Bundle a catalog with its questions.
    #[must_use]
    pub fn new(catalog: Catalog, questions: Vec<Question>) -> Self {
        Self { catalog, questions }
    }

    /// Get a question by index.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
