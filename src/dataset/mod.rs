//! Dataset loading and validation.
//!
//! A dataset is a JSON document with a `cities` array and an ordered
//! `questions` array (see `records`). Loading parses it, checks its
//! structure, applies the `ValidationPolicy` to per-city issues, and
//! builds an immutable `Dataset`.
//!
//! ```
//! use city_hunt::dataset::{self, ValidationPolicy};
//!
//! let dataset = dataset::builtin().unwrap();
//! assert!(dataset.catalog.len() > 10);
//! assert_eq!(dataset.question(0).unwrap().id.as_str(), "continent");
//!
//! let again = dataset::load_str(dataset::BUILTIN_JSON, ValidationPolicy::Strict).unwrap();
//! assert_eq!(again.catalog.len(), dataset.catalog.len());
//! ```

pub mod error;
pub mod records;
pub mod validate;

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::core::{Catalog, Dataset};

pub use error::{DatasetError, ValidationIssue};
pub use records::{CityRecord, DatasetRecord};
pub use validate::ValidationPolicy;

/// The dataset shipped with the crate.
pub const BUILTIN_JSON: &str = include_str!("../../data/cities.json");

/// Load the built-in dataset under the strict policy.
pub fn builtin() -> Result<Dataset, DatasetError> {
    load_str(BUILTIN_JSON, ValidationPolicy::Strict)
}

/// Load a dataset file.
#[instrument(skip_all, fields(path = %path.as_ref().display(), ?policy))]
pub fn load_path(path: impl AsRef<Path>, policy: ValidationPolicy) -> Result<Dataset, DatasetError> {
    build(read_path(path)?, policy)
}

/// Parse a dataset file without validating it.
pub fn read_path(path: impl AsRef<Path>) -> Result<DatasetRecord, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DatasetRecord::from_json(&json)?)
}

/// Load a dataset from JSON text.
pub fn load_str(json: &str, policy: ValidationPolicy) -> Result<Dataset, DatasetError> {
    let record = DatasetRecord::from_json(json)?;
    build(record, policy)
}

/// Validate a parsed dataset and build the catalog.
#[instrument(skip_all, fields(cities = record.cities.len(), questions = record.questions.len(), ?policy))]
pub fn build(mut record: DatasetRecord, policy: ValidationPolicy) -> Result<Dataset, DatasetError> {
    let kinds = validate::check_structure(&record)?;
    let issues = validate::collect_issues(&record, &kinds);

    if !issues.is_empty() {
        match policy {
            ValidationPolicy::Strict => return Err(DatasetError::Invalid(issues)),
            ValidationPolicy::Permissive => {
                for issue in &issues {
                    warn!(%issue, "Keeping city despite validation issue");
                }
                for city in &mut record.cities {
                    if city.coordinates.is_some_and(|c| !c.is_valid()) {
                        city.coordinates = None;
                    }
                }
            }
        }
    }

    let mut catalog = Catalog::new();
    for city in record.cities {
        catalog.register(city.into_city());
    }

    info!(
        cities = catalog.len(),
        questions = record.questions.len(),
        issues = issues.len(),
        "Dataset loaded"
    );

    Ok(Dataset::new(catalog, record.questions))
}

/// Report every per-city issue without building a dataset.
///
/// Structural errors are still returned as `Err`.
pub fn audit(record: &DatasetRecord) -> Result<Vec<ValidationIssue>, DatasetError> {
    let kinds = validate::check_structure(record)?;
    Ok(validate::collect_issues(record, &kinds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAPPY: &str = r#"{
        "cities": [
            { "id": "a", "name": "A", "country": "X",
              "attributes": { "region": "EU" },
              "coordinates": { "lat": 200.0, "lng": 0.0 } },
            { "id": "b", "name": "B", "country": "X", "attributes": {} }
        ],
        "questions": [
            { "id": "region", "text": "Region?",
              "options": [ { "value": "EU", "label": "Europe" } ] }
        ]
    }"#;

    #[test]
    fn test_builtin_is_strictly_valid() {
        let dataset = builtin().unwrap();
        assert_eq!(dataset.question_count(), 6);
        assert!(dataset.catalog.find_key("lisbon").is_some());
        for (_, city) in dataset.catalog.iter() {
            assert!(city.coordinates.is_some(), "{} has no coordinates", city.key);
        }
    }

    #[test]
    fn test_strict_rejects_issues() {
        let err = load_str(GAPPY, ValidationPolicy::Strict).unwrap_err();
        match err {
            DatasetError::Invalid(issues) => assert_eq!(issues.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_permissive_keeps_cities() {
        let dataset = load_str(GAPPY, ValidationPolicy::Permissive).unwrap();
        assert_eq!(dataset.catalog.len(), 2);

        let a = dataset.catalog.get(dataset.catalog.find_key("a").unwrap()).unwrap();
        assert_eq!(a.coordinates, None); // Off-globe coordinates dropped

        let b = dataset.catalog.get(dataset.catalog.find_key("b").unwrap()).unwrap();
        assert!(b.attributes.is_empty());
    }

    #[test]
    fn test_audit_lists_all_issues() {
        let record = DatasetRecord::from_json(GAPPY).unwrap();
        let issues = audit(&record).unwrap();
        let cities: Vec<_> = issues.iter().map(|i| i.city()).collect();
        assert_eq!(cities, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_str("not json", ValidationPolicy::Permissive),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_path("/no/such/dataset.json", ValidationPolicy::Strict),
            Err(DatasetError::Io { .. })
        ));
    }
}
