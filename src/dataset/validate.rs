//! Load-time dataset checks.
//!
//! Structural problems (no cities, duplicate keys, questions whose options
//! disagree on value kind) always reject a dataset. Per-city problems
//! (a missing tested attribute, a value of the wrong kind, coordinates off
//! the globe) are `ValidationIssue`s, and the `ValidationPolicy` decides
//! what happens to them.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{AttributeKey, Question, ValueKind};

use super::error::{DatasetError, ValidationIssue};
use super::records::{CityRecord, DatasetRecord};

/// What to do with per-city validation issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject the dataset.
    #[default]
    Strict,
    /// Log each issue and keep the city. A city missing an attribute then
    /// never matches questions about it. Invalid coordinates are dropped.
    Permissive,
}

/// Check dataset-wide structure and return each question's value kind.
pub fn check_structure(record: &DatasetRecord) -> Result<FxHashMap<AttributeKey, ValueKind>, DatasetError> {
    if record.cities.is_empty() {
        return Err(DatasetError::EmptyCatalog);
    }
    if record.questions.is_empty() {
        return Err(DatasetError::NoQuestions);
    }

    let mut seen = FxHashSet::default();
    for city in &record.cities {
        if !seen.insert(city.id.as_str()) {
            return Err(DatasetError::DuplicateCity(city.id.clone()));
        }
    }

    let mut kinds = FxHashMap::default();
    for question in &record.questions {
        let kind = question_kind(question)?;
        if kinds.insert(question.id.clone(), kind).is_some() {
            return Err(DatasetError::DuplicateQuestion(question.id.clone()));
        }
    }
    Ok(kinds)
}

fn question_kind(question: &Question) -> Result<ValueKind, DatasetError> {
    if question.options.is_empty() {
        return Err(DatasetError::NoOptions(question.id.clone()));
    }
    let kind = question
        .value_kind()
        .ok_or_else(|| DatasetError::MixedOptionKinds(question.id.clone()))?;

    for (i, option) in question.options.iter().enumerate() {
        if question.options[..i].iter().any(|o| o.value == option.value) {
            return Err(DatasetError::DuplicateOption {
                question: question.id.clone(),
                value: option.value.clone(),
            });
        }
    }
    Ok(kind)
}

/// Collect every per-city issue, in city order then question order.
#[must_use]
pub fn collect_issues(
    record: &DatasetRecord,
    kinds: &FxHashMap<AttributeKey, ValueKind>,
) -> Vec<ValidationIssue> {
    record
        .cities
        .iter()
        .flat_map(|city| city_issues(city, &record.questions, kinds))
        .collect()
}

fn city_issues(
    city: &CityRecord,
    questions: &[Question],
    kinds: &FxHashMap<AttributeKey, ValueKind>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for question in questions {
        let Some(&expected) = kinds.get(&question.id) else {
            continue;
        };
        match city.attributes.get(&question.id) {
            None => issues.push(ValidationIssue::MissingAttribute {
                city: city.id.clone(),
                attribute: question.id.clone(),
            }),
            Some(value) if value.kind() != expected => issues.push(ValidationIssue::KindMismatch {
                city: city.id.clone(),
                attribute: question.id.clone(),
                expected,
                found: value.kind(),
            }),
            Some(_) => {}
        }
    }

    if let Some(coords) = city.coordinates {
        if !coords.is_valid() {
            issues.push(ValidationIssue::InvalidCoordinates {
                city: city.id.clone(),
                lat: coords.lat,
                lng: coords.lng,
            });
        }
    }

    issues
}
