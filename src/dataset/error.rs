//! Dataset error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{AttributeKey, AttributeValue, ValueKind};

/// A per-city problem found while checking a dataset against its questions.
///
/// Under the strict policy any issue rejects the dataset. Under the
/// permissive policy issues are logged and the city is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("city {city:?} has no '{attribute}' attribute")]
    MissingAttribute { city: String, attribute: AttributeKey },

    #[error("city {city:?} attribute '{attribute}' is {found}, question expects {expected}")]
    KindMismatch {
        city: String,
        attribute: AttributeKey,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("city {city:?} has coordinates off the globe ({lat}, {lng})")]
    InvalidCoordinates { city: String, lat: f64, lng: f64 },
}

impl ValidationIssue {
    /// Key of the city the issue is about.
    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            ValidationIssue::MissingAttribute { city, .. }
            | ValidationIssue::KindMismatch { city, .. }
            | ValidationIssue::InvalidCoordinates { city, .. } => city,
        }
    }
}

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset has no cities")]
    EmptyCatalog,

    #[error("dataset has no questions")]
    NoQuestions,

    #[error("duplicate city id {0:?}")]
    DuplicateCity(String),

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(AttributeKey),

    #[error("question '{0}' has no options")]
    NoOptions(AttributeKey),

    #[error("question '{0}' mixes option value kinds")]
    MixedOptionKinds(AttributeKey),

    #[error("question '{question}' lists option value {value} twice")]
    DuplicateOption {
        question: AttributeKey,
        value: AttributeValue,
    },

    #[error("dataset failed validation: {}", summarize(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn summarize(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "no issues".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}
