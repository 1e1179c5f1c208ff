//! Questions and their answer options.
//!
//! A question tests one attribute. Its ID doubles as the attribute key,
//! and each option pairs a value to compare with a label to show.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{AttributeKey, AttributeValue, ValueKind};

/// One selectable answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Value compared against each city's attribute.
    pub value: AttributeValue,

    /// Display text.
    pub label: String,
}

impl AnswerOption {
    /// Create a new answer option.
    pub fn new(value: impl Into<AttributeValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Answer options. Most questions have two to four.
pub type AnswerOptions = SmallVec<[AnswerOption; 4]>;

/// A multiple-choice question about one attribute.
///
/// ## Example
///
/// ```
/// use city_hunt::core::Question;
///
/// let coastal = Question::new("coastal", "Is it on the coast?")
///     .with_option(true, "Yes")
///     .with_option(false, "No");
///
/// assert_eq!(coastal.options.len(), 2);
/// assert_eq!(coastal.key().as_str(), "coastal");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question ID, also the attribute key it tests.
    pub id: AttributeKey,

    /// Display text.
    pub text: String,

    /// Options in presentation order.
    pub options: AnswerOptions,
}

impl Question {
    /// Create a question with no options.
    pub fn new(id: impl Into<AttributeKey>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options: SmallVec::new(),
        }
    }

    /// Add an option (builder pattern).
    #[must_use]
    pub fn with_option(mut self, value: impl Into<AttributeValue>, label: impl Into<String>) -> Self {
        self.options.push(AnswerOption::new(value, label));
        self
    }

    /// The attribute key this question tests.
    #[must_use]
    pub fn key(&self) -> &AttributeKey {
        &self.id
    }

    /// Get an option by index.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Find the option carrying `value`.
    #[must_use]
    pub fn find_option(&self, value: &AttributeValue) -> Option<(usize, &AnswerOption)> {
        self.options.iter().enumerate().find(|(_, o)| &o.value == value)
    }

    /// The value kind shared by every option.
    ///
    /// `None` if there are no options or they disagree.
    #[must_use]
    pub fn value_kind(&self) -> Option<ValueKind> {
        let first = self.options.first()?.value.kind();
        self.options
            .iter()
            .all(|o| o.value.kind() == first)
            .then_some(first)
    }
}
