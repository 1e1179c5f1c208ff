//! The elimination step.
//!
//! `apply_answer` is a pure function from (candidates, question position,
//! chosen value) to the next candidates and outcome. It never touches
//! history or any other state; `game::GameState` wraps it.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AttributeKey, AttributeValue, Catalog, CityId};

/// Classification of a game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// More questions to ask.
    #[default]
    InProgress,
    /// Exactly one city remains.
    Solved(CityId),
    /// No city matches the answers.
    Contradiction,
    /// Questions ran out with several cities remaining.
    Exhausted,
}

impl Outcome {
    /// Classify a candidate set.
    ///
    /// Priority: one candidate solves, zero contradicts, and only then do
    /// remaining questions matter.
    #[must_use]
    pub fn classify(candidates: &Vector<CityId>, questions_remain: bool) -> Self {
        match candidates.len() {
            1 => Outcome::Solved(candidates[0]),
            0 => Outcome::Contradiction,
            _ if questions_remain => Outcome::InProgress,
            _ => Outcome::Exhausted,
        }
    }

    /// Check whether the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The identified city, if solved.
    #[must_use]
    pub fn solved_city(&self) -> Option<CityId> {
        match self {
            Outcome::Solved(id) => Some(*id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Solved(id) => write!(f, "solved ({id})"),
            Outcome::Contradiction => f.write_str("contradiction"),
            Outcome::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Result of applying one answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Candidates consistent with every answer so far.
    pub candidates: Vector<CityId>,

    /// Outcome after this answer.
    pub outcome: Outcome,

    /// Index of the next question. Unchanged when the outcome is terminal.
    pub next_question_index: usize,
}

/// Keep the candidates whose `key` attribute equals `value`.
///
/// Candidates unknown to the catalog, or lacking the attribute, are
/// dropped. Order is preserved.
#[must_use]
pub fn filter_candidates(
    catalog: &Catalog,
    candidates: &Vector<CityId>,
    key: &AttributeKey,
    value: &AttributeValue,
) -> Vector<CityId> {
    candidates
        .iter()
        .copied()
        .filter(|id| catalog.get(*id).is_some_and(|city| city.matches(key, value)))
        .collect()
}

/// Apply an answer to question `question_index` of `question_count`.
///
/// ```
/// use city_hunt::core::{Catalog, City};
/// use city_hunt::rules::{apply_answer, Outcome};
///
/// let mut catalog = Catalog::new();
/// let a = catalog.register(City::new("a", "A", "X").with_attr("region", "EU"));
/// let b = catalog.register(City::new("b", "B", "X").with_attr("region", "EU"));
/// catalog.register(City::new("c", "C", "Y").with_attr("region", "AS"));
///
/// let t = apply_answer(&catalog, &catalog.all_ids(), 0, 2, &"region".into(), &"EU".into());
/// assert_eq!(t.candidates, im::vector![a, b]);
/// assert_eq!(t.outcome, Outcome::InProgress);
/// assert_eq!(t.next_question_index, 1);
/// ```
#[must_use]
pub fn apply_answer(
    catalog: &Catalog,
    candidates: &Vector<CityId>,
    question_index: usize,
    question_count: usize,
    key: &AttributeKey,
    value: &AttributeValue,
) -> Transition {
    let next = filter_candidates(catalog, candidates, key, value);
    let questions_remain = question_index + 1 < question_count;
    let outcome = Outcome::classify(&next, questions_remain);

    let next_question_index = if outcome.is_terminal() {
        question_index
    } else {
        question_index + 1
    };

    debug!(
        %key,
        %value,
        before = candidates.len(),
        after = next.len(),
        %outcome,
        "Applied answer"
    );

    Transition {
        candidates: next,
        outcome,
        next_question_index,
    }
}
