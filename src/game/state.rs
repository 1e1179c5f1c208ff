//! Game state as a single immutable value.
//!
//! Every transition returns a new `GameState`; the old one is left
//! untouched. Candidates and history are `im` persistent vectors, so
//! keeping old states around (for undo, replays or tests) is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{AttributeValue, CityId, Dataset, Question};
use crate::rules::{apply_answer, Outcome};

/// Display-only record of one answered question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Question text as shown.
    pub question: String,

    /// Label of the chosen option.
    pub answer: String,

    /// Candidates left after this answer.
    pub remaining: usize,
}

/// Errors from answering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("game is over ({0}); reset to play again")]
    Finished(Outcome),

    #[error("dataset has no question at index {0}")]
    NoQuestion(usize),

    #[error("option {index} does not exist ({available} available)")]
    InvalidOption { index: usize, available: usize },

    #[error("value {0} is not an option of the current question")]
    UnknownValue(AttributeValue),
}

/// One game in progress or finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    candidates: Vector<CityId>,
    question_index: usize,
    history: Vector<HistoryEntry>,
    outcome: Outcome,
}

impl GameState {
    /// The starting state: every city, first question, no history.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            candidates: dataset.catalog.all_ids(),
            question_index: 0,
            history: Vector::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start over. Equivalent to `GameState::new`, whatever `self` holds.
    #[must_use]
    pub fn reset(&self, dataset: &Dataset) -> Self {
        info!(answered = self.history.len(), "Resetting game");
        Self::new(dataset)
    }

    /// Answer the current question with the option at `option_index`.
    pub fn answer(&self, dataset: &Dataset, option_index: usize) -> Result<Self, GameError> {
        let question = self.active_question(dataset)?;
        let option = question
            .option(option_index)
            .ok_or(GameError::InvalidOption {
                index: option_index,
                available: question.options.len(),
            })?;

        let transition = apply_answer(
            &dataset.catalog,
            &self.candidates,
            self.question_index,
            dataset.question_count(),
            question.key(),
            &option.value,
        );

        let mut history = self.history.clone();
        history.push_back(HistoryEntry {
            question: question.text.clone(),
            answer: option.label.clone(),
            remaining: transition.candidates.len(),
        });

        debug!(
            step = self.question_index + 1,
            answer = %option.label,
            remaining = transition.candidates.len(),
            "Question answered"
        );

        Ok(Self {
            candidates: transition.candidates,
            question_index: transition.next_question_index,
            history,
            outcome: transition.outcome,
        })
    }

    /// Answer the current question by option value.
    pub fn answer_value(&self, dataset: &Dataset, value: &AttributeValue) -> Result<Self, GameError> {
        let question = self.active_question(dataset)?;
        let (index, _) = question
            .find_option(value)
            .ok_or_else(|| GameError::UnknownValue(value.clone()))?;
        self.answer(dataset, index)
    }

    fn active_question<'d>(&self, dataset: &'d Dataset) -> Result<&'d Question, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::Finished(self.outcome));
        }
        dataset
            .question(self.question_index)
            .ok_or(GameError::NoQuestion(self.question_index))
    }

    /// The question awaiting an answer, if the game is still going.
    #[must_use]
    pub fn current_question<'d>(&self, dataset: &'d Dataset) -> Option<&'d Question> {
        self.active_question(dataset).ok()
    }

    /// Cities still consistent with every answer.
    #[must_use]
    pub fn candidates(&self) -> &Vector<CityId> {
        &self.candidates
    }

    /// Number of remaining candidates.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Zero-based index of the current (or, once finished, last) question.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Answers given so far.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }
}
