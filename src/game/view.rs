//! Presentation model for the side panel and overlays.
//!
//! `PanelView` is everything a front end shows, computed from a
//! `GameState`. It holds borrowed data only and renders nothing itself,
//! so the rules for what appears when can be tested without a terminal.

use im::Vector;

use crate::core::{AnswerOption, City, Dataset, GameConfig};
use crate::rules::Outcome;

use super::state::{GameState, HistoryEntry};

/// The question panel while a game is in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Prompt<'d> {
    /// Question text.
    pub text: &'d str,

    /// Options in presentation order.
    pub options: &'d [AnswerOption],

    /// One-based step number.
    pub step: usize,

    /// Total number of questions.
    pub total: usize,
}

/// The overlay shown once a game is over.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary<'d> {
    /// The city was identified.
    Solved(&'d City),
    /// Questions ran out; these cities remain.
    Exhausted(Vec<&'d City>),
    /// No city matches the answers.
    Contradiction,
}

/// Everything the presentation layer displays for one state.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView<'d> {
    /// Number of remaining candidates.
    pub remaining: usize,

    /// Elimination log, oldest first.
    pub history: Vector<HistoryEntry>,

    /// Current question. `None` once the game is over.
    pub prompt: Option<Prompt<'d>>,

    /// Remaining cities, when few enough to list and not yet solved.
    pub listing: Option<Vec<&'d City>>,

    /// End-of-game overlay. `None` while in progress.
    pub summary: Option<Summary<'d>>,
}

impl<'d> PanelView<'d> {
    /// Build the view for `state`.
    #[must_use]
    pub fn build(state: &GameState, dataset: &'d Dataset, config: &GameConfig) -> Self {
        let remaining = state.remaining();
        let catalog = &dataset.catalog;

        let prompt = state.current_question(dataset).map(|q| Prompt {
            text: &q.text,
            options: &q.options,
            step: state.question_index() + 1,
            total: dataset.question_count(),
        });

        let listing = (remaining > 1 && remaining <= config.candidate_list_threshold)
            .then(|| catalog.resolve(state.candidates().iter()));

        let summary = match state.outcome() {
            Outcome::InProgress => None,
            Outcome::Solved(id) => Some(catalog.get(id).map_or(Summary::Contradiction, Summary::Solved)),
            Outcome::Exhausted => Some(Summary::Exhausted(catalog.resolve(state.candidates().iter()))),
            Outcome::Contradiction => Some(Summary::Contradiction),
        };

        Self {
            remaining,
            history: state.history().clone(),
            prompt,
            listing,
            summary,
        }
    }

    /// "STEP 2/6" style progress text, while a question is showing.
    #[must_use]
    pub fn progress(&self) -> Option<String> {
        self.prompt
            .as_ref()
            .map(|p| format!("STEP {}/{}", p.step, p.total))
    }
}
