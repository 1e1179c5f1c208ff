//! Scripted answerers.
//!
//! An answerer stands in for the player: given the current question it
//! picks an option index. `TruthfulAnswerer` answers for a secret target
//! city; `RandomAnswerer` picks uniformly.

use crate::core::{CityId, Dataset, GameRng, Question};

/// Picks answers on the player's behalf.
pub trait Answerer {
    /// Choose an option index for `question`. Must be in bounds when the
    /// question has options.
    fn choose(&mut self, dataset: &Dataset, question: &Question) -> usize;

    /// The city this answerer is thinking of, if any.
    fn target(&self) -> Option<CityId> {
        None
    }
}

/// Answers every question truthfully for `target`.
///
/// When the target has no value for the tested attribute, or a value no
/// option carries, a random option is chosen instead.
#[derive(Clone, Debug)]
pub struct TruthfulAnswerer {
    target: CityId,
    rng: GameRng,
}

impl TruthfulAnswerer {
    /// Create a truthful answerer for `target`.
    #[must_use]
    pub fn new(target: CityId, rng: GameRng) -> Self {
        Self { target, rng }
    }

    /// Option index matching the target's attribute, if there is one.
    #[must_use]
    pub fn truthful_option(&self, dataset: &Dataset, question: &Question) -> Option<usize> {
        let value = dataset.catalog.get(self.target)?.attr(question.key())?;
        question.find_option(value).map(|(index, _)| index)
    }
}

impl Answerer for TruthfulAnswerer {
    fn choose(&mut self, dataset: &Dataset, question: &Question) -> usize {
        match self.truthful_option(dataset, question) {
            Some(index) => index,
            None => self.rng.gen_index(question.options.len()),
        }
    }

    fn target(&self) -> Option<CityId> {
        Some(self.target)
    }
}

/// Picks a uniformly random option every time.
#[derive(Clone, Debug)]
pub struct RandomAnswerer {
    rng: GameRng,
}

impl RandomAnswerer {
    /// Create a random answerer.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Answerer for RandomAnswerer {
    fn choose(&mut self, _dataset: &Dataset, question: &Question) -> usize {
        self.rng.gen_index(question.options.len())
    }
}
