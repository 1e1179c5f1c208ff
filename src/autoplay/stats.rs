//! Aggregate statistics over simulated games.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

use super::GameRecord;

/// Counts collected while simulating.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: u32,

    /// Games ending in `Solved`.
    pub solved: u32,

    /// Solved games that named the target.
    pub correct: u32,

    /// Games ending in `Contradiction`.
    pub contradictions: u32,

    /// Games ending in `Exhausted`.
    pub exhausted: u32,

    /// Questions answered across all games.
    pub questions_asked: u64,

    /// Total time spent simulating (microseconds).
    pub time_us: u64,
}

impl SimulationStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.questions_asked += game.questions_asked() as u64;
        match game.outcome() {
            Outcome::Solved(_) => {
                self.solved += 1;
                if game.is_correct() {
                    self.correct += 1;
                }
            }
            Outcome::Contradiction => self.contradictions += 1,
            Outcome::Exhausted => self.exhausted += 1,
            Outcome::InProgress => {}
        }
    }

    /// Fraction of games solved.
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        ratio(self.solved as f64, self.games as f64)
    }

    /// Average questions answered per game.
    #[must_use]
    pub fn avg_questions(&self) -> f64 {
        ratio(self.questions_asked as f64, self.games as f64)
    }

    /// Games simulated per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        ratio(self.games as f64, self.time_us as f64 / 1_000_000.0)
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
