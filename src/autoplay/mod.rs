//! Scripted games for demos and dataset auditing.
//!
//! `play_out` drives one game to its end with an `Answerer` in the
//! player's seat. `Simulator` runs many such games from a seed and
//! collects `SimulationStats`, which is a quick way to see how often the
//! question set fails to tell cities apart.
//!
//! ## Example
//!
//! ```
//! use city_hunt::autoplay::{SimulationConfig, Simulator};
//! use city_hunt::dataset;
//!
//! let data = dataset::builtin().unwrap();
//! let report = Simulator::new(SimulationConfig::new().with_games(5).with_seed(7))
//!     .run(&data)
//!     .unwrap();
//!
//! assert_eq!(report.stats.games, 5);
//! assert_eq!(report.stats.contradictions, 0);
//! ```

pub mod answerer;
pub mod stats;

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::core::{CityId, Dataset, GameRng};
use crate::game::{GameError, GameState};
use crate::rules::Outcome;

pub use answerer::{Answerer, RandomAnswerer, TruthfulAnswerer};
pub use stats::SimulationStats;

/// Errors from simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutoplayError {
    #[error("no city with key '{0}'")]
    UnknownTarget(String),

    #[error("dataset has no cities to pick a target from")]
    NoCities,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// One finished scripted game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    /// City the answerer had in mind, if any.
    pub target: Option<CityId>,

    /// Final state, including the full answer history.
    pub state: GameState,
}

impl GameRecord {
    /// How the game ended.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Number of questions answered.
    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.state.history().len()
    }

    /// Check whether the game was solved and named the target.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        match (self.target, self.outcome()) {
            (Some(target), Outcome::Solved(city)) => target == city,
            _ => false,
        }
    }

    /// Check whether the target survived to the end.
    #[must_use]
    pub fn target_remains(&self) -> bool {
        self.target
            .is_some_and(|t| self.state.candidates().contains(&t))
    }
}

/// Play one game to completion.
///
/// Every answer either advances the question index or ends the game, so
/// this takes at most one step per question.
pub fn play_out(dataset: &Dataset, answerer: &mut dyn Answerer) -> Result<GameRecord, GameError> {
    let mut state = GameState::new(dataset);

    while !state.is_finished() {
        let question = state
            .current_question(dataset)
            .ok_or(GameError::NoQuestion(state.question_index()))?;
        let choice = answerer.choose(dataset, question);
        state = state.answer(dataset, choice)?;
    }

    Ok(GameRecord {
        target: answerer.target(),
        state,
    })
}

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Seed for target picks and fallback answers.
    pub seed: u64,

    /// Fixed target key. `None` picks a random city per game.
    pub target: Option<String>,

    /// Answer truthfully for the target (`true`) or at random.
    pub truthful: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 0,
            target: None,
            truthful: true,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fix the target city by key.
    #[must_use]
    pub fn with_target(mut self, key: impl Into<String>) -> Self {
        self.target = Some(key.into());
        self
    }

    /// Answer at random instead of truthfully.
    #[must_use]
    pub fn with_random_answers(mut self) -> Self {
        self.truthful = false;
        self
    }
}

/// Results of a simulation run.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    /// Every game, in play order.
    pub records: Vec<GameRecord>,

    /// Totals over `records`.
    pub stats: SimulationStats,
}

/// Runs batches of scripted games.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Play every configured game against `dataset`.
    #[instrument(skip_all, fields(games = self.config.games, seed = self.config.seed))]
    pub fn run(&self, dataset: &Dataset) -> Result<SimulationReport, AutoplayError> {
        let fixed_target = match &self.config.target {
            Some(key) => Some(
                dataset
                    .catalog
                    .find_key(key)
                    .ok_or_else(|| AutoplayError::UnknownTarget(key.clone()))?,
            ),
            None => None,
        };

        let start = Instant::now();
        let mut master = GameRng::new(self.config.seed);
        let mut records = Vec::with_capacity(self.config.games);
        let mut stats = SimulationStats::new();

        for game in 0..self.config.games {
            let mut rng = master.fork();
            let record = if self.config.truthful {
                let target = match fixed_target {
                    Some(target) => target,
                    None => rng.pick_city(&dataset.catalog).ok_or(AutoplayError::NoCities)?,
                };
                play_out(dataset, &mut TruthfulAnswerer::new(target, rng))?
            } else {
                play_out(dataset, &mut RandomAnswerer::new(rng))?
            };

            debug!(
                game,
                target = ?record.target,
                outcome = %record.outcome(),
                questions = record.questions_asked(),
                "Game simulated"
            );
            stats.record(&record);
            records.push(record);
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            games = stats.games,
            solved = stats.solved,
            exhausted = stats.exhausted,
            contradictions = stats.contradictions,
            "Simulation complete"
        );

        Ok(SimulationReport { records, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, City, Question};

    fn dataset() -> Dataset {
        let mut catalog = Catalog::new();
        catalog.register(City::new("a", "A", "X").with_attr("region", "EU").with_attr("coastal", true));
        catalog.register(City::new("b", "B", "X").with_attr("region", "EU").with_attr("coastal", false));
        catalog.register(City::new("c", "C", "Y").with_attr("region", "AS").with_attr("coastal", true));
        catalog.register(City::new("d", "D", "Y").with_attr("region", "AS").with_attr("coastal", true));

        let questions = vec![
            Question::new("region", "Which region?")
                .with_option("EU", "Europe")
                .with_option("AS", "Asia"),
            Question::new("coastal", "On the coast?")
                .with_option(true, "Yes")
                .with_option(false, "No"),
        ];
        Dataset::new(catalog, questions)
    }

    #[test]
    fn test_play_out_truthful() {
        let data = dataset();
        let target = data.catalog.find_key("b").unwrap();
        let record = play_out(&data, &mut TruthfulAnswerer::new(target, GameRng::new(1))).unwrap();

        assert_eq!(record.outcome(), Outcome::Solved(target));
        assert!(record.is_correct());
        assert_eq!(record.questions_asked(), 2);
    }

    #[test]
    fn test_play_out_indistinguishable() {
        let data = dataset();
        let target = data.catalog.find_key("c").unwrap();
        let record = play_out(&data, &mut TruthfulAnswerer::new(target, GameRng::new(1))).unwrap();

        assert_eq!(record.outcome(), Outcome::Exhausted);
        assert!(!record.is_correct());
        assert!(record.target_remains());
    }

    #[test]
    fn test_play_out_no_questions() {
        let data = Dataset::new(dataset().catalog, Vec::new());
        let err = play_out(&data, &mut RandomAnswerer::new(GameRng::new(1))).unwrap_err();
        assert_eq!(err, GameError::NoQuestion(0));
    }

    #[test]
    fn test_simulation_config_builder() {
        let config = SimulationConfig::new()
            .with_games(3)
            .with_seed(99)
            .with_target("a")
            .with_random_answers();

        assert_eq!(config.games, 3);
        assert_eq!(config.seed, 99);
        assert_eq!(config.target.as_deref(), Some("a"));
        assert!(!config.truthful);
    }

    #[test]
    fn test_simulator_fixed_target() {
        let data = dataset();
        let report = Simulator::new(SimulationConfig::new().with_games(4).with_target("a"))
            .run(&data)
            .unwrap();

        assert_eq!(report.records.len(), 4);
        assert_eq!(report.stats.games, 4);
        assert_eq!(report.stats.correct, 4);
        assert_eq!(report.stats.questions_asked, 8);
    }

    #[test]
    fn test_simulator_unknown_target() {
        let err = Simulator::new(SimulationConfig::new().with_target("zz"))
            .run(&dataset())
            .unwrap_err();
        assert_eq!(err, AutoplayError::UnknownTarget("zz".into()));
    }

    #[test]
    fn test_simulator_is_deterministic() {
        let data = dataset();
        let config = SimulationConfig::new().with_games(8).with_seed(5);

        let first = Simulator::new(config.clone()).run(&data).unwrap();
        let second = Simulator::new(config).run(&data).unwrap();

        assert_eq!(first.records, second.records);
    }

    #[test]
    fn test_random_answers_finish() {
        let data = dataset();
        let report = Simulator::new(SimulationConfig::new().with_games(20).with_random_answers())
            .run(&data)
            .unwrap();

        let stats = &report.stats;
        assert_eq!(stats.solved + stats.exhausted + stats.contradictions, 20);
        assert!(report.records.iter().all(|r| r.target.is_none()));
    }
}
