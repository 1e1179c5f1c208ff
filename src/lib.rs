//! # city-hunt
//!
//! A "twenty questions" game over world cities. The player answers a
//! fixed sequence of multiple-choice questions; each answer removes every
//! city whose attribute differs, until one city is left, none are, or the
//! questions run out. A map follows the shrinking candidate set.
//!
//! ## Design Principles
//!
//! 1. **One Immutable State**: `GameState` is a single value replaced
//!    wholesale on every answer. Candidates and history are `im`
//!    persistent vectors, so old states stay valid and cheap to keep.
//!
//! 2. **Pure Rules**: the elimination engine is a pure function from
//!    (candidates, question, answer) to a new candidate set and outcome.
//!
//! 3. **Typed Data**: attribute values are a closed enum, and question
//!    kinds are checked against city attributes when the dataset loads.
//!
//! ## Modules
//!
//! - `core`: Cities, attributes, questions, catalog, RNG, configuration
//! - `dataset`: JSON loading and validation policies
//! - `rules`: Elimination engine and outcome classification
//! - `game`: Game state, reset, and the presentation model
//! - `map`: Map widget contract, viewport selection, scoped binding
//! - `autoplay`: Scripted answerers and batch simulation
//! - `tui`: Terminal front end
//!
//! ## Example
//!
//! ```
//! use city_hunt::{dataset, GameState, Outcome};
//!
//! let data = dataset::builtin().unwrap();
//! let state = GameState::new(&data);
//!
//! // "Which continent?" -> Europe
//! let state = state.answer(&data, 0).unwrap();
//! assert!(state.remaining() < data.catalog.len());
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! ```

pub mod autoplay;
pub mod core;
pub mod dataset;
pub mod game;
pub mod map;
pub mod rules;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    AnswerOption, AttributeKey, AttributeValue, Catalog, City, CityId, Coordinates, Dataset,
    GameConfig, GameRng, Question, ValueKind,
};

pub use crate::dataset::{DatasetError, ValidationPolicy};

pub use crate::rules::{apply_answer, filter_candidates, Outcome, Transition};

pub use crate::game::{GameError, GameState, HistoryEntry, PanelView};

pub use crate::map::{Camera, MapBinding, MapSettings, MapView, Marker};

pub use crate::autoplay::{Answerer, SimulationConfig, SimulationStats, Simulator};
