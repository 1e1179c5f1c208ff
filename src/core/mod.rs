//! Core types: cities, attributes, questions, catalog, RNG, configuration.
//!
//! Everything here is plain immutable data. The game logic that operates
//! on it lives in `rules` and `game`.

pub mod attributes;
pub mod city;
pub mod question;
pub mod catalog;
pub mod rng;
pub mod config;

pub use attributes::{AttributeKey, AttributeValue, Attributes, ValueKind};
pub use city::{City, CityId, Coordinates};
pub use question::{AnswerOption, AnswerOptions, Question};
pub use catalog::{Catalog, Dataset};
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig};
