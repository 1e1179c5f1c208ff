//! Elimination rules.
//!
//! One answer filters the candidate set down to the cities whose tested
//! attribute equals the chosen value, then classifies the result:
//! - exactly one city left: solved
//! - none left: contradiction
//! - several left on the last question: exhausted
//! - otherwise: move on to the next question

pub mod engine;

pub use engine::{apply_answer, filter_candidates, Outcome, Transition};
