//! Game state and its presentation model.
//!
//! - `GameState`: one immutable value per point in a game
//! - `HistoryEntry`: display record of one answer
//! - `PanelView`: what a front end should show for a state

pub mod state;
pub mod view;

pub use state::{GameError, GameState, HistoryEntry};
pub use view::{PanelView, Prompt, Summary};
