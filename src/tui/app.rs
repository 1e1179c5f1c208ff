//! Application state for the terminal front end.

use crossterm::event::KeyCode;
use tracing::{info, warn};

use crate::core::{Dataset, GameConfig};
use crate::game::{GameState, PanelView};
use crate::map::MapBinding;

use super::map_widget::TerminalMap;

/// Front end state: the dataset, the current game and the map.
pub struct App {
    dataset: Dataset,
    config: GameConfig,
    state: GameState,
    map: MapBinding<TerminalMap>,
    notice: Option<String>,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Start a fresh game and attach the map.
    pub fn new(dataset: Dataset, config: GameConfig) -> Self {
        let state = GameState::new(&dataset);
        let mut map = MapBinding::attach(TerminalMap::new(), config.map);
        map.sync(&dataset.catalog, state.candidates());

        Self {
            dataset,
            config,
            state,
            map,
            notice: None,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        self.notice = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!(answered = self.state.history().len(), "Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                let fresh = self.state.reset(&self.dataset);
                self.replace(fresh);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.choose(index);
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < self.option_count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => self.choose(self.cursor),
            _ => {}
        }
    }

    fn option_count(&self) -> usize {
        self.state
            .current_question(&self.dataset)
            .map_or(0, |question| question.options.len())
    }

    fn choose(&mut self, index: usize) {
        if self.state.is_finished() {
            self.notice = Some("Game over. Press r to play again.".to_string());
            return;
        }
        match self.state.answer(&self.dataset, index) {
            Ok(next) => self.replace(next),
            Err(err) => {
                warn!(error = %err, "Answer rejected");
                self.notice = Some(err.to_string());
            }
        }
    }

    fn replace(&mut self, next: GameState) {
        self.state = next;
        self.cursor = 0;
        self.map.sync(&self.dataset.catalog, self.state.candidates());
    }

    /// What the panel should show right now.
    #[must_use]
    pub fn panel(&self) -> PanelView<'_> {
        PanelView::build(&self.state, &self.dataset, &self.config)
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The loaded dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The map view.
    #[must_use]
    pub fn map(&self) -> &TerminalMap {
        self.map.view()
    }

    /// Highlighted option of the current question.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Message from the last key press, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Check whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
