use crate::domain::currency::DEFAULT_CURRENCY;
use crate::domain::{Game, Player};
use chrono::NaiveDate;

/// Game type preselected on a fresh draft
pub const DEFAULT_GAME_TYPE: &str = "Texas Hold'em";

/// Errors that can occur when finishing a draft
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DraftError {
    #[error("Cannot save a game without players")]
    EmptyRoster,
}

/// Roster builder for a game that has not been saved yet
///
/// This is the only point in the system where a player can be removed:
/// once the draft is finished into a [`Game`], the roster is append-only.
#[derive(Debug, Clone)]
pub struct GameDraft {
    game_type: String,
    date: NaiveDate,
    currency: String,
    players: Vec<Player>,
}

impl GameDraft {
    /// Start a draft for the given session date with the form defaults
    pub fn new(date: NaiveDate) -> Self {
        GameDraft {
            game_type: DEFAULT_GAME_TYPE.to_string(),
            date,
            currency: DEFAULT_CURRENCY.to_string(),
            players: Vec::new(),
        }
    }

    // ===== Getters =====

    pub fn game_type(&self) -> &str {
        &self.game_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    // ===== Form fields =====

    pub fn set_game_type(&mut self, game_type: impl Into<String>) {
        self.game_type = game_type.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    // ===== Roster =====

    /// Append a player to the draft roster
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Remove the player at `index`, keeping the order of the rest
    ///
    /// Returns `None` when the index is out of range.
    pub fn remove_player(&mut self, index: usize) -> Option<Player> {
        if index < self.players.len() {
            Some(self.players.remove(index))
        } else {
            None
        }
    }

    /// Turn the draft into a [`Game`] with a fresh id
    ///
    /// Fails on an empty roster; the form disables saving in that state.
    pub fn finish(self) -> Result<Game, DraftError> {
        if self.players.is_empty() {
            return Err(DraftError::EmptyRoster);
        }

        Ok(Game::new(
            self.game_type,
            self.date,
            self.currency,
            self.players,
        ))
    }
}
