use crate::domain::Player;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One recorded poker session: date, type, currency, and its roster
///
/// The roster keeps entry order; the persistence format (a JSON array) is
/// required to preserve it across save/load cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique game identifier
    id: Uuid,

    /// Calendar date of the session
    date: NaiveDate,

    /// Free-text label, e.g. "Texas Hold'em"
    game_type: String,

    /// Display currency code; not validated against the supported list
    currency: String,

    /// Roster in entry order
    players: Vec<Player>,
}

impl Game {
    /// Create a new game with a random id
    pub fn new(
        game_type: impl Into<String>,
        date: NaiveDate,
        currency: impl Into<String>,
        players: Vec<Player>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), game_type, date, currency, players)
    }

    /// Create a game with a specific id
    pub fn with_id(
        id: Uuid,
        game_type: impl Into<String>,
        date: NaiveDate,
        currency: impl Into<String>,
        players: Vec<Player>,
    ) -> Self {
        Game {
            id,
            date,
            game_type: game_type.into(),
            currency: currency.into(),
            players,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn game_type(&self) -> &str {
        &self.game_type
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    // ===== Roster management =====

    /// Append a player to the end of the roster
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    // ===== Derived totals =====

    /// Sum of all buy-ins; 0 for an empty roster
    pub fn total_buy_in(&self) -> f64 {
        self.players.iter().map(Player::buy_in).sum()
    }

    /// Sum of all cash-outs; 0 for an empty roster
    pub fn total_cash_out(&self) -> f64 {
        self.players.iter().map(Player::cash_out).sum()
    }

    /// Net profit per player name within this game
    ///
    /// When two players in one game share a name, their profits are summed
    /// under that name, matching the cross-game aggregation semantics.
    pub fn profit_loss_per_player(&self) -> HashMap<String, f64> {
        let mut profits: HashMap<String, f64> = HashMap::new();
        for player in &self.players {
            *profits.entry(player.name().to_string()).or_insert(0.0) += player.profit();
        }
        profits
    }
}
