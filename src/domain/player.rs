use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Win/loss classification of a player's session result
///
/// Non-negative profit counts as a win; the presentation layer keys its
/// green/red rendering off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Classify a profit value
    pub fn from_profit(profit: f64) -> Self {
        if profit >= 0.0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Loss => write!(f, "Loss"),
        }
    }
}

/// One participant's buy-in/cash-out record for a single session
///
/// Amounts are currency-agnostic numeric values; the currency code lives on
/// the owning [`Game`](crate::domain::Game). Field names on the wire follow
/// the persisted layout (`buyIn`, `cashOut`, `finalPosition`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier, generated at creation, never reused
    id: Uuid,
    /// Display name (not unique, even within a game)
    name: String,
    /// Amount brought to the table
    buy_in: f64,
    /// Amount left the table with
    cash_out: f64,
    /// Finishing position (1 = first); `None` means unranked/unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    final_position: Option<u32>,
}

impl Player {
    /// Create a new player record with a fresh id
    pub fn new(
        name: impl Into<String>,
        buy_in: f64,
        cash_out: f64,
        final_position: Option<u32>,
    ) -> Self {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            buy_in,
            cash_out,
            final_position,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buy_in(&self) -> f64 {
        self.buy_in
    }

    pub fn cash_out(&self) -> f64 {
        self.cash_out
    }

    pub fn final_position(&self) -> Option<u32> {
        self.final_position
    }

    // Derived values

    /// Net result for this session: cash-out minus buy-in
    ///
    /// Computed on demand, never stored.
    pub fn profit(&self) -> f64 {
        self.cash_out - self.buy_in
    }

    /// Win/loss classification of [`profit`](Self::profit)
    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit())
    }
}
