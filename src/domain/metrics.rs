//! Cross-game aggregation over a collection of games
//!
//! Pure functions of their inputs; the store delegates its query surface
//! here.

use crate::domain::Game;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One row of the all-time leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardEntry {
    /// Player display name (names are aggregated case-sensitively)
    pub name: String,
    /// Aggregate profit across all recorded games
    pub profit: f64,
}

/// Aggregate profit for one player name across every game
///
/// Sums `profit()` for every player whose name equals `player_name`
/// exactly (case-sensitive). A name that never appears yields 0.
pub fn total_profit_loss(games: &[Game], player_name: &str) -> f64 {
    games
        .iter()
        .flat_map(Game::players)
        .filter(|p| p.name() == player_name)
        .map(|p| p.profit())
        .sum()
}

/// All-time leaderboard: one entry per distinct name, descending by profit
///
/// Ties keep first-encounter order. Accumulation walks games and rosters in
/// order and the final sort is stable, so repeated calls on identical input
/// produce identical output.
pub fn leaderboard(games: &[Game]) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut encounter_order: Vec<&str> = Vec::new();

    for game in games {
        for player in game.players() {
            if !totals.contains_key(player.name()) {
                encounter_order.push(player.name());
            }
            *totals.entry(player.name()).or_insert(0.0) += player.profit();
        }
    }

    let mut entries: Vec<LeaderboardEntry> = encounter_order
        .into_iter()
        .map(|name| LeaderboardEntry {
            name: name.to_string(),
            profit: totals[name],
        })
        .collect();

    // sort_by is stable: equal profits keep encounter order
    entries.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    entries
}
