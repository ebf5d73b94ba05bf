use crate::domain::{
    leaderboard, total_profit_loss, DraftError, Game, GameDraft, LeaderboardEntry, Player,
};
use crate::storage::{SettingsStore, StorageError};
use chrono::NaiveDate;
use uuid::Uuid;

/// Slot key the serialized game collection lives under
const GAMES_KEY: &str = "saved_poker_games";

/// Authoritative in-memory collection of recorded games
///
/// Owns the collection for the lifetime of the process and keeps a durable
/// copy in its settings slot: every mutation re-serializes the whole
/// collection before returning. Collection order is entry order and is the
/// display order.
///
/// Persistence is best-effort by contract: a failed write is logged and
/// swallowed (the durable copy goes stale, in-memory state stays correct),
/// and a failed load starts the store empty. Callers that need to observe
/// a persistence failure use [`flush`](Self::flush).
///
/// Single-threaded by design; a concurrent presentation layer must wrap
/// the store in its own mutual exclusion.
#[derive(Debug)]
pub struct GameStore<S: SettingsStore> {
    games: Vec<Game>,
    settings: S,
}

impl<S: SettingsStore> GameStore<S> {
    /// Construct the store, loading any previously saved collection
    ///
    /// An empty slot, an unreadable slot, and an undecodable slot all
    /// yield an empty collection; the two failure cases are logged.
    pub fn load(settings: S) -> Self {
        let games = match settings.get(GAMES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Game>>(&raw) {
                Ok(games) => games,
                Err(err) => {
                    tracing::warn!(%err, "saved games undecodable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%err, "saved games unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = games.len(), "game store loaded");
        GameStore { games, settings }
    }

    // ===== Queries =====

    /// Current collection in display order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look up a game by id
    pub fn get_game(&self, game_id: Uuid) -> Option<&Game> {
        self.games.iter().find(|g| g.id() == game_id)
    }

    /// The backing settings store
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Aggregate profit for `player_name` across every recorded game
    pub fn total_profit_loss(&self, player_name: &str) -> f64 {
        total_profit_loss(&self.games, player_name)
    }

    /// All-time leaderboard over the current collection
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard(&self.games)
    }

    // ===== Mutations =====

    /// Record a new game at the end of the collection
    ///
    /// Returns the fresh game id.
    pub fn add_game(
        &mut self,
        game_type: impl Into<String>,
        date: NaiveDate,
        currency: impl Into<String>,
        players: Vec<Player>,
    ) -> Uuid {
        let game = Game::new(game_type, date, currency, players);
        let id = game.id();
        self.games.push(game);
        self.persist();
        id
    }

    /// Record a finished draft; fails only on an empty roster
    pub fn add_draft(&mut self, draft: GameDraft) -> Result<Uuid, DraftError> {
        let game = draft.finish()?;
        let id = game.id();
        self.games.push(game);
        self.persist();
        Ok(id)
    }

    /// Append a player to an existing game's roster
    ///
    /// The game keeps its position in the collection. An unknown id is a
    /// no-op: the collection is untouched and `false` is returned.
    pub fn add_player(&mut self, game_id: Uuid, player: Player) -> bool {
        match self.games.iter_mut().find(|g| g.id() == game_id) {
            Some(game) => {
                game.add_player(player);
                self.persist();
                true
            }
            None => {
                tracing::warn!(%game_id, "add_player on unknown game id, ignoring");
                false
            }
        }
    }

    // ===== Persistence =====

    /// Re-serialize the collection into the slot, surfacing any failure
    pub fn flush(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.games)?;
        self.settings.set(GAMES_KEY, &raw)
    }

    /// Best-effort persist after a mutation; failures are logged only
    fn persist(&mut self) {
        if let Err(err) = self.flush() {
            tracing::warn!(%err, "failed to persist games, durable copy is stale");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn roster() -> Vec<Player> {
        vec![
            Player::new("Alice", 50.0, 80.0, Some(1)),
            Player::new("Bob", 50.0, 20.0, Some(2)),
        ]
    }

    #[test]
    fn test_load_from_empty_slot() {
        let store = GameStore::load(MemoryStore::new());

        assert!(store.is_empty());
        assert!(store.leaderboard().is_empty());
    }

    #[test]
    fn test_load_from_corrupt_slot_starts_empty() {
        let mut settings = MemoryStore::new();
        settings.set(GAMES_KEY, "{definitely not a game list").unwrap();

        let store = GameStore::load(settings);

        assert!(store.is_empty());
    }

    #[test]
    fn test_add_game_appends_in_order() {
        let mut store = GameStore::load(MemoryStore::new());

        let first = store.add_game("Texas Hold'em", date(), "USD", roster());
        let second = store.add_game("Omaha", date(), "EUR", roster());

        assert_eq!(store.len(), 2);
        assert_eq!(store.games()[0].id(), first);
        assert_eq!(store.games()[1].id(), second);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let mut store = GameStore::load(MemoryStore::new());
        let game_id = store.add_game("Texas Hold'em", date(), "USD", roster());
        store.add_player(game_id, Player::new("Carol", 30.0, 45.0, None));

        // Hand the settings store to a fresh GameStore, as a process
        // restart would
        let GameStore { settings, .. } = store;
        let reloaded = GameStore::load(settings);

        assert_eq!(reloaded.len(), 1);
        let game = reloaded.get_game(game_id).unwrap();
        assert_eq!(game.players().len(), 3);
        assert_eq!(game.players()[2].name(), "Carol");
    }

    #[test]
    fn test_add_player_unknown_id_is_noop() {
        let mut store = GameStore::load(MemoryStore::new());
        store.add_game("Texas Hold'em", date(), "USD", roster());
        let before = store.games().to_vec();

        let added = store.add_player(Uuid::new_v4(), Player::new("Carol", 10.0, 0.0, None));

        assert!(!added);
        assert_eq!(store.games(), &before[..]);
    }

    #[test]
    fn test_add_player_keeps_game_position() {
        let mut store = GameStore::load(MemoryStore::new());
        let first = store.add_game("Texas Hold'em", date(), "USD", roster());
        store.add_game("Omaha", date(), "EUR", roster());

        store.add_player(first, Player::new("Carol", 10.0, 5.0, None));

        assert_eq!(store.games()[0].id(), first);
        assert_eq!(store.games()[0].players().len(), 3);
    }

    #[test]
    fn test_add_draft() {
        let mut store = GameStore::load(MemoryStore::new());
        let mut draft = GameDraft::new(date());
        draft.add_player(Player::new("Alice", 10.0, 30.0, None));

        let id = store.add_draft(draft).unwrap();

        assert_eq!(store.get_game(id).unwrap().players().len(), 1);
    }

    #[test]
    fn test_add_empty_draft_rejected() {
        let mut store = GameStore::load(MemoryStore::new());

        let result = store.add_draft(GameDraft::new(date()));

        assert_eq!(result.unwrap_err(), DraftError::EmptyRoster);
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_surface_delegates_to_metrics() {
        let mut store = GameStore::load(MemoryStore::new());
        store.add_game(
            "Texas Hold'em",
            date(),
            "USD",
            vec![Player::new("Alice", 30.0, 50.0, None)],
        );
        store.add_game(
            "Texas Hold'em",
            date(),
            "USD",
            vec![Player::new("Alice", 20.0, 15.0, None)],
        );

        assert_eq!(store.total_profit_loss("Alice"), 15.0);

        let board = store.leaderboard();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].profit, 15.0);
    }

    #[test]
    fn test_flush_writes_current_collection() {
        let mut store = GameStore::load(MemoryStore::new());
        store.add_game("Texas Hold'em", date(), "USD", roster());

        store.flush().unwrap();

        let GameStore { settings, .. } = store;
        let raw = settings.get(GAMES_KEY).unwrap().unwrap();
        let decoded: Vec<Game> = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded.len(), 1);
    }
}
