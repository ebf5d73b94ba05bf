pub mod application;
pub mod domain;
pub mod storage;

pub use application::GameStore;
pub use domain::{
    leaderboard, total_profit_loss, DraftError, Game, GameDraft, LeaderboardEntry, Outcome, Player,
};
pub use storage::{FileStore, MemoryStore, SettingsStore, StorageError};
