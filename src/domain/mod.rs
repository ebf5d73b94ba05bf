pub mod currency;
pub mod draft;
pub mod game;
pub mod metrics;
pub mod player;

pub use currency::{DEFAULT_CURRENCY, SUPPORTED_CURRENCIES};
pub use draft::{DraftError, GameDraft, DEFAULT_GAME_TYPE};
pub use game::Game;
pub use metrics::{leaderboard, total_profit_loss, LeaderboardEntry};
pub use player::{Outcome, Player};
