mod leaderboard;
mod types;
mod views;

pub use types::{EscrowEntry, Leaderboard, LeaderboardView};
