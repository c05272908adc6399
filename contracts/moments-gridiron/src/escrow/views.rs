use crate::*;

#[near]
impl Contract {
    pub fn get_leaderboard(&self, name: String) -> Option<LeaderboardView> {
        self.leaderboards.get(&name).map(|leaderboard| LeaderboardView {
            name: leaderboard.name.clone(),
            created_at: leaderboard.created_at,
            length: leaderboard.entries.len() as u64,
        })
    }

    pub fn leaderboard_length(&self, name: String) -> u64 {
        self.leaderboards
            .get(&name)
            .map(|leaderboard| leaderboard.entries.len() as u64)
            .unwrap_or(0)
    }

    pub fn leaderboard_contains(&self, name: String, moment_id: u64) -> bool {
        self.leaderboards
            .get(&name)
            .is_some_and(|leaderboard| leaderboard.entries.contains_key(&moment_id))
    }

    pub fn leaderboard_entry(&self, name: String, moment_id: u64) -> Option<EscrowEntry> {
        self.leaderboards
            .get(&name)
            .and_then(|leaderboard| leaderboard.entries.get(&moment_id).cloned())
    }
}
