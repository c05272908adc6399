use near_sdk::store::IterableMap;
use near_sdk::{near, AccountId};

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct EscrowEntry {
    // The depositing owner; withdrawal returns the moment to this account.
    pub owner_id: AccountId,
    pub escrowed_at: u64,
}

#[near(serializers = [borsh])]
pub struct Leaderboard {
    pub name: String,
    pub created_at: u64,
    pub(crate) entries: IterableMap<u64, EscrowEntry>,
}

#[near(serializers = [json])]
pub struct LeaderboardView {
    pub name: String,
    pub created_at: u64,
    pub length: u64,
}
