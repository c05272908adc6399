use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::LEADERBOARD;

pub fn emit_leaderboard_created(actor_id: &AccountId, name: &str) {
    EventBuilder::new(LEADERBOARD, "create", actor_id)
        .field("name", name)
        .emit();
}

pub fn emit_moment_escrowed(owner_id: &AccountId, leaderboard_name: &str, moment_id: u64) {
    EventBuilder::new(LEADERBOARD, "escrow", owner_id)
        .field("leaderboard_name", leaderboard_name)
        .field("moment_id", moment_id)
        .emit();
}

pub fn emit_moment_unescrowed(
    actor_id: &AccountId,
    leaderboard_name: &str,
    moment_id: u64,
    returned_to: &AccountId,
) {
    EventBuilder::new(LEADERBOARD, "withdraw", actor_id)
        .field("leaderboard_name", leaderboard_name)
        .field("moment_id", moment_id)
        .field("returned_to", returned_to)
        .emit();
}
