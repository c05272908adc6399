use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MOMENT;

pub fn emit_moment_minted(
    actor_id: &AccountId,
    receiver_id: &AccountId,
    moment_id: u64,
    edition_id: u64,
    serial_number: u64,
) {
    EventBuilder::new(MOMENT, "mint", actor_id)
        .field("receiver_id", receiver_id)
        .field("moment_id", moment_id)
        .field("edition_id", edition_id)
        .field("serial_number", serial_number)
        .emit();
}

pub fn emit_moment_batch_minted(actor_id: &AccountId, receiver_id: &AccountId, moment_ids: &[u64]) {
    EventBuilder::new(MOMENT, "batch_mint", actor_id)
        .field("receiver_id", receiver_id)
        .field("moment_ids", moment_ids)
        .emit();
}

pub fn emit_moment_transferred(sender_id: &AccountId, receiver_id: &AccountId, moment_ids: &[u64]) {
    EventBuilder::new(MOMENT, "transfer", sender_id)
        .field("receiver_id", receiver_id)
        .field("moment_ids", moment_ids)
        .emit();
}

pub fn emit_moment_burned(actor_id: &AccountId, leaderboard_name: &str, moment_id: u64) {
    EventBuilder::new(MOMENT, "burn", actor_id)
        .field("leaderboard_name", leaderboard_name)
        .field("moment_id", moment_id)
        .emit();
}
