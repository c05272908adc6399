use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CATALOG;

pub fn emit_series_created(actor_id: &AccountId, series_id: u64, name: &str) {
    EventBuilder::new(CATALOG, "series_create", actor_id)
        .field("series_id", series_id)
        .field("name", name)
        .emit();
}

pub fn emit_series_closed(actor_id: &AccountId, series_id: u64) {
    EventBuilder::new(CATALOG, "series_close", actor_id)
        .field("series_id", series_id)
        .emit();
}

pub fn emit_set_created(actor_id: &AccountId, set_id: u64, name: &str) {
    EventBuilder::new(CATALOG, "set_create", actor_id)
        .field("set_id", set_id)
        .field("name", name)
        .emit();
}

pub fn emit_play_created(actor_id: &AccountId, play_id: u64, classification: &str) {
    EventBuilder::new(CATALOG, "play_create", actor_id)
        .field("play_id", play_id)
        .field("classification", classification)
        .emit();
}

pub fn emit_play_updated(actor_id: &AccountId, play_id: u64, updated_fields: &[&str]) {
    EventBuilder::new(CATALOG, "play_update", actor_id)
        .field("play_id", play_id)
        .field("updated_fields", updated_fields)
        .emit();
}

pub fn emit_edition_created(
    actor_id: &AccountId,
    edition_id: u64,
    series_id: u64,
    set_id: u64,
    play_id: u64,
    tier: &str,
    max_mint_size: Option<u64>,
) {
    EventBuilder::new(CATALOG, "edition_create", actor_id)
        .field("edition_id", edition_id)
        .field("series_id", series_id)
        .field("set_id", set_id)
        .field("play_id", play_id)
        .field("tier", tier)
        .field_opt("max_mint_size", max_mint_size)
        .emit();
}

pub fn emit_edition_closed(actor_id: &AccountId, edition_id: u64) {
    EventBuilder::new(CATALOG, "edition_close", actor_id)
        .field("edition_id", edition_id)
        .emit();
}

// Cap-triggered closure carries no external actor; the contract acts.
pub fn emit_edition_capped(edition_id: u64) {
    EventBuilder::new(CATALOG, "edition_capped", &near_sdk::env::current_account_id())
        .field("edition_id", edition_id)
        .emit();
}
