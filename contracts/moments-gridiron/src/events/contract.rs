use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}
