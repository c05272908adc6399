use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::COLLECTION;

pub fn emit_collection_setup(account_id: &AccountId, bucket_count: u32) {
    EventBuilder::new(COLLECTION, "setup", account_id)
        .field("bucket_count", bucket_count)
        .emit();
}
