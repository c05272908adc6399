use crate::*;

#[near]
impl Contract {
    pub fn collection_length(&self, account_id: AccountId) -> u64 {
        self.collections
            .get(&account_id)
            .map(|collection| collection.len())
            .unwrap_or(0)
    }

    pub fn collection_contains(&self, account_id: AccountId, moment_id: u64) -> bool {
        self.collections
            .get(&account_id)
            .is_some_and(|collection| collection.contains(moment_id))
    }

    /// Held moment ids, sorted. Bucket layout is an implementation detail and
    /// must not leak into the observable order.
    pub fn collection_moment_ids(&self, account_id: AccountId) -> Vec<u64> {
        let Some(collection) = self.collections.get(&account_id) else {
            return vec![];
        };
        let mut ids: Vec<u64> = collection.iter().collect();
        ids.sort_unstable();
        ids
    }

    pub fn collection_bucket_count(&self, account_id: AccountId) -> Option<u32> {
        self.collections
            .get(&account_id)
            .map(|collection| collection.bucket_count)
    }
}
