use crate::guards::hash_account_id;
use crate::storage::StorageKey;
use near_sdk::store::IterableSet;
use near_sdk::{near, AccountId};

/// Per-account ownership index partitioned into a fixed number of buckets by
/// `id % bucket_count`, so per-operation storage reads stay bounded for
/// accounts holding large numbers of moments. Callers never touch a bucket
/// directly; insert/remove/contains/len/iter are the only primitives.
#[near(serializers = [borsh])]
pub struct ShardedCollection {
    pub bucket_count: u32,
    buckets: Vec<IterableSet<u64>>,
}

impl ShardedCollection {
    pub fn new(account_id: &AccountId, bucket_count: u32) -> Self {
        let account_id_hash = hash_account_id(account_id);
        let buckets = (0..bucket_count)
            .map(|index| {
                IterableSet::new(StorageKey::CollectionBucket {
                    account_id_hash: account_id_hash.clone(),
                    index,
                })
            })
            .collect();
        Self {
            bucket_count,
            buckets,
        }
    }

    fn bucket_index(&self, moment_id: u64) -> usize {
        (moment_id % self.bucket_count as u64) as usize
    }

    pub fn insert(&mut self, moment_id: u64) -> bool {
        let index = self.bucket_index(moment_id);
        self.buckets[index].insert(moment_id)
    }

    pub fn remove(&mut self, moment_id: u64) -> bool {
        let index = self.bucket_index(moment_id);
        self.buckets[index].remove(&moment_id)
    }

    pub fn contains(&self, moment_id: u64) -> bool {
        let index = self.bucket_index(moment_id);
        self.buckets[index].contains(&moment_id)
    }

    pub fn len(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.len() as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter().copied())
    }
}
