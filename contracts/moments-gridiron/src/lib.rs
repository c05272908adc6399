use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, PanicOnDefault};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod allocator;
mod events;
mod protocol;
mod storage;

mod badges;
mod catalog;
mod collection;
mod escrow;
mod moment;

mod admin;
mod dispatch;
mod execute;


pub use allocator::IdAllocator;
pub use badges::{Badge, BadgeUpdate, EntityRef, EntityType};
pub use catalog::{Edition, Play, PlayDynamicMetadata, Series, SetRecord};
pub use collection::ShardedCollection;
pub use constants::*;
pub use errors::CatalogError;
pub use escrow::{EscrowEntry, Leaderboard, LeaderboardView};
pub use moment::MomentNft;
pub use protocol::{Action, Request};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/gridiron-labs/gridiron-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,

    // Identifier invariant: one allocator per entity class, never shared,
    // so a failed operation in one class cannot burn ids in another.
    pub(crate) series_ids: IdAllocator,
    pub(crate) set_ids: IdAllocator,
    pub(crate) play_ids: IdAllocator,
    pub(crate) edition_ids: IdAllocator,
    pub(crate) moment_ids: IdAllocator,

    pub series_by_id: IterableMap<u64, Series>,
    pub(crate) series_id_by_name: LookupMap<String, u64>,
    pub sets_by_id: IterableMap<u64, SetRecord>,
    pub(crate) set_id_by_name: LookupMap<String, u64>,
    pub plays_by_id: IterableMap<u64, Play>,
    pub editions_by_id: IterableMap<u64, Edition>,
    // Uniqueness invariant: (set, play, tier, parallel) of every open edition;
    // entries are removed on close so a closed edition frees its key.
    pub(crate) edition_id_by_key: LookupMap<String, u64>,

    pub moments_by_id: IterableMap<u64, MomentNft>,
    // Serial invariant: entries are never removed, even on burn, so a serial
    // number is issued at most once per edition.
    pub(crate) moment_id_by_serial: LookupMap<String, u64>,
    pub total_minted: u64,
    pub burned_count: u64,

    // Ownership invariant: a moment id lives in exactly one collection bucket
    // or one leaderboard at a time; moves go through withdraw + deposit.
    pub(crate) collections: LookupMap<AccountId, ShardedCollection>,

    pub badges_by_slug: IterableMap<String, Badge>,
    pub(crate) badge_entities: LookupMap<String, IterableSet<String>>,
    pub(crate) entity_badges: LookupMap<String, IterableSet<String>>,
    pub(crate) association_metadata: LookupMap<String, std::collections::HashMap<String, String>>,

    pub leaderboards: IterableMap<String, Leaderboard>,
}
