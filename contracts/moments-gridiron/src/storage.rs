use near_sdk::near;
use near_sdk::BorshStorageKey;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    SeriesById,
    SeriesIdByName,
    SetsById,
    SetIdByName,
    PlaysById,
    EditionsById,
    EditionIdByKey,
    MomentsById,
    MomentIdBySerial,
    Collections,
    CollectionBucket { account_id_hash: Vec<u8>, index: u32 },
    BadgesBySlug,
    BadgeEntities,
    BadgeEntitiesInner { slug_hash: Vec<u8> },
    EntityBadges,
    EntityBadgesInner { entity_key_hash: Vec<u8> },
    AssociationMetadata,
    Leaderboards,
    LeaderboardEntries { name_hash: Vec<u8> },
}
