use near_sdk::NearToken;

/// Recognized edition tiers, in ascending rarity order.
pub const TIERS: [&str; 5] = ["COMMON", "UNCOMMON", "RARE", "LEGENDARY", "ULTIMATE"];

pub const FIRST_ENTITY_ID: u64 = 1;

pub const MAX_NAME_LEN: usize = 256;
pub const MAX_SLUG_LEN: usize = 64;
pub const MAX_METADATA_ENTRIES: usize = 64;

pub const MAX_BATCH_MINT: u64 = 50;
pub const MAX_BATCH_TRANSFER: usize = 50;

pub const DEFAULT_BUCKET_COUNT: u32 = 32;
pub const MAX_BUCKET_COUNT: u32 = 256;

// Storage key invariant: delimiter cannot appear in slugs, tiers or parallels,
// preventing composite-key collisions.
pub const DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
