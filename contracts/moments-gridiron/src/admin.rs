use crate::*;
use near_sdk::store::{IterableMap, LookupMap};

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            series_ids: IdAllocator::new(),
            set_ids: IdAllocator::new(),
            play_ids: IdAllocator::new(),
            edition_ids: IdAllocator::new(),
            moment_ids: IdAllocator::new(),
            series_by_id: IterableMap::new(StorageKey::SeriesById),
            series_id_by_name: LookupMap::new(StorageKey::SeriesIdByName),
            sets_by_id: IterableMap::new(StorageKey::SetsById),
            set_id_by_name: LookupMap::new(StorageKey::SetIdByName),
            plays_by_id: IterableMap::new(StorageKey::PlaysById),
            editions_by_id: IterableMap::new(StorageKey::EditionsById),
            edition_id_by_key: LookupMap::new(StorageKey::EditionIdByKey),
            moments_by_id: IterableMap::new(StorageKey::MomentsById),
            moment_id_by_serial: LookupMap::new(StorageKey::MomentIdBySerial),
            total_minted: 0,
            burned_count: 0,
            collections: LookupMap::new(StorageKey::Collections),
            badges_by_slug: IterableMap::new(StorageKey::BadgesBySlug),
            badge_entities: LookupMap::new(StorageKey::BadgeEntities),
            entity_badges: LookupMap::new(StorageKey::EntityBadges),
            association_metadata: LookupMap::new(StorageKey::AssociationMetadata),
            leaderboards: IterableMap::new(StorageKey::Leaderboards),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), CatalogError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(CatalogError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
