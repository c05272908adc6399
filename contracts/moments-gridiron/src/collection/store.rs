use crate::*;

#[near]
impl Contract {
    /// Allocate the caller's sharded collection. One per account, ever; the
    /// bucket count is fixed at setup time.
    #[handle_result]
    pub fn setup_collection(&mut self, bucket_count: Option<u32>) -> Result<(), CatalogError> {
        let account_id = env::predecessor_account_id();
        self.setup_collection_for(&account_id, bucket_count)
    }

    pub fn collection_is_setup(&self, account_id: AccountId) -> bool {
        self.collections.contains_key(&account_id)
    }
}

impl Contract {
    pub(crate) fn setup_collection_for(
        &mut self,
        account_id: &AccountId,
        bucket_count: Option<u32>,
    ) -> Result<(), CatalogError> {
        let bucket_count = bucket_count.unwrap_or(DEFAULT_BUCKET_COUNT);
        validation::validate_bucket_count(bucket_count)?;
        if self.collections.contains_key(account_id) {
            return Err(CatalogError::AlreadyInitialized(format!(
                "{} already has a moment collection",
                account_id
            )));
        }

        self.collections
            .insert(account_id.clone(), ShardedCollection::new(account_id, bucket_count));

        events::emit_collection_setup(account_id, bucket_count);
        Ok(())
    }

    pub(crate) fn deposit_into_collection(
        &mut self,
        account_id: &AccountId,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        let collection = self
            .collections
            .get_mut(account_id)
            .ok_or_else(|| CatalogError::collection_not_setup(account_id))?;
        collection.insert(moment_id);
        Ok(())
    }

    /// The only legal way to take a moment out of a collection. Transfer and
    /// escrow both compose this with a deposit in the same operation.
    pub(crate) fn withdraw_from_collection(
        &mut self,
        account_id: &AccountId,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        let collection = self
            .collections
            .get_mut(account_id)
            .ok_or_else(|| CatalogError::collection_not_setup(account_id))?;
        if !collection.remove(moment_id) {
            return Err(CatalogError::moment_not_in_collection(moment_id, account_id));
        }
        Ok(())
    }
}
