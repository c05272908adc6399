use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn transfer_moment(
        &mut self,
        receiver_id: AccountId,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.transfer_moment_internal(&sender_id, &receiver_id, moment_id)
    }

    #[payable]
    #[handle_result]
    pub fn batch_transfer_moments(
        &mut self,
        receiver_id: AccountId,
        moment_ids: Vec<u64>,
    ) -> Result<(), CatalogError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.batch_transfer_moments_internal(&sender_id, &receiver_id, &moment_ids)
    }
}

impl Contract {
    pub(crate) fn transfer_moment_internal(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        // Receiver store checked first so a failed withdraw cannot strand the
        // moment outside both collections.
        if !self.collections.contains_key(receiver_id) {
            return Err(CatalogError::collection_not_setup(receiver_id));
        }
        self.withdraw_from_collection(sender_id, moment_id)?;
        self.deposit_into_collection(receiver_id, moment_id)?;

        events::emit_moment_transferred(sender_id, receiver_id, &[moment_id]);
        Ok(())
    }

    /// Batch transfer. Every id is checked against the sender's collection
    /// before any moves happen; one missing id aborts the whole batch.
    pub(crate) fn batch_transfer_moments_internal(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        moment_ids: &[u64],
    ) -> Result<(), CatalogError> {
        if moment_ids.is_empty() || moment_ids.len() > MAX_BATCH_TRANSFER {
            return Err(CatalogError::InvalidInput(format!(
                "Batch size must be 1-{}",
                MAX_BATCH_TRANSFER
            )));
        }
        if !self.collections.contains_key(receiver_id) {
            return Err(CatalogError::collection_not_setup(receiver_id));
        }
        let sender = self
            .collections
            .get(sender_id)
            .ok_or_else(|| CatalogError::collection_not_setup(sender_id))?;
        for &moment_id in moment_ids {
            if !sender.contains(moment_id) {
                return Err(CatalogError::moment_not_in_collection(moment_id, sender_id));
            }
        }

        for &moment_id in moment_ids {
            self.withdraw_from_collection(sender_id, moment_id)?;
            self.deposit_into_collection(receiver_id, moment_id)?;
        }

        events::emit_moment_transferred(sender_id, receiver_id, moment_ids);
        Ok(())
    }
}
