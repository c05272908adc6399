use crate::*;
use near_sdk::serde_json::{json, Value};

impl Contract {
    pub(super) fn dispatch_moment(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, CatalogError> {
        match action {
            Action::MintMoment {
                edition_id,
                receiver_id,
                serial_number,
            } => {
                self.check_contract_owner(actor_id)?;
                let id = self.mint_moment(actor_id, edition_id, &receiver_id, serial_number)?;
                Ok(json!({ "moment_id": id }))
            }
            Action::MintMomentMulti {
                receiver_id,
                edition_ids,
                counts,
                serial_numbers,
            } => {
                self.check_contract_owner(actor_id)?;
                let ids = self.mint_moment_multi(
                    actor_id,
                    &receiver_id,
                    &edition_ids,
                    &counts,
                    &serial_numbers,
                )?;
                Ok(json!({ "moment_ids": ids }))
            }
            Action::SetupCollection { bucket_count } => {
                self.setup_collection_for(actor_id, bucket_count)?;
                Ok(Value::Null)
            }
            Action::TransferMoment {
                receiver_id,
                moment_id,
            } => {
                self.transfer_moment_internal(actor_id, &receiver_id, moment_id)?;
                Ok(Value::Null)
            }
            Action::BatchTransferMoments {
                receiver_id,
                moment_ids,
            } => {
                self.batch_transfer_moments_internal(actor_id, &receiver_id, &moment_ids)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_moment called with non-moment action"),
        }
    }
}
