use crate::*;
use near_sdk::serde_json::{json, Value};

impl Contract {
    pub(super) fn dispatch_catalog(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, CatalogError> {
        // Catalog mutation is an administrative surface.
        self.check_contract_owner(actor_id)?;

        match action {
            Action::CreateSeries { name } => {
                let id = self.create_series(actor_id, name)?;
                Ok(json!({ "series_id": id }))
            }
            Action::CloseSeries { series_id } => {
                self.close_series(actor_id, series_id)?;
                Ok(Value::Null)
            }
            Action::CreateSet { name } => {
                let id = self.create_set(actor_id, name)?;
                Ok(json!({ "set_id": id }))
            }
            Action::CreatePlay {
                classification,
                metadata,
            } => {
                let id = self.create_play(actor_id, classification, metadata)?;
                Ok(json!({ "play_id": id }))
            }
            Action::UpdatePlayDescription {
                play_id,
                description,
            } => {
                self.update_play_description(actor_id, play_id, description)?;
                Ok(Value::Null)
            }
            Action::UpdatePlayDynamicMetadata { play_id, update } => {
                self.update_play_dynamic_metadata(actor_id, play_id, update)?;
                Ok(Value::Null)
            }
            Action::CreateEdition {
                series_id,
                set_id,
                play_id,
                tier,
                max_mint_size,
                parallel,
            } => {
                let id = self.create_edition(
                    actor_id,
                    series_id,
                    set_id,
                    play_id,
                    tier,
                    max_mint_size,
                    parallel,
                )?;
                Ok(json!({ "edition_id": id }))
            }
            Action::CloseEdition { edition_id } => {
                self.close_edition(actor_id, edition_id)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_catalog called with non-catalog action"),
        }
    }
}
