use crate::*;
use std::collections::HashMap;

pub(crate) const DESCRIPTION_KEY: &str = "description";

impl Contract {
    pub(crate) fn create_play(
        &mut self,
        actor_id: &AccountId,
        classification: String,
        metadata: HashMap<String, String>,
    ) -> Result<u64, CatalogError> {
        validation::validate_name(&classification, "Play classification")?;
        validation::validate_metadata(&metadata)?;

        let id = self.play_ids.allocate("play")?;
        let play = Play {
            id,
            classification: classification.clone(),
            metadata,
            created_at: env::block_timestamp(),
        };
        self.plays_by_id.insert(id, play);

        events::emit_play_created(actor_id, id, &classification);
        Ok(id)
    }

    pub(crate) fn update_play_description(
        &mut self,
        actor_id: &AccountId,
        play_id: u64,
        description: String,
    ) -> Result<(), CatalogError> {
        let play = self
            .plays_by_id
            .get_mut(&play_id)
            .ok_or_else(|| CatalogError::play_not_found(play_id))?;
        play.metadata
            .insert(DESCRIPTION_KEY.to_string(), description);

        events::emit_play_updated(actor_id, play_id, &[DESCRIPTION_KEY]);
        Ok(())
    }

    pub(crate) fn update_play_dynamic_metadata(
        &mut self,
        actor_id: &AccountId,
        play_id: u64,
        update: PlayDynamicMetadata,
    ) -> Result<(), CatalogError> {
        let play = self
            .plays_by_id
            .get_mut(&play_id)
            .ok_or_else(|| CatalogError::play_not_found(play_id))?;

        let mut updated = Vec::new();
        for (key, value) in update.fields() {
            // Absent means "not provided": the stored value is kept, not cleared.
            if let Some(value) = value {
                play.metadata.insert(key.to_string(), value.clone());
                updated.push(key);
            }
        }

        if !updated.is_empty() {
            events::emit_play_updated(actor_id, play_id, &updated);
        }
        Ok(())
    }
}
