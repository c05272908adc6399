use crate::*;

impl Contract {
    pub(crate) fn create_set(
        &mut self,
        actor_id: &AccountId,
        name: String,
    ) -> Result<u64, CatalogError> {
        validation::validate_name(&name, "Set")?;

        let id = self.set_ids.allocate("set")?;
        let set = SetRecord {
            id,
            name: name.clone(),
            created_at: env::block_timestamp(),
        };
        self.sets_by_id.insert(id, set);
        self.set_id_by_name.insert(name.clone(), id);

        events::emit_set_created(actor_id, id, &name);
        Ok(id)
    }
}
