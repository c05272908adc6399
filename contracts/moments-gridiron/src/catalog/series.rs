use crate::*;

impl Contract {
    pub(crate) fn create_series(
        &mut self,
        actor_id: &AccountId,
        name: String,
    ) -> Result<u64, CatalogError> {
        validation::validate_name(&name, "Series")?;

        let id = self.series_ids.allocate("series")?;
        let series = Series {
            id,
            name: name.clone(),
            active: true,
            created_at: env::block_timestamp(),
        };
        self.series_by_id.insert(id, series);
        // Last-write-wins: names are not unique, the index serves lookups only.
        self.series_id_by_name.insert(name.clone(), id);

        events::emit_series_created(actor_id, id, &name);
        Ok(id)
    }

    pub(crate) fn close_series(
        &mut self,
        actor_id: &AccountId,
        series_id: u64,
    ) -> Result<(), CatalogError> {
        let series = self
            .series_by_id
            .get_mut(&series_id)
            .ok_or_else(|| CatalogError::series_not_found(series_id))?;
        if !series.active {
            return Err(CatalogError::AlreadyClosed(format!(
                "Series {} is already closed",
                series_id
            )));
        }
        series.active = false;

        events::emit_series_closed(actor_id, series_id);
        Ok(())
    }
}
