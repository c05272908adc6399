use crate::guards::edition_key;
use crate::*;

impl Contract {
    pub(crate) fn create_edition(
        &mut self,
        actor_id: &AccountId,
        series_id: u64,
        set_id: u64,
        play_id: u64,
        tier: String,
        max_mint_size: Option<u64>,
        parallel: Option<String>,
    ) -> Result<u64, CatalogError> {
        validation::validate_tier(&tier)?;
        if let Some(ref parallel) = parallel {
            validation::validate_parallel(parallel)?;
        }
        if max_mint_size == Some(0) {
            return Err(CatalogError::InvalidInput(
                "Max mint size must be at least 1 when set".into(),
            ));
        }

        let series = self
            .series_by_id
            .get(&series_id)
            .ok_or_else(|| CatalogError::series_not_found(series_id))?;
        if !series.active {
            return Err(CatalogError::SeriesClosed(format!(
                "Series {} no longer accepts editions",
                series_id
            )));
        }
        if !self.sets_by_id.contains_key(&set_id) {
            return Err(CatalogError::set_not_found(set_id));
        }
        if !self.plays_by_id.contains_key(&play_id) {
            return Err(CatalogError::play_not_found(play_id));
        }

        let key = edition_key(set_id, play_id, &tier, parallel.as_deref());
        if self.edition_id_by_key.contains_key(&key) {
            return Err(CatalogError::DuplicateEditionKey(format!(
                "An open edition for set {} / play {} / tier {} already exists",
                set_id, play_id, tier
            )));
        }

        // All gates passed; only now is an id consumed.
        let id = self.edition_ids.allocate("edition")?;
        let edition = Edition {
            id,
            series_id,
            set_id,
            play_id,
            tier: tier.clone(),
            parallel,
            max_mint_size,
            num_minted: 0,
            next_serial: 1,
            open: true,
            created_at: env::block_timestamp(),
        };
        self.editions_by_id.insert(id, edition);
        self.edition_id_by_key.insert(key, id);

        events::emit_edition_created(actor_id, id, series_id, set_id, play_id, &tier, max_mint_size);
        Ok(id)
    }

    pub(crate) fn close_edition(
        &mut self,
        actor_id: &AccountId,
        edition_id: u64,
    ) -> Result<(), CatalogError> {
        let edition = self
            .editions_by_id
            .get_mut(&edition_id)
            .ok_or_else(|| CatalogError::edition_not_found(edition_id))?;
        if !edition.open {
            return Err(CatalogError::AlreadyClosed(format!(
                "Edition {} is already closed",
                edition_id
            )));
        }
        edition.open = false;
        let key = edition_key(
            edition.set_id,
            edition.play_id,
            &edition.tier,
            edition.parallel.as_deref(),
        );
        self.edition_id_by_key.remove(&key);

        events::emit_edition_closed(actor_id, edition_id);
        Ok(())
    }

    /// Close triggered by the mint that reaches `max_mint_size`. Distinct from
    /// administrative closure only in the event it emits; both stop minting.
    pub(crate) fn auto_close_edition(&mut self, edition_id: u64) {
        let Some(edition) = self.editions_by_id.get_mut(&edition_id) else {
            return;
        };
        if !edition.open {
            return;
        }
        edition.open = false;
        let key = edition_key(
            edition.set_id,
            edition.play_id,
            &edition.tier,
            edition.parallel.as_deref(),
        );
        self.edition_id_by_key.remove(&key);

        events::emit_edition_capped(edition_id);
    }
}
