use crate::guards::serial_key;
use crate::*;
use std::collections::{HashMap, HashSet};

impl Contract {
    pub(crate) fn mint_moment(
        &mut self,
        actor_id: &AccountId,
        edition_id: u64,
        receiver_id: &AccountId,
        serial_number: Option<u64>,
    ) -> Result<u64, CatalogError> {
        let edition = self
            .editions_by_id
            .get(&edition_id)
            .ok_or_else(|| CatalogError::edition_not_found(edition_id))?;

        // A capped-out edition is reported as full, not closed; `EditionClosed`
        // is reserved for explicit administrative closure.
        if edition.is_full() {
            return Err(CatalogError::EditionFull(format!(
                "Edition {} has minted all {} moments",
                edition_id,
                edition.max_mint_size.unwrap_or_default()
            )));
        }
        if !edition.open {
            return Err(CatalogError::EditionClosed(format!(
                "Edition {} is closed for minting",
                edition_id
            )));
        }
        if !self.collections.contains_key(receiver_id) {
            return Err(CatalogError::collection_not_setup(receiver_id));
        }

        let default_serial = edition.next_serial;
        let serial = match serial_number {
            Some(serial) => {
                if self
                    .moment_id_by_serial
                    .contains_key(&serial_key(edition_id, serial))
                {
                    return Err(CatalogError::DuplicateSerial(format!(
                        "Serial {} was already issued in edition {}",
                        serial, edition_id
                    )));
                }
                serial
            }
            None => {
                // Skip serials claimed by explicit mints; the counter itself
                // only ever moves forward.
                let mut serial = default_serial;
                while self
                    .moment_id_by_serial
                    .contains_key(&serial_key(edition_id, serial))
                {
                    serial += 1;
                }
                serial
            }
        };

        let id = self.moment_ids.allocate("moment")?;
        let reached_cap = {
            let edition = self.editions_by_id.get_mut(&edition_id).unwrap();
            edition.num_minted += 1;
            if serial_number.is_none() {
                edition.next_serial = serial + 1;
            }
            edition.is_full()
        };
        if reached_cap {
            self.auto_close_edition(edition_id);
        }

        let moment = MomentNft {
            id,
            edition_id,
            serial_number: serial,
            minting_date: env::block_timestamp(),
        };
        self.moment_id_by_serial
            .insert(serial_key(edition_id, serial), id);
        self.moments_by_id.insert(id, moment);
        self.total_minted += 1;

        self.deposit_into_collection(receiver_id, id)?;

        events::emit_moment_minted(actor_id, receiver_id, id, edition_id, serial);
        Ok(id)
    }

    /// Batch mint. The whole request is validated before any state changes,
    /// including a dry run of serial assignment in apply order, so a failing
    /// entry leaves editions, supply and collections untouched.
    pub(crate) fn mint_moment_multi(
        &mut self,
        actor_id: &AccountId,
        receiver_id: &AccountId,
        edition_ids: &[u64],
        counts: &[u64],
        serial_numbers: &[Option<u64>],
    ) -> Result<Vec<u64>, CatalogError> {
        if edition_ids.is_empty() {
            return Err(CatalogError::InvalidInput(
                "Batch must contain at least one edition".into(),
            ));
        }
        if edition_ids.len() != counts.len() || edition_ids.len() != serial_numbers.len() {
            return Err(CatalogError::InvalidInput(
                "Edition, count and serial arrays must have equal length".into(),
            ));
        }
        if counts.contains(&0) {
            return Err(CatalogError::InvalidInput(
                "Each batch entry must mint at least one moment".into(),
            ));
        }
        let total_units: u64 = counts.iter().sum();
        if total_units > MAX_BATCH_MINT {
            return Err(CatalogError::InvalidInput(format!(
                "Cannot mint more than {} moments at once",
                MAX_BATCH_MINT
            )));
        }
        if !self.collections.contains_key(receiver_id) {
            return Err(CatalogError::collection_not_setup(receiver_id));
        }
        self.moment_ids.check_capacity(total_units, "moment")?;

        self.dry_run_batch(edition_ids, counts, serial_numbers)?;

        let mut minted = Vec::with_capacity(total_units as usize);
        for (index, &edition_id) in edition_ids.iter().enumerate() {
            for unit in 0..counts[index] {
                // An explicit serial applies to the first unit of its entry.
                let serial = if unit == 0 { serial_numbers[index] } else { None };
                minted.push(self.mint_moment(actor_id, edition_id, receiver_id, serial)?);
            }
        }

        events::emit_moment_batch_minted(actor_id, receiver_id, &minted);
        Ok(minted)
    }

    /// Replay the batch against current state without mutating anything:
    /// cumulative per-edition capacity, open/closed gates, and serial
    /// assignment (stored and intra-batch) exactly as the apply loop will
    /// perform it.
    fn dry_run_batch(
        &self,
        edition_ids: &[u64],
        counts: &[u64],
        serial_numbers: &[Option<u64>],
    ) -> Result<(), CatalogError> {
        let mut planned_units: HashMap<u64, u64> = HashMap::new();
        let mut next_defaults: HashMap<u64, u64> = HashMap::new();
        let mut planned_serials: HashSet<(u64, u64)> = HashSet::new();

        let serial_taken = |planned: &HashSet<(u64, u64)>, edition_id: u64, serial: u64| {
            planned.contains(&(edition_id, serial))
                || self
                    .moment_id_by_serial
                    .contains_key(&serial_key(edition_id, serial))
        };

        for (index, &edition_id) in edition_ids.iter().enumerate() {
            let edition = self
                .editions_by_id
                .get(&edition_id)
                .ok_or_else(|| CatalogError::edition_not_found(edition_id))?;

            if edition.is_full() {
                return Err(CatalogError::EditionFull(format!(
                    "Edition {} has minted all {} moments",
                    edition_id,
                    edition.max_mint_size.unwrap_or_default()
                )));
            }
            if !edition.open {
                return Err(CatalogError::EditionClosed(format!(
                    "Edition {} is closed for minting",
                    edition_id
                )));
            }
            let prior = planned_units.get(&edition_id).copied().unwrap_or(0);
            if let Some(max) = edition.max_mint_size {
                if edition.num_minted + prior + counts[index] > max {
                    return Err(CatalogError::EditionFull(format!(
                        "Batch would exceed edition {}'s max mint size of {}",
                        edition_id, max
                    )));
                }
            }
            planned_units.insert(edition_id, prior + counts[index]);
            next_defaults.entry(edition_id).or_insert(edition.next_serial);

            for unit in 0..counts[index] {
                match (unit, serial_numbers[index]) {
                    (0, Some(serial)) => {
                        if serial_taken(&planned_serials, edition_id, serial) {
                            return Err(CatalogError::DuplicateSerial(format!(
                                "Serial {} was already issued in edition {}",
                                serial, edition_id
                            )));
                        }
                        planned_serials.insert((edition_id, serial));
                    }
                    _ => {
                        let next = next_defaults.get_mut(&edition_id).unwrap();
                        let mut serial = *next;
                        while serial_taken(&planned_serials, edition_id, serial) {
                            serial += 1;
                        }
                        planned_serials.insert((edition_id, serial));
                        *next = serial + 1;
                    }
                }
            }
        }
        Ok(())
    }
}
