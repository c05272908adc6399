use crate::guards::{check_one_yocto, hash_bytes};
use crate::*;
use near_sdk::store::IterableMap;

#[near]
impl Contract {
    /// Escrow one of the caller's moments into a leaderboard. The withdrawal
    /// from the collection and the leaderboard insert are one atomic step; the
    /// moment is never in both, and never in neither.
    #[payable]
    #[handle_result]
    pub fn escrow_moment(
        &mut self,
        leaderboard_name: String,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        self.escrow_moment_internal(&owner_id, &leaderboard_name, moment_id)
    }
}

impl Contract {
    pub(crate) fn create_leaderboard(
        &mut self,
        actor_id: &AccountId,
        name: String,
    ) -> Result<(), CatalogError> {
        validation::validate_name(&name, "Leaderboard")?;
        if self.leaderboards.contains_key(&name) {
            return Err(CatalogError::AlreadyInitialized(format!(
                "Leaderboard '{}' already exists",
                name
            )));
        }

        let leaderboard = Leaderboard {
            name: name.clone(),
            created_at: env::block_timestamp(),
            entries: IterableMap::new(StorageKey::LeaderboardEntries {
                name_hash: hash_bytes(name.as_bytes()),
            }),
        };
        self.leaderboards.insert(name.clone(), leaderboard);

        events::emit_leaderboard_created(actor_id, &name);
        Ok(())
    }

    pub(crate) fn escrow_moment_internal(
        &mut self,
        owner_id: &AccountId,
        leaderboard_name: &str,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        if !self.leaderboards.contains_key(leaderboard_name) {
            return Err(CatalogError::leaderboard_not_found(leaderboard_name));
        }
        self.withdraw_from_collection(owner_id, moment_id)?;

        let entry = EscrowEntry {
            owner_id: owner_id.clone(),
            escrowed_at: env::block_timestamp(),
        };
        self.leaderboards
            .get_mut(leaderboard_name)
            .unwrap()
            .entries
            .insert(moment_id, entry);

        events::emit_moment_escrowed(owner_id, leaderboard_name, moment_id);
        Ok(())
    }

    /// Return an escrowed moment to the owner recorded at escrow time.
    pub(crate) fn withdraw_leaderboard_entry(
        &mut self,
        actor_id: &AccountId,
        leaderboard_name: &str,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        let leaderboard = self
            .leaderboards
            .get(leaderboard_name)
            .ok_or_else(|| CatalogError::leaderboard_not_found(leaderboard_name))?;
        let owner_id = leaderboard
            .entries
            .get(&moment_id)
            .map(|entry| entry.owner_id.clone())
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Moment {} is not held by leaderboard '{}'",
                    moment_id, leaderboard_name
                ))
            })?;
        // The owner's collection outlives the escrow, but the deposit is
        // verified before the entry is removed so a failure changes nothing.
        if !self.collections.contains_key(&owner_id) {
            return Err(CatalogError::collection_not_setup(&owner_id));
        }

        self.leaderboards
            .get_mut(leaderboard_name)
            .unwrap()
            .entries
            .remove(&moment_id);
        self.deposit_into_collection(&owner_id, moment_id)?;

        events::emit_moment_unescrowed(actor_id, leaderboard_name, moment_id, &owner_id);
        Ok(())
    }

    /// Destroy an escrowed moment. No return path; the moment record is
    /// removed, but its serial stays claimed and total supply stays monotonic.
    pub(crate) fn burn_leaderboard_entry(
        &mut self,
        actor_id: &AccountId,
        leaderboard_name: &str,
        moment_id: u64,
    ) -> Result<(), CatalogError> {
        let leaderboard = self
            .leaderboards
            .get_mut(leaderboard_name)
            .ok_or_else(|| CatalogError::leaderboard_not_found(leaderboard_name))?;
        if leaderboard.entries.remove(&moment_id).is_none() {
            return Err(CatalogError::NotFound(format!(
                "Moment {} is not held by leaderboard '{}'",
                moment_id, leaderboard_name
            )));
        }

        self.moments_by_id.remove(&moment_id);
        self.burned_count += 1;

        events::emit_moment_burned(actor_id, leaderboard_name, moment_id);
        Ok(())
    }
}
