use crate::guards::serial_key;
use crate::*;

#[near]
impl Contract {
    /// Total moments ever minted. Monotonic; burning does not decrease it.
    pub fn moment_total_supply(&self) -> u64 {
        self.total_minted
    }

    pub fn moment_burned_count(&self) -> u64 {
        self.burned_count
    }

    pub fn get_moment(&self, moment_id: u64) -> Option<MomentNft> {
        self.moments_by_id.get(&moment_id).cloned()
    }

    /// The moment's properties, provided it currently sits in `account_id`'s
    /// collection. Wallet clients resolve holdings through this read path.
    pub fn moment_properties(&self, account_id: AccountId, moment_id: u64) -> Option<MomentNft> {
        let collection = self.collections.get(&account_id)?;
        if !collection.contains(moment_id) {
            return None;
        }
        self.moments_by_id.get(&moment_id).cloned()
    }

    pub fn moment_id_for_serial(&self, edition_id: u64, serial_number: u64) -> Option<u64> {
        self.moment_id_by_serial
            .get(&serial_key(edition_id, serial_number))
            .copied()
    }
}
