use crate::*;

pub(crate) fn hash_bytes(input: &[u8]) -> Vec<u8> {
    env::sha256(input)
}

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    hash_bytes(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), CatalogError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(CatalogError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_at_least_one_yocto() -> Result<(), CatalogError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(CatalogError::InvalidInput(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Composite uniqueness key of an open edition. The tier vocabulary and the
/// parallel validation both exclude the delimiter, so the key is unambiguous.
pub(crate) fn edition_key(set_id: u64, play_id: u64, tier: &str, parallel: Option<&str>) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}",
        set_id,
        play_id,
        tier,
        parallel.unwrap_or(""),
        d = DELIMITER
    )
}

pub(crate) fn serial_key(edition_id: u64, serial_number: u64) -> String {
    format!("{}{}{}", edition_id, DELIMITER, serial_number)
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), CatalogError> {
        if actor_id != &self.owner_id {
            return Err(CatalogError::only_owner());
        }
        Ok(())
    }
}
