use near_sdk::near;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MomentNft {
    pub id: u64,
    pub edition_id: u64,
    /// 1-based position within the edition's mint history, unless an explicit
    /// serial was supplied at mint time.
    pub serial_number: u64,
    pub minting_date: u64,
}
