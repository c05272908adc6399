use near_sdk::near;
use std::collections::HashMap;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Series {
    pub id: u64,
    pub name: String,
    // State transition invariant: `active` flips true -> false exactly once.
    pub active: bool,
    pub created_at: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SetRecord {
    pub id: u64,
    pub name: String,
    pub created_at: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Play {
    pub id: u64,
    pub classification: String,
    // The description and the dynamic fields live inside this map under
    // well-known keys; everything else in it is immutable after creation.
    pub metadata: HashMap<String, String>,
    pub created_at: u64,
}

/// Partial update of a play's mutable fields. `None` leaves the stored value
/// untouched; there is no way to clear a field through this type.
#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct PlayDynamicMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub player_first_name: Option<String>,
    #[serde(default)]
    pub player_last_name: Option<String>,
    #[serde(default)]
    pub player_number: Option<String>,
    #[serde(default)]
    pub player_position: Option<String>,
}

impl PlayDynamicMetadata {
    pub(crate) fn fields(&self) -> [(&'static str, Option<&String>); 5] {
        [
            ("teamName", self.team_name.as_ref()),
            ("playerFirstName", self.player_first_name.as_ref()),
            ("playerLastName", self.player_last_name.as_ref()),
            ("playerNumber", self.player_number.as_ref()),
            ("playerPosition", self.player_position.as_ref()),
        ]
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Edition {
    pub id: u64,
    pub series_id: u64,
    pub set_id: u64,
    pub play_id: u64,
    pub tier: String,
    #[serde(default)]
    pub parallel: Option<String>,
    pub max_mint_size: Option<u64>,
    // Supply invariant: `num_minted` only increases; `open` flips true ->
    // false once, either administratively or when the cap is reached.
    pub num_minted: u64,
    // Serial counter for default mints only; explicit serials do not move it.
    pub next_serial: u64,
    pub open: bool,
    pub created_at: u64,
}

impl Edition {
    pub fn is_full(&self) -> bool {
        self.max_mint_size
            .is_some_and(|max| self.num_minted >= max)
    }
}
