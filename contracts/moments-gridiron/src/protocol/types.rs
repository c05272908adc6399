use near_sdk::near;
use near_sdk::AccountId;
use std::collections::HashMap;

use crate::badges::{BadgeUpdate, EntityRef};
use crate::catalog::PlayDynamicMetadata;

/// Every mutating operation of the contract, as a statically typed request.
/// This replaces the original system's file-path-driven script registry with
/// an explicit vocabulary: there is nothing to resolve at runtime.
#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    CreateSeries {
        name: String,
    },
    CloseSeries {
        series_id: u64,
    },
    CreateSet {
        name: String,
    },
    CreatePlay {
        classification: String,
        #[serde(default)]
        metadata: HashMap<String, String>,
    },
    UpdatePlayDescription {
        play_id: u64,
        description: String,
    },
    UpdatePlayDynamicMetadata {
        play_id: u64,
        #[serde(flatten)]
        update: PlayDynamicMetadata,
    },
    CreateEdition {
        series_id: u64,
        set_id: u64,
        play_id: u64,
        tier: String,
        #[serde(default)]
        max_mint_size: Option<u64>,
        #[serde(default)]
        parallel: Option<String>,
    },
    CloseEdition {
        edition_id: u64,
    },

    MintMoment {
        edition_id: u64,
        receiver_id: AccountId,
        #[serde(default)]
        serial_number: Option<u64>,
    },
    MintMomentMulti {
        receiver_id: AccountId,
        edition_ids: Vec<u64>,
        counts: Vec<u64>,
        serial_numbers: Vec<Option<u64>>,
    },

    SetupCollection {
        #[serde(default)]
        bucket_count: Option<u32>,
    },
    TransferMoment {
        receiver_id: AccountId,
        moment_id: u64,
    },
    BatchTransferMoments {
        receiver_id: AccountId,
        moment_ids: Vec<u64>,
    },

    CreateBadge {
        slug: String,
        title: String,
        description: String,
        visible: bool,
        slug_v2: String,
    },
    UpdateBadge {
        slug: String,
        #[serde(flatten)]
        update: BadgeUpdate,
    },
    AddBadgeToEntity {
        slug: String,
        entity: EntityRef,
        #[serde(default)]
        metadata: HashMap<String, String>,
    },
    RemoveBadgeFromEntity {
        slug: String,
        entity: EntityRef,
    },
    DeleteBadge {
        slug: String,
    },

    CreateLeaderboard {
        name: String,
    },
    EscrowMoment {
        leaderboard_name: String,
        moment_id: u64,
    },
    WithdrawLeaderboardEntry {
        leaderboard_name: String,
        moment_id: u64,
    },
    BurnLeaderboardEntry {
        leaderboard_name: String,
        moment_id: u64,
    },
}

impl Action {
    /// User-signed moves of owned assets require a 1 yoctoNEAR confirmation
    /// deposit to force the full-access-key signature path. Admin actions are
    /// gated on the contract owner instead.
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            Self::TransferMoment { .. }
                | Self::BatchTransferMoments { .. }
                | Self::EscrowMoment { .. }
        )
    }
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct Request {
    pub action: Action,
}
