mod badges;
mod catalog;
mod escrow;
mod moment;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, CatalogError> {
        match &action {
            Action::CreateSeries { .. }
            | Action::CloseSeries { .. }
            | Action::CreateSet { .. }
            | Action::CreatePlay { .. }
            | Action::UpdatePlayDescription { .. }
            | Action::UpdatePlayDynamicMetadata { .. }
            | Action::CreateEdition { .. }
            | Action::CloseEdition { .. } => self.dispatch_catalog(action, actor_id),

            Action::MintMoment { .. }
            | Action::MintMomentMulti { .. }
            | Action::SetupCollection { .. }
            | Action::TransferMoment { .. }
            | Action::BatchTransferMoments { .. } => self.dispatch_moment(action, actor_id),

            Action::CreateBadge { .. }
            | Action::UpdateBadge { .. }
            | Action::AddBadgeToEntity { .. }
            | Action::RemoveBadgeFromEntity { .. }
            | Action::DeleteBadge { .. } => self.dispatch_badges(action, actor_id),

            Action::CreateLeaderboard { .. }
            | Action::EscrowMoment { .. }
            | Action::WithdrawLeaderboardEntry { .. }
            | Action::BurnLeaderboardEntry { .. } => self.dispatch_escrow(action, actor_id),
        }
    }
}
