use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_escrow(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, CatalogError> {
        match action {
            Action::CreateLeaderboard { name } => {
                self.check_contract_owner(actor_id)?;
                self.create_leaderboard(actor_id, name)?;
                Ok(Value::Null)
            }
            // Escrowing is the one leaderboard action signed by the moment's
            // owner rather than the contract owner.
            Action::EscrowMoment {
                leaderboard_name,
                moment_id,
            } => {
                self.escrow_moment_internal(actor_id, &leaderboard_name, moment_id)?;
                Ok(Value::Null)
            }
            Action::WithdrawLeaderboardEntry {
                leaderboard_name,
                moment_id,
            } => {
                self.check_contract_owner(actor_id)?;
                self.withdraw_leaderboard_entry(actor_id, &leaderboard_name, moment_id)?;
                Ok(Value::Null)
            }
            Action::BurnLeaderboardEntry {
                leaderboard_name,
                moment_id,
            } => {
                self.check_contract_owner(actor_id)?;
                self.burn_leaderboard_entry(actor_id, &leaderboard_name, moment_id)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_escrow called with non-escrow action"),
        }
    }
}
