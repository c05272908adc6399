use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    /// Single mutation entry point. The caller identity comes pre-validated
    /// from the runtime; the dispatcher applies per-action authorization.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, request: Request) -> Result<Value, CatalogError> {
        let Request { action } = request;
        let actor_id = env::predecessor_account_id();

        if action.requires_confirmation() {
            guards::check_at_least_one_yocto()?;
        }

        self.dispatch_action(action, &actor_id)
    }
}
