use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_badges(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, CatalogError> {
        // The badge overlay is an administrative surface.
        self.check_contract_owner(actor_id)?;

        match action {
            Action::CreateBadge {
                slug,
                title,
                description,
                visible,
                slug_v2,
            } => {
                self.create_badge(actor_id, slug, title, description, visible, slug_v2)?;
                Ok(Value::Null)
            }
            Action::UpdateBadge { slug, update } => {
                self.update_badge(actor_id, &slug, update)?;
                Ok(Value::Null)
            }
            Action::AddBadgeToEntity {
                slug,
                entity,
                metadata,
            } => {
                self.add_badge_to_entity(actor_id, &slug, entity, metadata)?;
                Ok(Value::Null)
            }
            Action::RemoveBadgeFromEntity { slug, entity } => {
                self.remove_badge_from_entity(actor_id, &slug, entity)?;
                Ok(Value::Null)
            }
            Action::DeleteBadge { slug } => {
                self.delete_badge(actor_id, &slug)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_badges called with non-badge action"),
        }
    }
}
