use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::BADGE;
use crate::badges::EntityRef;

pub fn emit_badge_created(actor_id: &AccountId, slug: &str) {
    EventBuilder::new(BADGE, "create", actor_id)
        .field("slug", slug)
        .emit();
}

pub fn emit_badge_updated(actor_id: &AccountId, slug: &str) {
    EventBuilder::new(BADGE, "update", actor_id)
        .field("slug", slug)
        .emit();
}

pub fn emit_badge_associated(actor_id: &AccountId, slug: &str, entity: &EntityRef) {
    EventBuilder::new(BADGE, "associate", actor_id)
        .field("slug", slug)
        .field("entity_type", entity.entity_type.as_str())
        .field("entity_id", entity.entity_id)
        .emit();
}

pub fn emit_badge_dissociated(actor_id: &AccountId, slug: &str, entity: &EntityRef) {
    EventBuilder::new(BADGE, "dissociate", actor_id)
        .field("slug", slug)
        .field("entity_type", entity.entity_type.as_str())
        .field("entity_id", entity.entity_id)
        .emit();
}

pub fn emit_badge_deleted(actor_id: &AccountId, slug: &str, cascaded_associations: u64) {
    EventBuilder::new(BADGE, "delete", actor_id)
        .field("slug", slug)
        .field("cascaded_associations", cascaded_associations)
        .emit();
}
