use crate::guards::hash_bytes;
use crate::*;
use near_sdk::store::IterableSet;
use std::collections::HashMap;

fn association_key(slug: &str, entity_key: &str) -> String {
    format!("{}{}{}", slug, DELIMITER, entity_key)
}

impl Contract {
    pub(crate) fn create_badge(
        &mut self,
        actor_id: &AccountId,
        slug: String,
        title: String,
        description: String,
        visible: bool,
        slug_v2: String,
    ) -> Result<(), CatalogError> {
        validation::validate_slug(&slug)?;
        if self.badges_by_slug.contains_key(&slug) {
            return Err(CatalogError::DuplicateSlug(format!(
                "Badge '{}' already exists",
                slug
            )));
        }

        let badge = Badge {
            slug: slug.clone(),
            title,
            description,
            visible,
            slug_v2,
            metadata: HashMap::new(),
            created_at: env::block_timestamp(),
        };
        self.badges_by_slug.insert(slug.clone(), badge);

        events::emit_badge_created(actor_id, &slug);
        Ok(())
    }

    pub(crate) fn update_badge(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        update: BadgeUpdate,
    ) -> Result<(), CatalogError> {
        if let Some(ref metadata) = update.metadata {
            validation::validate_metadata(metadata)?;
        }
        let badge = self
            .badges_by_slug
            .get_mut(slug)
            .ok_or_else(|| CatalogError::badge_not_found(slug))?;

        if let Some(title) = update.title {
            badge.title = title;
        }
        if let Some(description) = update.description {
            badge.description = description;
        }
        if let Some(visible) = update.visible {
            badge.visible = visible;
        }
        if let Some(slug_v2) = update.slug_v2 {
            badge.slug_v2 = slug_v2;
        }
        if let Some(metadata) = update.metadata {
            badge.metadata = metadata;
        }

        events::emit_badge_updated(actor_id, slug);
        Ok(())
    }

    pub(crate) fn add_badge_to_entity(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        entity: EntityRef,
        metadata: HashMap<String, String>,
    ) -> Result<(), CatalogError> {
        validation::validate_metadata(&metadata)?;
        if !self.badges_by_slug.contains_key(slug) {
            return Err(CatalogError::badge_not_found(slug));
        }
        self.check_entity_exists(&entity)?;

        let entity_key = entity.key();
        if !self.badge_entities.contains_key(slug) {
            self.badge_entities.insert(
                slug.to_string(),
                IterableSet::new(StorageKey::BadgeEntitiesInner {
                    slug_hash: hash_bytes(slug.as_bytes()),
                }),
            );
        }
        self.badge_entities
            .get_mut(slug)
            .unwrap()
            .insert(entity_key.clone());

        if !self.entity_badges.contains_key(&entity_key) {
            self.entity_badges.insert(
                entity_key.clone(),
                IterableSet::new(StorageKey::EntityBadgesInner {
                    entity_key_hash: hash_bytes(entity_key.as_bytes()),
                }),
            );
        }
        self.entity_badges
            .get_mut(&entity_key)
            .unwrap()
            .insert(slug.to_string());

        // Re-associating is an upsert of the association metadata.
        self.association_metadata
            .insert(association_key(slug, &entity_key), metadata);

        events::emit_badge_associated(actor_id, slug, &entity);
        Ok(())
    }

    pub(crate) fn remove_badge_from_entity(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        entity: EntityRef,
    ) -> Result<(), CatalogError> {
        if !self.badges_by_slug.contains_key(slug) {
            return Err(CatalogError::badge_not_found(slug));
        }
        let entity_key = entity.key();
        let removed = self
            .badge_entities
            .get_mut(slug)
            .is_some_and(|entities| entities.remove(&entity_key));
        if !removed {
            return Err(CatalogError::NotFound(format!(
                "Badge '{}' is not associated with {}",
                slug, entity_key
            )));
        }
        if let Some(slugs) = self.entity_badges.get_mut(&entity_key) {
            slugs.remove(slug);
        }
        self.association_metadata
            .remove(&association_key(slug, &entity_key));

        events::emit_badge_dissociated(actor_id, slug, &entity);
        Ok(())
    }

    /// Delete a badge and every association referencing it in one sweep; the
    /// record is only removed once no association row points at it.
    pub(crate) fn delete_badge(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
    ) -> Result<(), CatalogError> {
        if !self.badges_by_slug.contains_key(slug) {
            return Err(CatalogError::badge_not_found(slug));
        }

        let mut cascaded = 0u64;
        if let Some(mut entities) = self.badge_entities.remove(slug) {
            let entity_keys: Vec<String> = entities.iter().cloned().collect();
            for entity_key in &entity_keys {
                if let Some(slugs) = self.entity_badges.get_mut(entity_key) {
                    slugs.remove(slug);
                }
                self.association_metadata
                    .remove(&association_key(slug, entity_key));
                cascaded += 1;
            }
            entities.clear();
        }
        self.badges_by_slug.remove(slug);

        events::emit_badge_deleted(actor_id, slug, cascaded);
        Ok(())
    }

    fn check_entity_exists(&self, entity: &EntityRef) -> Result<(), CatalogError> {
        let exists = match entity.entity_type {
            EntityType::Play => self.plays_by_id.contains_key(&entity.entity_id),
            EntityType::Edition => self.editions_by_id.contains_key(&entity.entity_id),
            EntityType::Moment => self.moments_by_id.contains_key(&entity.entity_id),
        };
        if !exists {
            return Err(CatalogError::NotFound(format!(
                "{} {} not found",
                entity.entity_type.as_str(),
                entity.entity_id
            )));
        }
        Ok(())
    }
}
