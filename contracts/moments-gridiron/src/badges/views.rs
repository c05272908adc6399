use crate::*;
use std::collections::HashMap;

#[near]
impl Contract {
    pub fn get_badge_by_slug(&self, slug: String) -> Option<Badge> {
        self.badges_by_slug.get(&slug).cloned()
    }

    pub fn badge_exists(&self, slug: String) -> bool {
        self.badges_by_slug.contains_key(&slug)
    }

    pub fn badges_for_entity(&self, entity: EntityRef) -> Vec<Badge> {
        let Some(slugs) = self.entity_badges.get(&entity.key()) else {
            return vec![];
        };
        slugs
            .iter()
            .filter_map(|slug| self.badges_by_slug.get(slug).cloned())
            .collect()
    }

    pub fn badge_association_metadata(
        &self,
        slug: String,
        entity: EntityRef,
    ) -> Option<HashMap<String, String>> {
        self.association_metadata
            .get(&format!("{}{}{}", slug, DELIMITER, entity.key()))
            .cloned()
    }

    /// Effective badge set of a held moment: the union of badges on the
    /// moment itself, its edition and its play, deduplicated by slug.
    pub fn moment_all_badges(&self, account_id: AccountId, moment_id: u64) -> Vec<Badge> {
        let Some(moment) = self.moment_properties(account_id, moment_id) else {
            return vec![];
        };

        let mut refs = vec![EntityRef {
            entity_type: EntityType::Moment,
            entity_id: moment_id,
        }];
        refs.push(EntityRef {
            entity_type: EntityType::Edition,
            entity_id: moment.edition_id,
        });
        if let Some(edition) = self.editions_by_id.get(&moment.edition_id) {
            refs.push(EntityRef {
                entity_type: EntityType::Play,
                entity_id: edition.play_id,
            });
        }

        let mut seen = Vec::new();
        let mut badges = Vec::new();
        for entity in refs {
            for badge in self.badges_for_entity(entity) {
                if !seen.contains(&badge.slug) {
                    seen.push(badge.slug.clone());
                    badges.push(badge);
                }
            }
        }
        badges
    }
}
