use crate::tests::test_utils::*;
use crate::*;
use std::collections::HashMap;

fn badge_contract() -> Contract {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    contract.mint_moment(&admin(), 1, &collector(), None).unwrap();
    contract
}

fn create_test_badge(contract: &mut Contract, slug: &str) {
    contract
        .create_badge(
            &admin(),
            slug.into(),
            "Rookie Debut".into(),
            "First professional appearance".into(),
            true,
            format!("{}-v2", slug),
        )
        .unwrap();
}

fn play_ref(id: u64) -> EntityRef {
    EntityRef {
        entity_type: EntityType::Play,
        entity_id: id,
    }
}

fn edition_ref(id: u64) -> EntityRef {
    EntityRef {
        entity_type: EntityType::Edition,
        entity_id: id,
    }
}

fn moment_ref(id: u64) -> EntityRef {
    EntityRef {
        entity_type: EntityType::Moment,
        entity_id: id,
    }
}

// --- Registry ---

#[test]
fn create_badge_and_lookup() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    assert!(contract.badge_exists("rookie-debut".into()));
    let badge = contract.get_badge_by_slug("rookie-debut".into()).unwrap();
    assert_eq!(badge.title, "Rookie Debut");
    assert_eq!(badge.slug_v2, "rookie-debut-v2");
    assert!(badge.visible);
}

#[test]
fn duplicate_slug_fails() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    let err = contract
        .create_badge(
            &admin(),
            "rookie-debut".into(),
            "Other".into(),
            "Other".into(),
            false,
            "other".into(),
        )
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSlug(_)));
}

#[test]
fn invalid_slug_fails() {
    let mut contract = badge_contract();
    for slug in ["", "a:b"] {
        let err = contract
            .create_badge(
                &admin(),
                slug.into(),
                "t".into(),
                "d".into(),
                true,
                "v2".into(),
            )
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }
}

#[test]
fn update_badge_is_partial() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    contract
        .update_badge(
            &admin(),
            "rookie-debut",
            BadgeUpdate {
                visible: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

    let badge = contract.get_badge_by_slug("rookie-debut".into()).unwrap();
    assert!(!badge.visible);
    // Untouched fields survive.
    assert_eq!(badge.title, "Rookie Debut");
}

#[test]
fn update_badge_replaces_metadata_wholesale() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    contract
        .update_badge(
            &admin(),
            "rookie-debut",
            BadgeUpdate {
                metadata: Some([("season".to_string(), "2023".to_string())].into()),
                ..Default::default()
            },
        )
        .unwrap();
    contract
        .update_badge(
            &admin(),
            "rookie-debut",
            BadgeUpdate {
                metadata: Some(HashMap::new()),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(contract
        .get_badge_by_slug("rookie-debut".into())
        .unwrap()
        .metadata
        .is_empty());
}

#[test]
fn update_unknown_badge_fails() {
    let mut contract = badge_contract();
    let err = contract
        .update_badge(&admin(), "nope", BadgeUpdate::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

// --- Associations ---

#[test]
fn associate_and_read_back() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    contract
        .add_badge_to_entity(
            &admin(),
            "rookie-debut",
            play_ref(1),
            [("note".to_string(), "week 1".to_string())].into(),
        )
        .unwrap();

    let badges = contract.badges_for_entity(play_ref(1));
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].slug, "rookie-debut");

    let metadata = contract
        .badge_association_metadata("rookie-debut".into(), play_ref(1))
        .unwrap();
    assert_eq!(metadata["note"], "week 1");
}

#[test]
fn associate_with_unknown_entity_fails() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    let err = contract
        .add_badge_to_entity(&admin(), "rookie-debut", play_ref(42), HashMap::new())
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn associate_unknown_badge_fails() {
    let mut contract = badge_contract();
    let err = contract
        .add_badge_to_entity(&admin(), "nope", play_ref(1), HashMap::new())
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn remove_association() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");
    contract
        .add_badge_to_entity(&admin(), "rookie-debut", play_ref(1), HashMap::new())
        .unwrap();

    contract
        .remove_badge_from_entity(&admin(), "rookie-debut", play_ref(1))
        .unwrap();
    assert!(contract.badges_for_entity(play_ref(1)).is_empty());
    assert!(contract
        .badge_association_metadata("rookie-debut".into(), play_ref(1))
        .is_none());
}

#[test]
fn remove_missing_association_fails() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    let err = contract
        .remove_badge_from_entity(&admin(), "rookie-debut", play_ref(1))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

// --- Inherited lookup ---

#[test]
fn moment_badges_union_over_moment_edition_play() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "on-the-play");
    create_test_badge(&mut contract, "on-the-edition");
    create_test_badge(&mut contract, "on-the-moment");

    // Moment 1 came from edition 1, which uses play 1.
    contract
        .add_badge_to_entity(&admin(), "on-the-play", play_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "on-the-edition", edition_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "on-the-moment", moment_ref(1), HashMap::new())
        .unwrap();

    let slugs: Vec<String> = contract
        .moment_all_badges(collector(), 1)
        .into_iter()
        .map(|badge| badge.slug)
        .collect();
    assert_eq!(slugs.len(), 3);
    assert!(slugs.contains(&"on-the-play".to_string()));
    assert!(slugs.contains(&"on-the-edition".to_string()));
    assert!(slugs.contains(&"on-the-moment".to_string()));
}

#[test]
fn moment_badges_deduplicate_by_slug() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "everywhere");

    contract
        .add_badge_to_entity(&admin(), "everywhere", play_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "everywhere", moment_ref(1), HashMap::new())
        .unwrap();

    assert_eq!(contract.moment_all_badges(collector(), 1).len(), 1);
}

#[test]
fn moment_badges_empty_for_unheld_moment() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "everywhere");
    contract
        .add_badge_to_entity(&admin(), "everywhere", moment_ref(1), HashMap::new())
        .unwrap();

    assert!(contract.moment_all_badges(recipient(), 1).is_empty());
}

// --- Cascade delete ---

#[test]
fn delete_badge_cascades_all_associations() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "rookie-debut");

    contract
        .add_badge_to_entity(&admin(), "rookie-debut", play_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "rookie-debut", edition_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "rookie-debut", moment_ref(1), HashMap::new())
        .unwrap();

    contract.delete_badge(&admin(), "rookie-debut").unwrap();

    assert!(!contract.badge_exists("rookie-debut".into()));
    assert!(contract.badges_for_entity(play_ref(1)).is_empty());
    assert!(contract.badges_for_entity(edition_ref(1)).is_empty());
    assert!(contract.badges_for_entity(moment_ref(1)).is_empty());
    assert!(contract.moment_all_badges(collector(), 1).is_empty());
}

#[test]
fn delete_unknown_badge_fails() {
    let mut contract = badge_contract();
    let err = contract.delete_badge(&admin(), "nope").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn deleting_one_badge_leaves_others_on_the_entity() {
    let mut contract = badge_contract();
    create_test_badge(&mut contract, "first");
    create_test_badge(&mut contract, "second");
    contract
        .add_badge_to_entity(&admin(), "first", play_ref(1), HashMap::new())
        .unwrap();
    contract
        .add_badge_to_entity(&admin(), "second", play_ref(1), HashMap::new())
        .unwrap();

    contract.delete_badge(&admin(), "first").unwrap();

    let badges = contract.badges_for_entity(play_ref(1));
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].slug, "second");
}
