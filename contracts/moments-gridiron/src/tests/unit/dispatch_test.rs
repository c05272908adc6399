use crate::tests::test_utils::*;
use crate::*;
use near_sdk::serde_json::{json, Value};
use near_sdk::testing_env;

// --- Routing ---

#[test]
fn execute_routes_catalog_actions() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    let result = contract
        .execute(make_request(Action::CreateSeries {
            name: "Series One".into(),
        }))
        .unwrap();
    assert_eq!(result, json!({ "series_id": 1 }));
    assert!(contract.get_series(1).unwrap().active);

    let result = contract
        .execute(make_request(Action::CloseSeries { series_id: 1 }))
        .unwrap();
    assert_eq!(result, Value::Null);
    assert!(!contract.get_series(1).unwrap().active);
}

#[test]
fn execute_routes_mint_actions() {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    testing_env!(context(admin()).build());

    let result = contract
        .execute(make_request(Action::MintMoment {
            edition_id: 2,
            receiver_id: collector(),
            serial_number: None,
        }))
        .unwrap();
    assert_eq!(result, json!({ "moment_id": 1 }));

    let result = contract
        .execute(make_request(Action::MintMomentMulti {
            receiver_id: collector(),
            edition_ids: vec![2, 2],
            counts: vec![1, 1],
            serial_numbers: vec![None, None],
        }))
        .unwrap();
    assert_eq!(result, json!({ "moment_ids": [2, 3] }));
}

#[test]
fn execute_routes_badge_and_escrow_actions() {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    contract.mint_moment(&admin(), 2, &collector(), None).unwrap();
    testing_env!(context(admin()).build());

    contract
        .execute(make_request(Action::CreateBadge {
            slug: "rookie-debut".into(),
            title: "Rookie Debut".into(),
            description: "First professional appearance".into(),
            visible: true,
            slug_v2: "rookie-debut-v2".into(),
        }))
        .unwrap();
    assert!(contract.badge_exists("rookie-debut".into()));

    contract
        .execute(make_request(Action::CreateLeaderboard {
            name: "weekly".into(),
        }))
        .unwrap();
    assert!(contract.get_leaderboard("weekly".into()).is_some());
}

// --- Authorization ---

#[test]
fn non_owner_cannot_run_admin_actions() {
    let mut contract = new_contract();
    testing_env!(context(collector()).build());

    let err = contract
        .execute(make_request(Action::CreateSeries {
            name: "Series One".into(),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Unauthorized(_)));

    let err = contract
        .execute(make_request(Action::CreateBadge {
            slug: "x".into(),
            title: "x".into(),
            description: "x".into(),
            visible: true,
            slug_v2: "x".into(),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Unauthorized(_)));
}

#[test]
fn non_owner_cannot_mint() {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    testing_env!(context(collector()).build());

    let err = contract
        .execute(make_request(Action::MintMoment {
            edition_id: 2,
            receiver_id: collector(),
            serial_number: None,
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Unauthorized(_)));
}

#[test]
fn user_actions_run_as_the_caller() {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    contract.mint_moment(&admin(), 2, &collector(), None).unwrap();
    contract.setup_collection_for(&recipient(), Some(4)).unwrap();

    // Transfers need the confirmation deposit through execute() too.
    testing_env!(context(collector()).build());
    let err = contract
        .execute(make_request(Action::TransferMoment {
            receiver_id: recipient(),
            moment_id: 1,
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    testing_env!(context_with_deposit(collector(), 1).build());
    contract
        .execute(make_request(Action::TransferMoment {
            receiver_id: recipient(),
            moment_id: 1,
        }))
        .unwrap();
    assert!(contract.collection_contains(recipient(), 1));
}

#[test]
fn setup_collection_via_execute() {
    let mut contract = new_contract();
    testing_env!(context(collector()).build());

    contract
        .execute(make_request(Action::SetupCollection { bucket_count: None }))
        .unwrap();
    assert!(contract.collection_is_setup(collector()));
}

// --- Ownership ---

#[test]
fn transfer_ownership_moves_the_admin_gate() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(admin(), 1).build());
    contract.transfer_ownership(collector()).unwrap();
    assert_eq!(contract.get_owner(), &collector());

    testing_env!(context(admin()).build());
    let err = contract
        .execute(make_request(Action::CreateSeries {
            name: "Series One".into(),
        }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Unauthorized(_)));

    testing_env!(context(collector()).build());
    contract
        .execute(make_request(Action::CreateSeries {
            name: "Series One".into(),
        }))
        .unwrap();
}
