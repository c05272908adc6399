use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn contract_with_moments(count: u64) -> Contract {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 10);
    for _ in 0..count {
        contract.mint_moment(&admin(), 2, &collector(), None).unwrap();
    }
    contract
}

// --- Single transfer ---

#[test]
fn transfer_moves_ownership() {
    let mut contract = contract_with_moments(2);
    contract.setup_collection_for(&recipient(), Some(10)).unwrap();

    contract
        .transfer_moment_internal(&collector(), &recipient(), 1)
        .unwrap();

    assert!(!contract.collection_contains(collector(), 1));
    assert!(contract.collection_contains(recipient(), 1));
    assert_eq!(contract.collection_length(collector()), 1);
    assert_eq!(contract.collection_length(recipient()), 1);

    // Properties resolve through the new holder only.
    assert!(contract.moment_properties(recipient(), 1).is_some());
    assert!(contract.moment_properties(collector(), 1).is_none());
}

#[test]
fn transfer_of_unowned_moment_fails() {
    let mut contract = contract_with_moments(1);
    contract.setup_collection_for(&recipient(), Some(10)).unwrap();

    let err = contract
        .transfer_moment_internal(&collector(), &recipient(), 99)
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert_eq!(contract.collection_length(collector()), 1);
}

#[test]
fn transfer_to_account_without_collection_fails() {
    let mut contract = contract_with_moments(1);

    let err = contract
        .transfer_moment_internal(&collector(), &recipient(), 1)
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    // The moment never left the sender.
    assert!(contract.collection_contains(collector(), 1));
}

// --- Batch transfer ---

#[test]
fn batch_transfer_moves_every_listed_moment() {
    let mut contract = contract_with_moments(5);
    contract.setup_collection_for(&recipient(), Some(3)).unwrap();

    contract
        .batch_transfer_moments_internal(&collector(), &recipient(), &[2, 3, 5])
        .unwrap();

    assert_eq!(contract.collection_moment_ids(collector()), vec![1, 4]);
    assert_eq!(contract.collection_moment_ids(recipient()), vec![2, 3, 5]);
}

#[test]
fn batch_transfer_aborts_on_a_single_missing_id() {
    let mut contract = contract_with_moments(3);
    contract.setup_collection_for(&recipient(), Some(3)).unwrap();

    let err = contract
        .batch_transfer_moments_internal(&collector(), &recipient(), &[1, 2, 99])
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    // No partial movement.
    assert_eq!(contract.collection_length(collector()), 3);
    assert_eq!(contract.collection_length(recipient()), 0);
}

#[test]
fn batch_transfer_rejects_empty_and_oversized_batches() {
    let mut contract = contract_with_moments(1);
    contract.setup_collection_for(&recipient(), Some(3)).unwrap();

    let err = contract
        .batch_transfer_moments_internal(&collector(), &recipient(), &[])
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    let too_many: Vec<u64> = (1..=MAX_BATCH_TRANSFER as u64 + 1).collect();
    let err = contract
        .batch_transfer_moments_internal(&collector(), &recipient(), &too_many)
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));
}

// --- Public entry points ---

#[test]
fn public_transfer_requires_one_yocto() {
    let mut contract = contract_with_moments(1);
    contract.setup_collection_for(&recipient(), Some(3)).unwrap();

    testing_env!(context(collector()).build());
    let err = contract.transfer_moment(recipient(), 1).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    testing_env!(context_with_deposit(collector(), 1).build());
    contract.transfer_moment(recipient(), 1).unwrap();
    assert!(contract.collection_contains(recipient(), 1));
}

#[test]
fn public_batch_transfer_uses_caller_as_sender() {
    let mut contract = contract_with_moments(2);
    contract.setup_collection_for(&recipient(), Some(3)).unwrap();

    testing_env!(context_with_deposit(collector(), 1).build());
    contract.batch_transfer_moments(recipient(), vec![1, 2]).unwrap();
    assert_eq!(contract.collection_length(recipient()), 2);
}
