use crate::tests::test_utils::*;
use crate::*;

// The bucket count is an implementation knob: every observable (length, held
// ids, serial numbers, transfer behavior) must be identical across choices.
// Each bucket count runs in its own test (unit tests share one storage per
// thread), all asserting the same expected observables.
fn assert_scenario_observables(bucket_count: u32) {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), bucket_count);

    for _ in 0..12 {
        contract.mint_moment(&admin(), 2, &collector(), None).unwrap();
    }

    assert_eq!(contract.collection_length(collector()), 12);
    assert_eq!(
        contract.collection_moment_ids(collector()),
        (1..=12).collect::<Vec<u64>>()
    );
    let serials: Vec<u64> = contract
        .collection_moment_ids(collector())
        .iter()
        .map(|id| contract.moment_properties(collector(), *id).unwrap().serial_number)
        .collect();
    assert_eq!(serials, (1..=12).collect::<Vec<u64>>());

    // Same transfer flow regardless of how either side is sharded.
    contract.setup_collection_for(&recipient(), Some(4)).unwrap();
    for id in 1..=5 {
        contract
            .transfer_moment_internal(&collector(), &recipient(), id)
            .unwrap();
    }
    contract
        .batch_transfer_moments_internal(&collector(), &recipient(), &[6, 7, 8])
        .unwrap();

    assert_eq!(contract.collection_length(collector()), 4);
    assert_eq!(contract.collection_length(recipient()), 8);
    assert_eq!(
        contract.collection_moment_ids(recipient()),
        (1..=8).collect::<Vec<u64>>()
    );
    assert_eq!(contract.collection_moment_ids(collector()), vec![9, 10, 11, 12]);
}

#[test]
fn single_bucket_store_observables() {
    assert_scenario_observables(1);
}

#[test]
fn ten_bucket_store_observables() {
    assert_scenario_observables(10);
}

#[test]
fn seventy_five_bucket_store_observables() {
    assert_scenario_observables(75);
}

// Ids spread across buckets by `id % bucket_count`; a count larger than the
// number of held moments leaves most buckets empty without changing totals.
#[test]
fn sparse_buckets_still_sum_correctly() {
    let mut contract = new_contract();
    seed_with_collection(&mut contract, &collector(), 75);

    for _ in 0..3 {
        contract.mint_moment(&admin(), 2, &collector(), None).unwrap();
    }
    assert_eq!(contract.collection_length(collector()), 3);
    assert_eq!(contract.collection_moment_ids(collector()), vec![1, 2, 3]);
}
