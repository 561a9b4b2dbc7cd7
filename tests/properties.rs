#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used)]

use std::collections::BTreeSet;

use chainset::{
    ChainedHashSet, GdpRecord, hash,
    primes::is_prime,
    workload::{ListOrder, arrange},
};
use proptest::{collection::vec, prelude::*};
use rand::{SeedableRng, rngs::StdRng};

fn records_strategy() -> impl Strategy<Value = Vec<GdpRecord>> {
    vec(("[a-z]{1,8}", any::<i32>()), 0..300).prop_map(|rows| {
        rows.into_iter().map(|(country, gdp)| GdpRecord::new(country, gdp)).collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn insert_is_idempotent(items in vec(any::<i32>(), 0..200), x in any::<i32>()) {
        let mut set: ChainedHashSet<i32> = items.into_iter().collect();
        set.insert(x);
        let len = set.len();

        set.insert(x);

        prop_assert!(set.contains(&x));
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn insert_then_remove_is_inverse(items in vec(any::<i32>(), 0..200), x in any::<i32>()) {
        let mut set: ChainedHashSet<i32> = items.into_iter().filter(|&i| i != x).collect();
        let len = set.len();

        set.insert(x);
        set.remove(&x);

        prop_assert!(!set.contains(&x));
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn membership_matches_btree_set(
        items in vec(any::<i64>(), 0..500),
        removals in vec(any::<i64>(), 0..100),
        lookups in vec(any::<i64>(), 0..50),
    ) {
        let mut set = ChainedHashSet::with_capacity(3);
        let mut model = BTreeSet::new();
        for &item in &items {
            set.insert(item);
            model.insert(item);
        }
        for item in removals.iter().chain(items.iter().step_by(3)) {
            set.remove(item);
            model.remove(item);
        }

        prop_assert_eq!(set.len(), model.len());
        for item in items.iter().chain(&lookups) {
            prop_assert_eq!(set.contains(item), model.contains(item));
        }
    }

    #[test]
    fn capacity_is_prime_and_above_request(request in 0..5_000_usize, inserts in 0..2_000_usize) {
        let mut set = ChainedHashSet::with_capacity(request);
        prop_assert!(is_prime(set.capacity()));
        prop_assert!(set.capacity() >= request);

        for i in 0..inserts {
            set.insert(i);
            prop_assert!(is_prime(set.capacity()));
            prop_assert!(set.len() <= set.capacity());
        }
        prop_assert!((0..inserts).all(|i| set.contains(&i)));
    }

    #[test]
    fn negative_hashes_stay_reachable(items in vec(i32::MIN..0, 1..300)) {
        let set: ChainedHashSet<i32> = items.iter().copied().collect();
        for item in &items {
            prop_assert!(set.contains(item));
        }
    }

    #[test]
    fn string_hash_is_in_range(key in ".*", table_size in 1..100_000_usize) {
        prop_assert!(hash(&key, table_size) < table_size);
        prop_assert_eq!(hash(&key, table_size), hash(&key, table_size));
    }

    #[test]
    fn order_does_not_change_membership(records in records_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sets: Vec<ChainedHashSet<GdpRecord>> = ListOrder::ALL
            .into_iter()
            .map(|order| arrange(&records, order, &mut rng).into_iter().collect())
            .collect();

        let absent = GdpRecord::new("NOT-A-COUNTRY", 0);
        for set in &sets {
            prop_assert_eq!(set.len(), sets[0].len());
            prop_assert!(!set.contains(&absent));
            for record in &records {
                prop_assert!(set.contains(record));
            }
        }
    }
}

#[test]
fn default_capacity_rehashes_on_102nd_insert() {
    let mut set = ChainedHashSet::new();
    let records: Vec<GdpRecord> =
        (0..103).map(|i| GdpRecord::new(format!("country-{i}"), i)).collect();

    for record in &records[..101] {
        set.insert(record.clone());
    }
    assert_eq!(set.capacity(), 101);

    set.insert(records[101].clone());
    assert_eq!(set.len(), 102);
    assert_eq!(set.capacity(), 211);
    assert!(records[..102].iter().all(|record| set.contains(record)));
    assert!(!set.contains(&records[102]));
}

#[test]
fn string_hash_regression_values() {
    assert_eq!(hash("abc", 101), 67);
    assert_eq!(hash("abc", 1_000_000), 136_518);
    assert_eq!(hash("", 13), 0);
}
