//! Behavioural scenarios for key generation and list maintenance.
//!
//! Each test builds a list the way a caller would (rows read from storage,
//! assumed sorted), runs one operation, and checks the ordering guarantees
//! the caller relies on before persisting.

use num_bigint::BigInt;

use lexorank::{
    between, AppendStrategy, Config, Direction, Key, RankError, RankedItem, Reorderable,
    ReorderableList,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn key(text: &str) -> Key {
    Key::parse(text).unwrap()
}

fn rows(keys: &[&str]) -> Vec<RankedItem<u64>> {
    keys.iter()
        .enumerate()
        .map(|(i, text)| RankedItem::new(i as u64, key(text)))
        .collect()
}

fn within_ceiling(keys: &[Key], config: &Config) -> bool {
    keys.iter().all(|k| k.rank_len() >= 1 && k.rank_len() <= config.max_rank_length)
}

const SEQUENTIAL: [&str; 6] = [
    "1|aaaaaa", "1|aaaaab", "1|aaaaac", "1|aaaaad", "1|aaaaae", "1|aaaaaf",
];

// ============================================================================
// KEY PROPERTIES
// ============================================================================

#[test]
fn parse_display_roundtrip() {
    let config = Config::production();
    let samples = [
        key("0|0"),
        key("2|zzzzzz"),
        Key::top_of(1, &config).unwrap(),
        Key::bottom_of(0, &config).unwrap(),
        Key::middle_of(2, &config).unwrap(),
        between(&key("0|a"), &key("0|b"), &config).unwrap(),
    ];

    for k in samples {
        assert_eq!(Key::parse(&k.to_string()).unwrap(), k);
    }
}

/// Narrowing the left bound of "0|a".."0|b" at length 128 succeeds 889
/// times and fails on the 890th call.
#[test]
fn between_narrowing_hits_ceiling() {
    let config = Config::production();
    let mut lhs = key("0|a");
    let rhs = key("0|b");

    const CALLS: usize = 890;
    for call in 1..=CALLS {
        let result = between(&lhs, &rhs, &config);
        if call == CALLS {
            assert_eq!(result, Err(RankError::RebalanceRequired));
        } else {
            let mid = result.unwrap_or_else(|e| panic!("call {call} failed: {e}"));
            assert!(lhs < mid && mid < rhs, "mid should be between lhs and rhs");
            assert!(mid.rank_len() <= config.max_rank_length);
            lhs = mid;
        }
    }
}

#[test]
fn between_bottom_and_top_hits_ceiling() {
    let config = Config::production();
    let mut lhs = Key::bottom_of(0, &config).unwrap();
    let rhs = Key::top_of(0, &config).unwrap();

    let mut successes = 0;
    loop {
        match between(&lhs, &rhs, &config) {
            Ok(mid) => {
                assert!(lhs < mid && mid < rhs);
                lhs = mid;
                successes += 1;
            }
            Err(err) => {
                assert_eq!(err, RankError::RebalanceRequired);
                break;
            }
        }
    }
    assert_eq!(successes, 798);
}

#[test]
fn between_narrowing_right_bound() {
    let config = Config::default();
    let lhs = key("0|a");
    let mut rhs = key("0|b");

    let mut successes = 0;
    while let Ok(mid) = between(&lhs, &rhs, &config) {
        assert!(lhs < mid && mid < rhs);
        rhs = mid;
        successes += 1;
    }
    assert_eq!(successes, 30);
}

// ============================================================================
// LIST SCENARIOS
// ============================================================================

/// Six sequential keys; insert at 3 lands strictly between 2 and 3.
#[test]
fn insert_into_sequential_keys() {
    for config in [Config::default(), Config::production()] {
        let mut data = rows(&SEQUENTIAL);
        let mut list = ReorderableList::new(&mut data);

        let new_key = list.insert(3, &config).unwrap();
        let keys = list.keys();

        assert!(keys[2] < new_key, "placed after index 2");
        assert!(new_key < keys[3], "placed before index 3");
        assert!(list.is_sorted());
        assert!(within_ceiling(&keys, &config));
        assert!(new_key.rank_len() <= config.max_rank_length);
    }
}

/// Seven maximum-length keys normalize to seven distinct increasing keys.
#[test]
fn normalize_identical_max_keys() {
    let config = Config::production();
    let max = format!("1|{}", "z".repeat(config.max_rank_length));
    let mut data = rows(&vec![max.as_str(); 7]);
    let mut list = ReorderableList::new(&mut data);

    list.normalize(&config).unwrap();

    let keys = list.keys();
    assert!(list.is_sorted());
    assert!(within_ceiling(&keys, &config));
    assert!(keys.iter().all(|k| k.bucket() == 1));
}

#[test]
fn normalize_reversed_input() {
    let config = Config::default();
    let mut data = rows(&["0|f", "0|e", "0|d", "0|c", "0|b", "0|a"]);
    let mut list = ReorderableList::new(&mut data);

    list.normalize(&config).unwrap();
    assert!(list.is_sorted());

    // Entries keep their slots; only keys change
    let ids: Vec<u64> = data.iter().map(|row| row.value).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

/// A duplicate pair at the insertion boundary is repaired by rebalancing.
#[test]
fn insert_at_duplicate_boundary() {
    let config = Config::production();
    let dupes = [
        "1|aaa", "1|aab", "1|aac", "1|aac", "1|aad", "1|aae", "1|aaf",
    ];

    for position in [3, 4] {
        let mut data = rows(&dupes);
        let mut list = ReorderableList::new(&mut data);

        match list.insert(position, &config) {
            Ok(new_key) => {
                let keys = list.keys();
                assert!(keys[position - 1] < new_key);
                assert!(new_key < keys[position]);
                assert!(new_key.rank_len() <= config.max_rank_length);
            }
            Err(err) => assert_eq!(err, RankError::KeyInsertionFailedAfterRebalance),
        }
    }
}

/// With one digit of precision there is no room left even after normalizing
#[test]
fn insert_fails_when_normalized_list_is_full() {
    let config = Config::default().with_max_rank_length(1);
    let mut data = rows(&vec!["1|a"; 72]);
    let mut list = ReorderableList::new(&mut data);

    assert_eq!(
        list.insert(1, &config),
        Err(RankError::KeyInsertionFailedAfterRebalance)
    );

    // The rebalance still ran: keys are distinct and within the ceiling
    let keys = list.keys();
    assert!(list.is_sorted());
    assert!(within_ceiling(&keys, &config));
    assert_eq!(keys[0].as_str(), "1|2");
    assert_eq!(keys[71].as_str(), "1|y");
}

#[test]
fn insert_between_unsorted_neighbours() {
    let config = Config::production();
    let mut data = rows(&["1|aac", "1|aab", "1|aad", "1|aae", "1|aaf"]);
    let mut list = ReorderableList::new(&mut data);

    let new_key = list.insert(2, &config).unwrap();
    let keys = list.keys();
    assert!(keys[1] < new_key && new_key < keys[2]);
}

#[test]
fn insert_between_reversed_neighbours_rebalances() {
    let config = Config::default();
    let mut data = rows(&["1|aac", "1|aab", "1|aad"]);
    let mut list = ReorderableList::new(&mut data);

    // Neighbours 0 and 1 are reversed: no room until the list is repaired
    let new_key = list.insert(1, &config).unwrap();
    let keys = list.keys();
    assert!(list.is_sorted());
    assert!(keys[0] < new_key && new_key < keys[1]);
}

#[test]
fn rebalance_from_sorts_anomalies() {
    let config = Config::production();
    let max = format!("1|{}", "z".repeat(config.max_rank_length));
    let inputs: Vec<Vec<String>> = vec![
        SEQUENTIAL.iter().map(|s| s.to_string()).collect(),
        ["1|aaaaaa", "1|aaaaab", "1|aaaaac", "1|aaaaac", "1|aaaaad", "1|aaaaae", "1|aaaaae"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec![max; 7],
        ["1|c", "1|b", "1|a"].iter().map(|s| s.to_string()).collect(),
    ];

    for input in inputs {
        for (position, direction) in [(0, Direction::Forward), (input.len() - 1, Direction::Backward)] {
            let texts: Vec<&str> = input.iter().map(String::as_str).collect();
            let mut data = rows(&texts);
            let mut list = ReorderableList::new(&mut data);

            list.rebalance_from(position, direction, &config).unwrap();

            let keys = list.keys();
            assert!(list.is_sorted(), "unsorted after rebalance of {texts:?}");
            assert!(within_ceiling(&keys, &config));
            assert!(keys.iter().all(|k| k.bucket() == 1));
        }
    }
}

#[test]
fn step_append_uses_exact_distance() {
    let config = Config::production();
    let mut data = rows(&SEQUENTIAL);
    let mut list = ReorderableList::new(&mut data);
    let last = list.keys()[5].clone();

    let new_key = list.append(&config).unwrap();

    assert!(new_key > last);
    assert_eq!(last.distance(&new_key).unwrap(), BigInt::from(config.step_size));
    // Room was available: nothing was rewritten
    assert_eq!(list.keys()[5], last);
}

#[test]
fn append_after_max_key_keeps_list_sorted() {
    for strategy in [AppendStrategy::Default, AppendStrategy::Step] {
        let config = Config::default().with_append_strategy(strategy);
        let mut data = rows(&[
            "1|aaaaaa", "1|aaaaab", "1|aaaaac", "1|aaaaad", "1|aaaaae", "1|zzzzzz",
        ]);
        let mut list = ReorderableList::new(&mut data);

        let new_key = list.append(&config).unwrap();
        let keys = list.keys();

        assert!(list.is_sorted());
        assert!(within_ceiling(&keys, &config));
        assert!(keys[5] < new_key, "{strategy:?}: new key must follow the last entry");
    }
}

#[test]
fn prepend_before_min_key_keeps_list_sorted() {
    for strategy in [AppendStrategy::Default, AppendStrategy::Step] {
        let config = Config::default().with_append_strategy(strategy);
        let mut data = rows(&["1|000000", "1|000001", "1|aaaaaa"]);
        let mut list = ReorderableList::new(&mut data);

        let new_key = list.prepend(&config).unwrap();
        let keys = list.keys();

        assert!(list.is_sorted());
        assert!(within_ceiling(&keys, &config));
        assert!(new_key < keys[0], "{strategy:?}: new key must precede the first entry");
    }
}

#[test]
fn list_over_mutable_handles() {
    let config = Config::default();
    let mut a = RankedItem::new("a", key("0|a"));
    let mut b = RankedItem::new("b", key("0|a"));

    let mut handles = vec![&mut a, &mut b];
    let new_key = ReorderableList::new(&mut handles).insert(1, &config).unwrap();

    // The duplicate pair forced a rewrite through the handles
    assert!(a.key() < &new_key && &new_key < b.key());
}

#[test]
fn bucket_outside_range_fails_loudly() {
    let config = Config::default();
    let mut data = rows(&["5|a"]);
    let mut list = ReorderableList::new(&mut data);

    assert_eq!(
        list.append(&config),
        Err(RankError::BucketOutOfRange { bucket: 5, max: 2 })
    );
    assert!(list.append(&config.with_max_bucket(5)).is_ok());
}
