// crates/domain/tests/visit_order.rs
use proptest::prelude::*;
use range_fold_domain::{RangeFold, fold};
use range_fold_shared_kernel::IntRange;

fn visits(start: i64, end: i64) -> Vec<i64> {
    fold(
        |i, mut acc: Vec<i64>| {
            acc.push(i);
            acc
        },
        Vec::new(),
        start,
        end,
    )
}

proptest! {
    #[test]
    fn empty_range_is_identity(a in -10_000i64..10_000, seed in any::<i32>()) {
        let out = fold(|_i: i64, acc: i32| acc.wrapping_add(1), seed, a, a);
        prop_assert_eq!(out, seed);
    }

    #[test]
    fn ascending_visits_each_index_once(a in -500i64..500, len in 0i64..500) {
        let b = a + len;
        let expected: Vec<i64> = (a..b).collect();
        prop_assert_eq!(visits(a, b), expected);
    }

    #[test]
    fn descending_visits_each_index_once(b in -500i64..500, len in 1i64..500) {
        let a = b + len;
        let expected: Vec<i64> = ((b + 1)..=a).rev().collect();
        prop_assert_eq!(visits(a, b), expected);
    }

    #[test]
    fn call_count_matches_step_count(a in -1_000i32..1_000, b in -1_000i32..1_000) {
        let calls = fold(|_i, n: u128| n + 1, 0, a, b);
        prop_assert_eq!(calls, IntRange::new(a, b).step_count().value());
        prop_assert_eq!(calls, u128::from(a.abs_diff(b)));
    }

    #[test]
    fn reversed_range_visits_same_indices_backwards(a in -300i64..300, b in -300i64..300) {
        let range = IntRange::new(a, b);
        let forward: Vec<i64> = range.indices().collect();
        let mut backward: Vec<i64> = range.reversed().unwrap().indices().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}

#[test]
fn end_is_never_visited() {
    assert!(!visits(0, 5).contains(&5));
    assert!(!visits(5, 0).contains(&0));
}

#[test]
fn direction_changes_result_for_order_sensitive_combine() {
    let up = fold(|i: i64, acc| acc * 10 + i, 0, 1, 4);
    let down = fold(|i: i64, acc| acc * 10 + i, 0, 4, 1);
    assert_eq!(up, 123);
    assert_eq!(down, 432);
}
