//! Sorted views over a set of accounts.
//!
//! Both views work on a copy of the account references and hand back
//! the names only, so the ledger's insertion order is never touched.
//! Ordering by name is a stable top-down merge sort. Ordering by balance
//! is a Lomuto quicksort (last element as pivot), which is not stable:
//! accounts with equal balances come out in an order that depends on
//! their insertion order and the partition swaps.

use std::cmp::Ordering;

use crate::core::Account;

pub fn sort_by_name(accounts: &[Account]) -> Vec<String> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    merge_sort_by(&mut sorted, &|a: &&Account, b: &&Account| a.name().cmp(b.name()));
    names(&sorted)
}

pub fn sort_by_balance(accounts: &[Account]) -> Vec<String> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    quick_sort_by_key(&mut sorted, &|account: &&Account| account.balance());
    names(&sorted)
}

fn names(accounts: &[&Account]) -> Vec<String> {
    accounts.iter().map(|account| account.name().to_owned()).collect()
}

/// Stable merge sort. The left half takes the middle element,
/// and on equal keys the left element is emitted first.
pub fn merge_sort_by<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering
{
    if items.len() < 2 {
        return;
    }
    let mid = (items.len() + 1) / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);
    merge(items, mid, compare);
}

fn merge<T, F>(items: &mut [T], mid: usize, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering
{
    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, mid);

    while i < mid && j < items.len() {
        if compare(&items[i], &items[j]) != Ordering::Greater {
            merged.push(items[i].clone());
            i += 1;
        } else {
            merged.push(items[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&items[i..mid]);
    merged.extend_from_slice(&items[j..]);

    items.clone_from_slice(&merged);
}

/// Quicksort over `key`, ascending. Recurses into the smaller partition
/// and loops on the larger one; the resulting order is the same as
/// recursing into both.
pub fn quick_sort_by_key<T, K, F>(mut items: &mut [T], key: &F)
where
    K: Ord,
    F: Fn(&T) -> K
{
    while items.len() > 1 {
        let pivot = partition(items, key);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_by_key(left, key);
            items = right;
        } else {
            quick_sort_by_key(right, key);
            items = left;
        }
    }
}

/// Lomuto partition around the last element. Elements with a key strictly
/// below the pivot are swapped to the front in scan order; returns the
/// pivot's final index.
fn partition<T, K, F>(items: &mut [T], key: &F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K
{
    let high = items.len() - 1;
    let pivot = key(&items[high]);
    let mut boundary = 0;

    for j in 0..high {
        if key(&items[j]) < pivot {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, high);
    boundary
}


#[cfg(test)]
mod tests {
    use super::{sort_by_name, sort_by_balance, merge_sort_by, quick_sort_by_key};
    use crate::core::Account;

    use proptest::prelude::*;
    use rstest::rstest;

    fn accounts(setup: &[(&str, i64)]) -> Vec<Account> {
        setup.iter().map(|(name, balance)| Account::new(name, *balance)).collect()
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[("Alice", 300)], &["Alice"])]
    #[case(&[("Charlie", 200), ("Alice", 300), ("Bob", 100)], &["Alice", "Bob", "Charlie"])]
    #[case(&[("Tammy", 200), ("Kim", 300), ("Quyen", 400)], &["Kim", "Quyen", "Tammy"])]
    #[case(&[("bob", 1), ("Bob", 1), ("alice", 1)], &["Bob", "alice", "bob"])]
    fn names_in_ordinal_order(#[case] setup: &[(&str, i64)], #[case] expected: &[&str]) {
        assert_eq!(sort_by_name(&accounts(setup)), expected);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[("Alice", 300)], &["Alice"])]
    #[case(&[("Alice", 300), ("Bob", 100), ("Charlie", 200)], &["Bob", "Charlie", "Alice"])]
    #[case(&[("Tammy", 200), ("Kim", 300), ("Quyen", 400)], &["Tammy", "Kim", "Quyen"])]
    #[case(&[("Tammy", 300), ("Kim", 200), ("Quyen", 400)], &["Kim", "Tammy", "Quyen"])]
    fn names_in_balance_order(#[case] setup: &[(&str, i64)], #[case] expected: &[&str]) {
        assert_eq!(sort_by_balance(&accounts(setup)), expected);
    }

    #[test]
    fn balance_ties_follow_partition_swaps() {
        // pivot C swaps to the front, then A and B swap back
        let tied = accounts(&[("A", 100), ("B", 100), ("C", 100)]);
        assert_eq!(sort_by_balance(&tied), vec!["C", "A", "B"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let original = accounts(&[("Tammy", 200), ("Kim", 300), ("Quyen", 400)]);
        let copy = original.clone();
        sort_by_name(&original);
        sort_by_balance(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        merge_sort_by(&mut pairs, &|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(pairs, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    proptest! {
        #[test]
        fn merge_sort_matches_std(mut values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut expected = values.clone();
            expected.sort();
            merge_sort_by(&mut values, &|a: &i32, b: &i32| a.cmp(b));
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn quick_sort_matches_std(mut values in prop::collection::vec(-50i64..50, 0..64)) {
            let mut expected = values.clone();
            expected.sort();
            quick_sort_by_key(&mut values, &|v: &i64| *v);
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn balance_view_is_non_decreasing_permutation(
            balances in prop::collection::vec(0i64..20, 0..32)
        ) {
            let ledger: Vec<Account> = balances.iter().enumerate()
                .map(|(i, b)| Account::new(&format!("acct{}", i), *b))
                .collect();
            let sorted = sort_by_balance(&ledger);

            let mut names: Vec<String> = sorted.clone();
            names.sort();
            let mut expected: Vec<String> = ledger.iter().map(|a| a.name().to_owned()).collect();
            expected.sort();
            prop_assert_eq!(names, expected);

            let ordered: Vec<i64> = sorted.iter()
                .map(|name| ledger.iter().find(|a| a.name() == name).unwrap().balance())
                .collect();
            prop_assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
