use rand::rngs::StdRng;
use rand::SeedableRng;

use flight_delay_sort::flight::Flight;
use flight_delay_sort::partition_sort::{partition_sort, partition_sort_range};

mod common;

#[test]
fn test_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut v: Vec<i64> = vec![];
    partition_sort(&mut v, &mut rng);
    assert!(v.is_empty());

    // the bounds a caller computes for an empty sequence
    partition_sort_range(&mut v, 0, -1, &mut rng);
    assert!(v.is_empty());
}

#[test]
fn test_single() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut v: Vec<i64> = vec![5];
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, vec![5]);
}

#[test]
fn test_three() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut v: Vec<i64> = vec![3, 1, 2];
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, vec![1, 2, 3]);
}

#[test]
fn test_reverse_sorted() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut v: Vec<i64> = (0..1000).rev().collect();
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, (0..1000).collect::<Vec<i64>>());
}

#[test]
fn test_all_duplicates() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut v: Vec<i64> = vec![5, 5, 5];
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, vec![5, 5, 5]);

    // every partition is maximally unbalanced, this must not exhaust the stack
    let mut v: Vec<i64> = vec![7; 5000];
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, vec![7; 5000]);
}

#[test]
fn test_random_flights() {
    let mut rng = StdRng::seed_from_u64(4);
    let flights = common::random_flights(10_000, 17);
    let mut sorted = flights.clone();
    partition_sort(&mut sorted, &mut rng);

    assert_eq!(sorted.len(), flights.len());
    assert!(common::is_sorted(&sorted));
    assert_eq!(common::keys(&sorted), common::key_multiset(&flights));

    let mut expected = flights.clone();
    expected.sort_by_key(|f| (f.arr_delay(), f.carrier().clone(), f.airport_name().clone()));
    let mut actual = sorted.clone();
    actual.sort_by_key(|f| (f.arr_delay(), f.carrier().clone(), f.airport_name().clone()));
    assert_eq!(actual, expected);
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut v: Vec<i64> = (-50..50).collect();
    let expected = v.clone();
    partition_sort(&mut v, &mut rng);
    assert_eq!(v, expected);
}

#[test]
fn test_negative_delays() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut flights = vec![
        Flight::new("AA", "Chicago", 12),
        Flight::new("DL", "Atlanta", -30),
        Flight::new("UA", "Denver", 0),
        Flight::new("WN", "Dallas", -1),
    ];
    partition_sort(&mut flights, &mut rng);
    assert_eq!(common::keys(&flights), vec![-30, -1, 0, 12]);
    assert_eq!(flights[0].carrier(), "DL");
}

#[test]
fn test_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut v: Vec<i64> = vec![9, 4, 3, 2, 1, 0];
    partition_sort_range(&mut v, 1, 4, &mut rng);
    assert_eq!(v, vec![9, 1, 2, 3, 4, 0]);
}

#[test]
fn test_invalid_range() {
    let mut rng = StdRng::seed_from_u64(8);
    let original: Vec<i64> = vec![3, 2, 1];
    let mut v = original.clone();

    partition_sort_range(&mut v, 2, 0, &mut rng);
    assert_eq!(v, original);
    partition_sort_range(&mut v, -1, 2, &mut rng);
    assert_eq!(v, original);
    partition_sort_range(&mut v, 0, 3, &mut rng);
    assert_eq!(v, original);
    partition_sort_range(&mut v, 1, 1, &mut rng);
    assert_eq!(v, original);
}

#[test]
fn test_seed_reproducible() {
    // not stable, but the same seed must give the same order of equal keys
    let records = common::tagged(&[2, 1, 2, 1, 2, 1, 3, 3, 0]);
    let mut first = records.clone();
    let mut second = records.clone();
    partition_sort(&mut first, &mut StdRng::seed_from_u64(99));
    partition_sort(&mut second, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
    assert!(common::is_sorted(&first));
}
