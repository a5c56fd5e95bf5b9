use kxsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = StdRng::seed_from_u64(42);
    let mut input: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    sort(&mut input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_1m_hinted() {
    let count = 1_000_000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut input: Vec<u32> = (0..count).map(|_| rng.random_range(0..65_536)).collect();
    let mut expected = input.clone();
    expected.sort_unstable();

    // Two of four bytes are processed.
    let start = Instant::now();
    sort_with(&mut input, Unsigned, 65_535u64);
    println!("Sorted 1M hinted elements in {:?}", start.elapsed());

    assert_eq!(input, expected);
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: needs ~800MB for the input alone.
    let count = 100_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    input.kx_sort();
    println!("Sorted 100M elements in {:?}", start.elapsed());

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
