//! Planted-subsequence stress tests.
//!
//! Builds pairs whose LCS is known by construction: fillers in the first
//! sequence are distinct even numbers, fillers in the second are distinct
//! odd numbers, and a shared run of negative values is planted at random
//! positions in each. The only common elements are the planted ones, so
//! the solver must recover exactly that sequence.

use myers_lcs::lcs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn planted_positions(rng: &mut StdRng, total: usize, count: usize) -> Vec<usize> {
    let mut positions = BTreeSet::new();
    while positions.len() < count {
        positions.insert(rng.gen_range(0..total));
    }
    positions.into_iter().collect()
}

/// A pair of length `total` whose unique LCS is `count` planted values.
fn planted_pair(
    rng: &mut StdRng,
    total: usize,
    count: usize,
) -> (Vec<i64>, Vec<i64>, Vec<i64>) {
    assert!(count <= total);
    let planted: Vec<i64> = (0..count).map(|i| -1 - i as i64).collect();

    let mut a: Vec<i64> = (0..total).map(|i| 2 * i as i64).collect();
    let mut b: Vec<i64> = (0..total).map(|i| 2 * i as i64 + 1).collect();
    for (value, pos) in planted
        .iter()
        .zip(planted_positions(rng, total, count))
    {
        a[pos] = *value;
    }
    for (value, pos) in planted
        .iter()
        .zip(planted_positions(rng, total, count))
    {
        b[pos] = *value;
    }
    (a, b, planted)
}

#[test]
fn recovers_planted_subsequence_small() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let total = rng.gen_range(1..60);
        let count = rng.gen_range(0..=total);
        let (a, b, planted) = planted_pair(&mut rng, total, count);
        assert_eq!(lcs(&a, &b).unwrap(), planted, "total={total} count={count}");
    }
}

#[test]
fn recovers_planted_subsequence_large() {
    let mut rng = StdRng::seed_from_u64(42);
    let (a, b, planted) = planted_pair(&mut rng, 6_000, 5_000);
    assert_eq!(lcs(&a, &b).unwrap(), planted);
}

#[test]
fn sparse_plant_in_long_sequences() {
    let mut rng = StdRng::seed_from_u64(99);
    let (a, b, planted) = planted_pair(&mut rng, 4_000, 25);
    assert_eq!(lcs(&a, &b).unwrap(), planted);
}

#[cfg(feature = "heavy")]
#[test]
fn recovers_planted_subsequence_heavy() {
    let mut rng = StdRng::seed_from_u64(1234);
    let (a, b, planted) = planted_pair(&mut rng, 40_000, 30_000);
    assert_eq!(lcs(&a, &b).unwrap(), planted);
}
