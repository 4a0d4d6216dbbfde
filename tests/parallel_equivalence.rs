#![cfg(feature = "parallel")]

use myers_lcs::{lcs, lcs_length, lcs_with, SlicePair};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Classic O(nm) table as the reference for lengths.
fn dp_lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &x in a {
        for (j, &y) in b.iter().enumerate() {
            cur[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

proptest! {
    #[test]
    fn joined_flanks_match_full_table(a in "[ACGT]{0,64}", b in "[ACGT]{0,64}") {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        prop_assert_eq!(lcs_length(a, b).unwrap(), dp_lcs_len(a, b));
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(17);
    let a: Vec<u8> = (0..2_000).map(|_| rng.gen_range(b'A'..=b'D')).collect();
    let b: Vec<u8> = (0..2_000).map(|_| rng.gen_range(b'A'..=b'D')).collect();

    let first = lcs_with(&SlicePair::new(&a, &b)).unwrap();
    for _ in 0..4 {
        let again = lcs_with(&SlicePair::new(&a, &b)).unwrap();
        assert_eq!(again.total_len(), first.total_len());
        let lhs: Vec<_> = first.iter().collect();
        let rhs: Vec<_> = again.iter().collect();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn large_random_pair_matches_reference() {
    let mut rng = StdRng::seed_from_u64(3);
    let a: Vec<u8> = (0..1_500).map(|_| rng.gen_range(b'A'..=b'B')).collect();
    let b: Vec<u8> = (0..1_500).map(|_| rng.gen_range(b'A'..=b'B')).collect();
    assert_eq!(lcs(&a, &b).unwrap().len(), dp_lcs_len(&a, &b));
}
