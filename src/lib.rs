//! Linear-space longest common subsequence
//!
//! This crate computes the LCS of two abstract sequences with Myers'
//! bidirectional O(ND) search, recursing on the *middle snake* so that
//! working memory stays O(n + m) no matter how long the inputs are.
//!
//! ## Core idea
//! 1. Expand a forward frontier from (0, 0) and a reverse frontier from
//!    (n, m), one edit layer at a time.
//! 2. Stop at the first layer where the frontiers overlap; the diagonal run
//!    at the overlap is the middle snake of an optimal edit script.
//! 3. Recurse on the rectangles before and after the snake, concatenating
//!    the matches of both halves around it.
//!
//! Compared to the classic quadratic table, only two frontier vectors of
//! O(n + m) integers are ever live, while the answer is still exact.
//!
//! ## Quick start
//! ```
//! use myers_lcs::lcs;
//!
//! let common = lcs(&b"HUMAN"[..], &b"CHIMPANZEE"[..]).unwrap();
//! assert_eq!(common, b"HMAN");
//! ```
//!
//! Inputs are accessed only through the [`LcsInput`] trait, so sequences
//! never need to be contiguous or even materialised; [`SlicePair`] covers
//! the common slice case and [`PredicatePair`] swaps `==` for an arbitrary
//! equivalence. The full match structure, with positions in both inputs,
//! is available through [`lcs_with`] as a [`MatchChain`].
//!
//! The `parallel` feature recurses on the two flanking rectangles via
//! `rayon::join`; results are identical to the serial build.

pub mod chain;
pub mod error;
pub mod input;
pub mod vector;

mod kernel;
mod middle;
mod solver;

pub use crate::chain::{Match, MatchChain, Matches};
pub use crate::error::{LcsError, LcsResult};
pub use crate::input::{LcsInput, PredicatePair, SlicePair};

/// Longest common subsequence of two slices, as owned elements of `a`.
///
/// Order follows `a`; equal-length answers may differ between inputs that
/// admit several optimal subsequences, but the length never does.
#[cfg(not(feature = "parallel"))]
pub fn lcs<T: PartialEq + Clone>(a: &[T], b: &[T]) -> LcsResult<Vec<T>> {
    let chain = solver::solve(&SlicePair::new(a, b))?;
    Ok(chain.extract(a))
}

/// Longest common subsequence of two slices, as owned elements of `a`.
///
/// Order follows `a`; equal-length answers may differ between inputs that
/// admit several optimal subsequences, but the length never does.
#[cfg(feature = "parallel")]
pub fn lcs<T: PartialEq + Clone + Sync>(a: &[T], b: &[T]) -> LcsResult<Vec<T>> {
    let chain = solver::solve(&SlicePair::new(a, b))?;
    Ok(chain.extract(a))
}

/// Length of the longest common subsequence, without extracting elements.
#[cfg(not(feature = "parallel"))]
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> LcsResult<usize> {
    let chain = solver::solve(&SlicePair::new(a, b))?;
    Ok(chain.total_len())
}

/// Length of the longest common subsequence, without extracting elements.
#[cfg(feature = "parallel")]
pub fn lcs_length<T: PartialEq + Sync>(a: &[T], b: &[T]) -> LcsResult<usize> {
    let chain = solver::solve(&SlicePair::new(a, b))?;
    Ok(chain.total_len())
}

/// Longest common subsequence of an arbitrary [`LcsInput`], as the chain of
/// matched runs with positions in both sequences.
#[cfg(not(feature = "parallel"))]
pub fn lcs_with<I: LcsInput>(input: &I) -> LcsResult<MatchChain> {
    solver::solve(input)
}

/// Longest common subsequence of an arbitrary [`LcsInput`], as the chain of
/// matched runs with positions in both sequences.
#[cfg(feature = "parallel")]
pub fn lcs_with<I: LcsInput + Sync>(input: &I) -> LcsResult<MatchChain> {
    solver::solve(input)
}
