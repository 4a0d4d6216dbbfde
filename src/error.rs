//! Error types for the LCS core.

/// Errors surfaced by the linear-space Myers solver.
///
/// The algorithm has no I/O and no external resources, so none of these are
/// recoverable runtime conditions: every variant reports a broken internal
/// invariant. They are returned as typed errors rather than panics so that
/// callers always receive either a valid result or a clear defect report,
/// never a partial answer. Retrying cannot help a deterministic algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LcsError {
    /// The bidirectional search exhausted `d <= ceil((n+m)/2)` without the
    /// forward and reverse frontiers meeting. For well-formed inputs this is
    /// provably impossible.
    #[error("middle snake not found in {n}x{m} subproblem at ({a0}, {b0})")]
    MiddleSnakeNotFound {
        a0: usize,
        b0: usize,
        n: usize,
        m: usize,
    },

    /// A middle-snake boundary escaped its subproblem rectangle, or a snake
    /// coordinate came out negative.
    #[error("malformed boundary ({detail}) in subproblem at ({a0}, {b0})")]
    MalformedBoundary {
        a0: usize,
        b0: usize,
        detail: &'static str,
    },

    /// The divide-and-conquer recursion exceeded its depth ceiling. The
    /// ceiling is sized so that any correct run stays well under it.
    #[error("solver recursion exceeded depth limit {limit}")]
    DepthExceeded { limit: usize },
}

/// Convenience alias for solver results.
pub type LcsResult<T> = Result<T, LcsError>;
