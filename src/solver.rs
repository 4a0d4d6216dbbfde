//! Divide-and-conquer solver.
//!
//! Each call trims the common prefix and suffix of its subrange, resolves
//! degenerate sizes directly, and otherwise splits at the middle snake and
//! recurses on the two flanking rectangles. Subranges are passed as offsets
//! (`a0`, `n`, `b0`, `m`) so no subsequence is ever copied.
//!
//! With the `parallel` feature the two flanks run under `rayon::join`; the
//! serial build is the reference semantics. Results are concatenated in
//! left-to-right order regardless of which flank finishes first, and every
//! middle-snake search allocates its own frontier vectors, so the branches
//! share no mutable state.

use crate::chain::{Match, MatchChain};
use crate::error::LcsError;
use crate::input::LcsInput;

pub(crate) use imp::solve;

/// Length of the maximal common run at the front of both subranges.
fn common_prefix<I: LcsInput>(input: &I, a0: usize, b0: usize, min: usize) -> usize {
    let mut p = 0;
    while p < min && input.equal_at(a0 + p, b0 + p) {
        p += 1;
    }
    p
}

/// Length of the maximal common run at the back, after `prefix` elements
/// have already been claimed at the front.
fn common_suffix<I: LcsInput>(
    input: &I,
    a_end: usize,
    b_end: usize,
    remaining: usize,
) -> usize {
    let mut s = 0;
    while s < remaining && input.equal_at(a_end - s - 1, b_end - s - 1) {
        s += 1;
    }
    s
}

/// `n == 1`: scan the second subrange for the one element of the first.
fn single_in_second<I: LcsInput>(input: &I, x: usize, b0: usize, m: usize) -> MatchChain {
    for y in b0..b0 + m {
        if input.equal_at(x, y) {
            return MatchChain::run(Match::new(x, y, 1));
        }
    }
    MatchChain::empty()
}

/// `m == 1`: scan the first subrange for the one element of the second.
fn single_in_first<I: LcsInput>(input: &I, a0: usize, n: usize, y: usize) -> MatchChain {
    for x in a0..a0 + n {
        if input.equal_at(x, y) {
            return MatchChain::run(Match::new(x, y, 1));
        }
    }
    MatchChain::empty()
}

fn flank_len(
    hi: usize,
    lo: usize,
    detail: &'static str,
    a0: usize,
    b0: usize,
) -> Result<usize, LcsError> {
    hi.checked_sub(lo)
        .ok_or(LcsError::MalformedBoundary { a0, b0, detail })
}

#[cfg(not(feature = "parallel"))]
mod imp {
    use super::*;
    use crate::middle::find_middle_snake;

    /// Solve the full problem, serially.
    pub(crate) fn solve<I: LcsInput>(input: &I) -> Result<MatchChain, LcsError> {
        let n = input.first_len();
        let m = input.second_len();
        let limit = n + m + 1;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("lcs_solve", n, m).entered();
        solve_range(input, 0, n, 0, m, 0, limit)
    }

    fn solve_range<I: LcsInput>(
        input: &I,
        a0: usize,
        n: usize,
        b0: usize,
        m: usize,
        depth: usize,
        limit: usize,
    ) -> Result<MatchChain, LcsError> {
        if depth > limit {
            return Err(LcsError::DepthExceeded { limit });
        }

        let min = n.min(m);
        let p = common_prefix(input, a0, b0, min);
        let s = common_suffix(input, a0 + n, b0 + m, min - p);
        let prefix = MatchChain::run(Match::new(a0, b0, p));
        let suffix = MatchChain::run(Match::new(a0 + n - s, b0 + m - s, s));

        let (a0, n) = (a0 + p, n - p - s);
        let (b0, m) = (b0 + p, m - p - s);

        let middle = if n == 0 || m == 0 {
            MatchChain::empty()
        } else if n == 1 {
            single_in_second(input, a0, b0, m)
        } else if m == 1 {
            single_in_first(input, a0, n, b0)
        } else {
            let snake = find_middle_snake(input, a0, n, b0, m)?;
            let ep = snake.endpoint;
            let from_start = ep.x_start == a0 && ep.y_start == b0;
            let to_end = ep.x_end >= a0 + n && ep.y_end >= b0 + m;

            let before = if from_start {
                MatchChain::empty()
            } else {
                let bn = flank_len(ep.x_start, a0, "before width", a0, b0)?;
                let bm = flank_len(ep.y_start, b0, "before height", a0, b0)?;
                solve_range(input, a0, bn, b0, bm, depth + 1, limit)?
            };
            let after = if to_end {
                MatchChain::empty()
            } else {
                let an = flank_len(a0 + n, ep.x_end, "after width", a0, b0)?;
                let am = flank_len(b0 + m, ep.y_end, "after height", a0, b0)?;
                solve_range(input, ep.x_end, an, ep.y_end, am, depth + 1, limit)?
            };

            before.concat(MatchChain::run(snake.run)).concat(after)
        };

        Ok(prefix.concat(middle).concat(suffix))
    }
}

#[cfg(feature = "parallel")]
mod imp {
    use super::*;
    use crate::middle::find_middle_snake;
    use rayon::join;

    /// Solve the full problem, recursing on flanks via the rayon pool.
    pub(crate) fn solve<I>(input: &I) -> Result<MatchChain, LcsError>
    where
        I: LcsInput + Sync,
    {
        let n = input.first_len();
        let m = input.second_len();
        let limit = n + m + 1;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("lcs_solve_parallel", n, m).entered();
        solve_range(input, 0, n, 0, m, 0, limit)
    }

    fn solve_range<I>(
        input: &I,
        a0: usize,
        n: usize,
        b0: usize,
        m: usize,
        depth: usize,
        limit: usize,
    ) -> Result<MatchChain, LcsError>
    where
        I: LcsInput + Sync,
    {
        if depth > limit {
            return Err(LcsError::DepthExceeded { limit });
        }

        let min = n.min(m);
        let p = common_prefix(input, a0, b0, min);
        let s = common_suffix(input, a0 + n, b0 + m, min - p);
        let prefix = MatchChain::run(Match::new(a0, b0, p));
        let suffix = MatchChain::run(Match::new(a0 + n - s, b0 + m - s, s));

        let (a0, n) = (a0 + p, n - p - s);
        let (b0, m) = (b0 + p, m - p - s);

        let middle = if n == 0 || m == 0 {
            MatchChain::empty()
        } else if n == 1 {
            single_in_second(input, a0, b0, m)
        } else if m == 1 {
            single_in_first(input, a0, n, b0)
        } else {
            let snake = find_middle_snake(input, a0, n, b0, m)?;
            let ep = snake.endpoint;
            let from_start = ep.x_start == a0 && ep.y_start == b0;
            let to_end = ep.x_end >= a0 + n && ep.y_end >= b0 + m;

            let (before, after) = if from_start && to_end {
                (Ok(MatchChain::empty()), Ok(MatchChain::empty()))
            } else if from_start {
                let an = flank_len(a0 + n, ep.x_end, "after width", a0, b0)?;
                let am = flank_len(b0 + m, ep.y_end, "after height", a0, b0)?;
                (
                    Ok(MatchChain::empty()),
                    solve_range(input, ep.x_end, an, ep.y_end, am, depth + 1, limit),
                )
            } else if to_end {
                let bn = flank_len(ep.x_start, a0, "before width", a0, b0)?;
                let bm = flank_len(ep.y_start, b0, "before height", a0, b0)?;
                (
                    solve_range(input, a0, bn, b0, bm, depth + 1, limit),
                    Ok(MatchChain::empty()),
                )
            } else {
                let bn = flank_len(ep.x_start, a0, "before width", a0, b0)?;
                let bm = flank_len(ep.y_start, b0, "before height", a0, b0)?;
                let an = flank_len(a0 + n, ep.x_end, "after width", a0, b0)?;
                let am = flank_len(b0 + m, ep.y_end, "after height", a0, b0)?;
                join(
                    || solve_range(input, a0, bn, b0, bm, depth + 1, limit),
                    || solve_range(input, ep.x_end, an, ep.y_end, am, depth + 1, limit),
                )
            };

            before?.concat(MatchChain::run(snake.run)).concat(after?)
        };

        Ok(prefix.concat(middle).concat(suffix))
    }
}
