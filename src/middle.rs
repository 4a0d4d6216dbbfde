//! Bidirectional middle-snake search.
//!
//! Runs forward and reverse frontier expansion in lock-step over increasing
//! edit distance `d` and stops at the first diagonal where the two frontiers
//! meet. The returned snake lies on an optimal edit path and splits the
//! subproblem into two smaller rectangles.
//!
//! Overlap is tested on one side per parity: after a forward expansion when
//! `delta = n - m` is odd (against the reverse frontier's previous layer),
//! after a reverse expansion when `delta` is even (against the forward
//! frontier's current layer), and only for diagonals inside the opposite
//! frontier's active range.

use crate::chain::Match;
use crate::error::LcsError;
use crate::input::LcsInput;
use crate::kernel::{advance_forward, advance_reverse, SnakeScratch};
use crate::vector::BidirectionalVector;

/// Rectangular boundary resolved by a middle-snake search, in absolute
/// coordinates. Everything left of `(x_start, y_start)` and right of
/// `(x_end, y_end)` is still the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) x_start: usize,
    pub(crate) y_start: usize,
    pub(crate) x_end: usize,
    pub(crate) y_end: usize,
}

/// Middle snake: the overlapping diagonal run (possibly zero-length) plus
/// the boundary it resolves.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MiddleSnake {
    pub(crate) run: Match,
    pub(crate) endpoint: Endpoint,
}

/// Find the middle snake of the subproblem `A[a0..a0+n)` x `B[b0..b0+m)`.
///
/// Requires `n >= 1` and `m >= 1`; a snake is guaranteed to exist within
/// `d <= ceil((n+m)/2)` steps, so exhausting the loop is an internal error.
pub(crate) fn find_middle_snake<I: LcsInput>(
    input: &I,
    a0: usize,
    n: usize,
    b0: usize,
    m: usize,
) -> Result<MiddleSnake, LcsError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("middle_snake", a0, b0, n, m);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let ni = n as isize;
    let mi = m as isize;
    let max = (ni + mi + 1) / 2;
    let delta = ni - mi;
    let odd_delta = delta & 1 != 0;
    let radius = (max + 1) as usize;

    let mut vf = BidirectionalVector::new(radius);
    let mut vb = BidirectionalVector::centered(delta, radius);
    vb.set(delta - 1, ni);

    let mut snake = SnakeScratch::default();

    for d in 0..=max {
        // Reverse frontier's layer d-1 window; empty at d = 0. A meet at
        // column 0 is a real meet, so the forward reach carries no floor.
        let rev_lo = delta - (d - 1);
        let rev_hi = delta + (d - 1);

        let mut k = -d;
        while k <= d {
            let xf = advance_forward(d, k, input, a0, ni, b0, mi, &mut vf, &mut snake);
            if odd_delta && d > 0 && rev_lo <= k && k <= rev_hi && vb.get(k) <= xf {
                return last_forward_snake(k, &snake, &vf, a0, b0);
            }
            k += 2;
        }

        let mut k = -d;
        while k <= d {
            let kk = k + delta;
            let xr = advance_reverse(d, kk, input, a0, ni, b0, mi, delta, &mut vb, &mut snake);
            if !odd_delta && -d <= kk && kk <= d && xr >= 0 && xr <= vf.get(kk) {
                return last_reverse_snake(kk, &snake, &vb, a0, b0);
            }
            k += 2;
        }
    }

    Err(LcsError::MiddleSnakeNotFound { a0, b0, n, m })
}

fn coord(
    value: isize,
    detail: &'static str,
    a0: usize,
    b0: usize,
) -> Result<usize, LcsError> {
    usize::try_from(value).map_err(|_| LcsError::MalformedBoundary { a0, b0, detail })
}

fn last_forward_snake(
    k: isize,
    snake: &SnakeScratch,
    v: &BidirectionalVector,
    a0: usize,
    b0: usize,
) -> Result<MiddleSnake, LcsError> {
    let x_start = v.get(k + snake.k_shift);
    let y_start = x_start - k - snake.k_shift;
    let x_mid = snake.x_mid;
    let y_mid = x_mid - k;
    let x_end = snake.x_end;
    let y_end = x_end - k;

    let endpoint = Endpoint {
        x_start: a0 + coord(x_start, "forward x_start", a0, b0)?,
        y_start: b0 + coord(y_start, "forward y_start", a0, b0)?,
        x_end: a0 + coord(x_end, "forward x_end", a0, b0)?,
        y_end: b0 + coord(y_end, "forward y_end", a0, b0)?,
    };
    let run = Match::new(
        a0 + coord(x_mid, "forward x_mid", a0, b0)?,
        b0 + coord(y_mid, "forward y_mid", a0, b0)?,
        coord(x_end - x_mid, "forward run length", a0, b0)?,
    );
    Ok(MiddleSnake { run, endpoint })
}

fn last_reverse_snake(
    k: isize,
    snake: &SnakeScratch,
    v: &BidirectionalVector,
    a0: usize,
    b0: usize,
) -> Result<MiddleSnake, LcsError> {
    let x_start = v.get(k + snake.k_shift);
    let y_start = x_start - k - snake.k_shift;
    let x_mid = snake.x_mid;
    let x_end = snake.x_end;
    let y_end = x_end - k;

    // The reverse snake runs from (x_end, y_end) up to (x_mid, y_mid); its
    // endpoint is therefore flipped relative to the forward case.
    let endpoint = Endpoint {
        x_start: a0 + coord(x_end, "reverse x_end", a0, b0)?,
        y_start: b0 + coord(y_end, "reverse y_end", a0, b0)?,
        x_end: a0 + coord(x_start, "reverse x_start", a0, b0)?,
        y_end: b0 + coord(y_start, "reverse y_start", a0, b0)?,
    };
    let run = Match::new(
        endpoint.x_start,
        endpoint.y_start,
        coord(x_mid - x_end, "reverse run length", a0, b0)?,
    );
    Ok(MiddleSnake { run, endpoint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SlicePair;

    #[test]
    fn finds_single_match_snake() {
        // LCS("AC", "CA") has length 1; the even-delta search meets on the
        // reverse side with the run covering A[0] = B[1] = 'A'.
        let a: Vec<u8> = b"AC".to_vec();
        let b: Vec<u8> = b"CA".to_vec();
        let input = SlicePair::new(&a, &b);
        let ms = find_middle_snake(&input, 0, 2, 0, 2).unwrap();
        assert_eq!(ms.run, Match::new(0, 1, 1));
        assert_eq!(
            ms.endpoint,
            Endpoint {
                x_start: 0,
                y_start: 1,
                x_end: 2,
                y_end: 2
            }
        );
    }

    #[test]
    fn disjoint_sequences_yield_zero_length_snake() {
        let a: Vec<u8> = b"XXXX".to_vec();
        let b: Vec<u8> = b"YY".to_vec();
        let input = SlicePair::new(&a, &b);
        let ms = find_middle_snake(&input, 0, 4, 0, 2).unwrap();
        assert_eq!(ms.run.len, 0);
        let ep = ms.endpoint;
        assert!(ep.x_start <= ep.x_end && ep.x_end <= 4);
        assert!(ep.y_start <= ep.y_end && ep.y_end <= 2);
    }

    #[test]
    fn snake_respects_subrange_offsets() {
        // Same subproblem as above embedded at offset (1, 1).
        let a: Vec<u8> = b"ZACZ".to_vec();
        let b: Vec<u8> = b"ZCAZ".to_vec();
        let input = SlicePair::new(&a, &b);
        let ms = find_middle_snake(&input, 1, 2, 1, 2).unwrap();
        assert_eq!(ms.run, Match::new(1, 2, 1));
    }

    #[test]
    fn frontier_meet_at_column_zero_is_detected() {
        // delta = -5 (odd): the frontiers first meet at (0, 4) on diagonal
        // k = -4 with both reaches at column 0. The snake is empty; the
        // split alone keeps the recursion on the optimal path to the lone
        // 'A' match.
        let a: Vec<u8> = b"AB".to_vec();
        let b: Vec<u8> = b"CCCCCCA".to_vec();
        let input = SlicePair::new(&a, &b);
        let ms = find_middle_snake(&input, 0, 2, 0, 7).unwrap();
        assert_eq!(ms.run.len, 0);
        assert_eq!(
            ms.endpoint,
            Endpoint {
                x_start: 0,
                y_start: 3,
                x_end: 0,
                y_end: 4
            }
        );
    }

    #[test]
    fn skewed_rectangle_stays_in_bounds() {
        // n much larger than m exercises the recentered reverse vector.
        let a: Vec<u8> = (0..40u8).collect();
        let b: Vec<u8> = vec![7, 23];
        let input = SlicePair::new(&a, &b);
        let ms = find_middle_snake(&input, 0, 40, 0, 2).unwrap();
        let ep = ms.endpoint;
        assert!(ep.x_end <= 40 && ep.y_end <= 2);
        assert!(ms.run.len <= 2);
    }
}
