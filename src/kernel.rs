//! Frontier expansion kernel.
//!
//! One call advances a single search frontier by one unit of edit distance
//! `d` on one diagonal `k`, then slides down the snake (the maximal run of
//! equal elements on that diagonal). Coordinates here are relative to the
//! subproblem origin `(a0, b0)` and signed, because reverse reaches pass
//! through -1 transiently at the extremities.

use crate::input::LcsInput;
use crate::vector::BidirectionalVector;

/// Scratch record describing the snake traversed by the latest step:
/// which predecessor diagonal was taken, where the diagonal run began and
/// where it ended.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SnakeScratch {
    pub(crate) k_shift: isize,
    pub(crate) x_mid: isize,
    pub(crate) x_end: isize,
}

/// Advance the forward frontier on diagonal `k` at distance `d`.
///
/// Chooses between the `down` move (reach of `k + 1`) and the `right` move
/// (reach of `k - 1`, plus one). At the boundary diagonals only one
/// predecessor exists: `k == -d` forces `down`, `k == d` forces `right`.
/// Returns the extended reach, which is also stored in `v`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn advance_forward<I: LcsInput>(
    d: isize,
    k: isize,
    input: &I,
    a0: usize,
    n: isize,
    b0: usize,
    m: isize,
    v: &mut BidirectionalVector,
    snake: &mut SnakeScratch,
) -> isize {
    let next = v.get(k + 1);
    let prev = v.get(k - 1);
    let (start, k_shift) = if k == -d || (k != d && prev < next) {
        (next, 1) // down
    } else {
        (prev + 1, -1) // right
    };
    snake.k_shift = k_shift;
    snake.x_mid = start;

    let mut x = start;
    let mut y = x - k;
    while x >= 0
        && y >= 0
        && x < n
        && y < m
        && input.equal_at(a0 + x as usize, b0 + y as usize)
    {
        x += 1;
        y += 1;
    }
    v.set(k, x);
    snake.x_end = x;
    x
}

/// Advance the reverse frontier on diagonal `k` at distance `d`.
///
/// The mirror of [`advance_forward`], walking from `(n, m)` toward the
/// origin; boundary diagonals are shifted by `delta = n - m`. Negative
/// reaches (overshoot past the origin) are reported but not stored.
#[allow(clippy::too_many_arguments)]
pub(crate) fn advance_reverse<I: LcsInput>(
    d: isize,
    k: isize,
    input: &I,
    a0: usize,
    n: isize,
    b0: usize,
    m: isize,
    delta: isize,
    v: &mut BidirectionalVector,
    snake: &mut SnakeScratch,
) -> isize {
    let next = v.get(k + 1); // left
    let prev = v.get(k - 1); // up
    let (start, k_shift) = if k == d + delta || (k != -d + delta && prev < next) {
        (prev, -1) // up
    } else {
        (next - 1, 1) // left
    };
    snake.k_shift = k_shift;
    snake.x_mid = start;

    let mut x = start;
    let mut y = x - k;
    while x > 0
        && y > 0
        && x <= n
        && y <= m
        && input.equal_at(a0 + (x - 1) as usize, b0 + (y - 1) as usize)
    {
        x -= 1;
        y -= 1;
    }
    snake.x_end = x;
    if x >= 0 {
        v.set(k, x);
    }
    x
}
