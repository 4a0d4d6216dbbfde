//! Signed-index storage for search frontiers.
//!
//! The Myers search records, for each diagonal `k = x - y`, the furthest `x`
//! reached so far. Diagonals are signed and, for the reverse frontier, are
//! clustered around `delta = n - m` rather than zero, so the buffer carries
//! an explicit recentering offset. All offset arithmetic lives here; callers
//! only ever address slots by diagonal number.

/// Fixed-capacity integer table addressable by signed diagonal.
///
/// Reads outside the allocated range saturate to 0 (the "not yet reached"
/// sentinel) instead of failing, because the expansion kernel routinely
/// probes `k - 1` and `k + 1` at the extremities of the active range.
/// Writes outside the range are dropped.
#[derive(Debug, Clone)]
pub struct BidirectionalVector {
    slots: Vec<isize>,
    center: isize,
    radius: isize,
}

impl BidirectionalVector {
    /// A vector covering diagonals `[-radius, radius]`, all zero.
    pub fn new(radius: usize) -> Self {
        Self::centered(0, radius)
    }

    /// A vector covering diagonals `[center - radius, center + radius]`.
    ///
    /// The reverse frontier of a bidirectional search uses `center = n - m`.
    pub fn centered(center: isize, radius: usize) -> Self {
        Self {
            slots: vec![0; 2 * radius + 1],
            center,
            radius: radius as isize,
        }
    }

    fn slot(&self, k: isize) -> Option<usize> {
        let idx = k - self.center + self.radius;
        if idx < 0 || idx >= self.slots.len() as isize {
            None
        } else {
            Some(idx as usize)
        }
    }

    /// Furthest reach recorded on diagonal `k`, or 0 if out of range.
    pub fn get(&self, k: isize) -> isize {
        match self.slot(k) {
            Some(i) => self.slots[i],
            None => 0,
        }
    }

    /// Record `value` as the reach on diagonal `k`; out-of-range writes are
    /// dropped.
    pub fn set(&mut self, k: isize, value: isize) {
        if let Some(i) = self.slot(k) {
            self.slots[i] = value;
        }
    }
}
