//! Sequence access capability.
//!
//! The solver never touches a concrete container: it sees two sequences only
//! through [`LcsInput`], which exposes their lengths and cross-sequence
//! element equality by index. Any indexable collection can participate by
//! implementing the trait; [`SlicePair`] and [`PredicatePair`] cover the
//! common cases.

/// A pair of read-only sequences compared element-wise.
///
/// Implementations must be pure: repeated calls with the same indices return
/// the same answer, and no call mutates the underlying data. The solver may
/// probe the same index many times and, with the `parallel` feature, from
/// several threads at once.
///
/// Index validity is the caller's contract: `equal_at(x, y)` is only invoked
/// with `x < first_len()` and `y < second_len()`, and implementations are
/// not required to bounds-check (the slice adapters get checking from Rust
/// for free).
pub trait LcsInput {
    /// Length of the first sequence.
    fn first_len(&self) -> usize;

    /// Length of the second sequence.
    fn second_len(&self) -> usize;

    /// Whether element `x` of the first sequence equals element `y` of the
    /// second.
    fn equal_at(&self, x: usize, y: usize) -> bool;
}

/// Two slices compared with `PartialEq`.
#[derive(Clone, Copy, Debug)]
pub struct SlicePair<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<'a, T: PartialEq> SlicePair<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }

    /// The first slice, e.g. for [`crate::MatchChain::extract`].
    pub fn first(&self) -> &'a [T] {
        self.a
    }

    /// The second slice.
    pub fn second(&self) -> &'a [T] {
        self.b
    }
}

impl<'a, T: PartialEq> LcsInput for SlicePair<'a, T> {
    fn first_len(&self) -> usize {
        self.a.len()
    }

    fn second_len(&self) -> usize {
        self.b.len()
    }

    fn equal_at(&self, x: usize, y: usize) -> bool {
        self.a[x] == self.b[y]
    }
}

/// Two slices compared with a caller-supplied equality predicate.
///
/// Useful when `T` has no `PartialEq`, or when equality should be coarser
/// than value equality (case folding, field projection, ...).
#[derive(Clone, Copy, Debug)]
pub struct PredicatePair<'a, T, F> {
    a: &'a [T],
    b: &'a [T],
    eq: F,
}

impl<'a, T, F> PredicatePair<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(a: &'a [T], b: &'a [T], eq: F) -> Self {
        Self { a, b, eq }
    }

    /// The first slice.
    pub fn first(&self) -> &'a [T] {
        self.a
    }
}

impl<'a, T, F> LcsInput for PredicatePair<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn first_len(&self) -> usize {
        self.a.len()
    }

    fn second_len(&self) -> usize {
        self.b.len()
    }

    fn equal_at(&self, x: usize, y: usize) -> bool {
        (self.eq)(&self.a[x], &self.b[y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_pair_compares_across_sequences() {
        let a = [1, 2, 3];
        let b = [3, 2];
        let p = SlicePair::new(&a, &b);
        assert_eq!(p.first_len(), 3);
        assert_eq!(p.second_len(), 2);
        assert!(p.equal_at(2, 0));
        assert!(p.equal_at(1, 1));
        assert!(!p.equal_at(0, 0));
    }

    #[test]
    fn predicate_pair_uses_custom_equality() {
        let a = ["Fox", "dog"];
        let b = ["FOX", "cat"];
        let p = PredicatePair::new(&a, &b, |x: &&str, y: &&str| {
            x.eq_ignore_ascii_case(y)
        });
        assert!(p.equal_at(0, 0));
        assert!(!p.equal_at(1, 1));
    }
}
