//! Match runs and their ordered concatenation.
//!
//! The solver produces one [`Match`] per maximal diagonal run of equal
//! elements and splices them, left to right, into a [`MatchChain`]. A chain
//! concatenates in O(1) by linking owned subtrees rather than copying runs,
//! and cannot form a cycle: every subtree is owned by exactly one parent.

/// A maximal run of equal elements along one diagonal.
///
/// `A[x .. x + len)` equals `B[y .. y + len)` element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start index into the first sequence.
    pub x: usize,
    /// Start index into the second sequence.
    pub y: usize,
    /// Number of matched elements; never 0 once stored in a chain.
    pub len: usize,
}

impl Match {
    pub fn new(x: usize, y: usize, len: usize) -> Self {
        Self { x, y, len }
    }

    /// One past the last covered index of the first sequence.
    pub fn x_end(&self) -> usize {
        self.x + self.len
    }

    /// One past the last covered index of the second sequence.
    pub fn y_end(&self) -> usize {
        self.y + self.len
    }
}

#[derive(Debug, Clone)]
enum Node {
    Empty,
    Run(Match),
    Cat(Box<Node>, Box<Node>),
}

/// Ordered sequence of matches covering every common element left to right.
///
/// Invariant: iterating a chain built by the solver yields matches with
/// strictly increasing, non-overlapping `x` and `y`; the sum of their
/// lengths is the LCS length, cached as [`total_len`](Self::total_len).
#[derive(Debug, Clone)]
pub struct MatchChain {
    total: usize,
    root: Node,
}

impl MatchChain {
    /// A chain with no matches.
    pub fn empty() -> Self {
        Self {
            total: 0,
            root: Node::Empty,
        }
    }

    /// A chain holding one run; a zero-length run collapses to empty.
    pub fn run(m: Match) -> Self {
        if m.len == 0 {
            Self::empty()
        } else {
            Self {
                total: m.len,
                root: Node::Run(m),
            }
        }
    }

    /// Append `other` after `self` in O(1). Empty operands vanish.
    pub fn concat(self, other: MatchChain) -> MatchChain {
        if self.total == 0 {
            return other;
        }
        if other.total == 0 {
            return self;
        }
        MatchChain {
            total: self.total + other.total,
            root: Node::Cat(Box::new(self.root), Box::new(other.root)),
        }
    }

    /// Total number of covered elements, i.e. the LCS length.
    pub fn total_len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Single-pass, in-order traversal of the matches.
    pub fn iter(&self) -> Matches<'_> {
        Matches {
            stack: vec![&self.root],
        }
    }

    /// Materialize the covered elements of the first sequence, in order.
    ///
    /// This is the LCS itself: by construction the covered elements of the
    /// second sequence are identical.
    pub fn extract<T: Clone>(&self, a: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(self.total);
        for m in self.iter() {
            out.extend(a[m.x..m.x + m.len].iter().cloned());
        }
        out
    }
}

impl<'a> IntoIterator for &'a MatchChain {
    type Item = Match;
    type IntoIter = Matches<'a>;

    fn into_iter(self) -> Matches<'a> {
        self.iter()
    }
}

/// In-order iterator over a chain's matches.
pub struct Matches<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Empty => {}
                Node::Run(m) => return Some(*m),
                Node::Cat(left, right) => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
