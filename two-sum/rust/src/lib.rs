use std::fmt::{self, Display, Formatter};

use thiserror::Error;

pub mod pair_finder;

pub use pair_finder::{find_pair, find_pair_hashed};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairError {
    #[error("no two elements sum to the target")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, PairError>;

/// Indices of two elements summing to a target. Always `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    i: usize,
    j: usize,
}

impl Pair {
    pub(crate) const fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j);
        Self { i, j }
    }

    pub const fn i(&self) -> usize {
        self.i
    }

    pub const fn j(&self) -> usize {
        self.j
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.i, self.j)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive scan, first match in `(i, j)` order.
    #[default]
    BruteForce,
    /// Single pass over a value -> index map, first match in `j` order.
    Hashed,
}

impl Strategy {
    pub fn find(self, nums: &[i32], target: i32) -> Result<Pair> {
        match self {
            Strategy::BruteForce => find_pair(nums, target),
            Strategy::Hashed => find_pair_hashed(nums, target),
        }
    }
}
