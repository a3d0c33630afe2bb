use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Pair, PairError, Result};

/// Finds the first `(i, j)`, `i < j`, in lexicographic order with `nums[i] + nums[j] == target`.
///
/// Sums are widened to `i64`, so no input overflows.
pub fn find_pair(nums: &[i32], target: i32) -> Result<Pair> {
    let target = i64::from(target);

    for (i, &ni) in nums.iter().enumerate() {
        for (j, &nj) in nums.iter().enumerate().skip(i + 1) {
            if i64::from(ni) + i64::from(nj) == target {
                trace!(i, j, "found pair");
                return Ok(Pair::new(i, j));
            }
        }
    }

    debug!(len = nums.len(), target, "no pair found");
    Err(PairError::NotFound)
}

/// Single pass variant. Among all matches it returns the one with the smallest `j`,
/// and for that `j` the smallest `i`, which can differ from [`find_pair`] when
/// several pairs qualify.
pub fn find_pair_hashed(nums: &[i32], target: i32) -> Result<Pair> {
    let target = i64::from(target);

    let mut index_by_num: FxHashMap<i32, usize> = FxHashMap::default();
    index_by_num.reserve(nums.len());

    for (j, &n) in nums.iter().enumerate() {
        let diff = target - i64::from(n);

        if let Ok(diff) = i32::try_from(diff) {
            if let Some(&i) = index_by_num.get(&diff) {
                trace!(i, j, "found pair");
                return Ok(Pair::new(i, j));
            }
        }

        index_by_num.entry(n).or_insert(j);
    }

    debug!(len = nums.len(), target, "no pair found");
    Err(PairError::NotFound)
}
