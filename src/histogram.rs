//! Bins bucketed by remaining capacity, as used by [`crate::online::BestFitLookup`].
//!
//! `count[c]` is the number of bins with exactly `c` units of spare capacity. The histogram starts
//! with `n` empty bins in bucket `K`, which is enough for `n` items, and placing an item only
//! moves a bin to a lower bucket. The total number of bins therefore never changes.

use crate::error::{try_vec, PackError};

#[derive(Debug)]
pub struct CapacityHistogram {
    count: Vec<usize>,
}

impl CapacityHistogram {
    /// Creates `n` empty bins of the given capacity.
    pub fn new(capacity: usize, n: usize) -> Result<Self, PackError> {
        let len = capacity
            .checked_add(1)
            .ok_or(PackError::AllocationFailure {
                what: "capacity histogram",
                len: capacity,
            })?;
        let mut count = try_vec("capacity histogram", len)?;
        count.resize(len, 0);
        count[capacity] = n;
        Ok(CapacityHistogram { count })
    }

    pub fn capacity(&self) -> usize {
        self.count.len() - 1
    }

    /// Number of bins with exactly `remaining` spare capacity.
    pub fn bins_with(&self, remaining: usize) -> usize {
        self.count.get(remaining).copied().unwrap_or(0)
    }

    /// Smallest remaining capacity that can still take an item of `size`.
    pub fn tightest_fit(&self, size: usize) -> Option<usize> {
        let tail = self.count.get(size..)?;
        tail.iter().position(|&bins| bins > 0).map(|offset| size + offset)
    }

    /// Moves one bin from bucket `remaining` down by `size`.
    pub fn take(&mut self, remaining: usize, size: usize) -> Result<(), PackError> {
        if size > remaining || self.bins_with(remaining) == 0 {
            return Err(PackError::InvariantViolation {
                bin: remaining,
                used: self.capacity().saturating_sub(remaining).saturating_add(size),
                capacity: self.capacity(),
            });
        }
        self.count[remaining] -= 1;
        self.count[remaining - size] += 1;
        Ok(())
    }

    /// Number of bins holding at least one item.
    pub fn used_bins(&self) -> usize {
        self.count[..self.capacity()].iter().sum()
    }

    /// Number of bins in all buckets, used or not.
    pub fn total_bins(&self) -> usize {
        self.count.iter().sum()
    }
}
