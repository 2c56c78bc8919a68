//! Binary min-heap of bins keyed by used capacity.
//!
//! The root is the least full bin and every bin is at most as full as its children. Bins only
//! ever enter through [`BinHeap::push`] and only ever grow through [`BinHeap::increase`], so the
//! order can be restored locally after each mutation.

use std::collections::VecDeque;

use crate::error::{try_vec, PackError};

/// Min-heap over the used capacity of each open bin.
#[derive(Debug)]
pub struct BinHeap {
    used: Vec<usize>,
    capacity: usize,
    queue: VecDeque<usize>,
}

impl BinHeap {
    /// Allocates a heap for up to `n` bins of the given capacity.
    pub fn new(capacity: usize, n: usize) -> Result<Self, PackError> {
        let mut queue = VecDeque::new();
        queue
            .try_reserve_exact(n)
            .map_err(|_| PackError::AllocationFailure {
                what: "search queue",
                len: n,
            })?;
        Ok(BinHeap {
            used: try_vec("bin heap", n)?,
            capacity,
            queue,
        })
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Used capacity of the least full bin.
    pub fn root(&self) -> Option<usize> {
        self.used.first().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.used
    }

    /// Inserts a new bin holding `used` and sifts it up.
    pub fn push(&mut self, used: usize) -> Result<(), PackError> {
        if used > self.capacity {
            return Err(self.overflow(self.used.len(), used));
        }
        let mut idx = self.used.len();
        self.used.push(used);
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.used[parent] <= self.used[idx] {
                break;
            }
            self.used.swap(parent, idx);
            idx = parent;
        }
        Ok(())
    }

    /// Adds `amount` to the bin at `idx` and sifts it down towards the leaves.
    pub fn increase(&mut self, idx: usize, amount: usize) -> Result<(), PackError> {
        let used = match self.used[idx].checked_add(amount) {
            Some(used) if used <= self.capacity => used,
            used => return Err(self.overflow(idx, used.unwrap_or(usize::MAX))),
        };
        self.used[idx] = used;

        let len = self.used.len();
        let mut idx = idx;
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.used[left] < self.used[smallest] {
                smallest = left;
            }
            if right < len && self.used[right] < self.used[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.used.swap(idx, smallest);
            idx = smallest;
        }
        Ok(())
    }

    /// Finds the bin that would be fullest after adding `size`, without exceeding capacity.
    ///
    /// Walks the tree breadth first from the root. A bin that cannot take the item is not
    /// descended into: its children are at least as full, so they cannot take it either.
    pub fn tightest_fit(&mut self, size: usize) -> Option<usize> {
        match self.root() {
            Some(root) if size <= self.capacity - root => {}
            _ => return None,
        }

        let len = self.used.len();
        let mut best = None;
        let mut best_used = 0;
        self.queue.clear();
        self.queue.push_back(0);
        while let Some(idx) = self.queue.pop_front() {
            if size > self.capacity - self.used[idx] {
                continue;
            }
            let used = self.used[idx] + size;
            if used > best_used {
                best = Some(idx);
                best_used = used;
            }
            for child in [2 * idx + 1, 2 * idx + 2] {
                if child < len {
                    self.queue.push_back(child);
                }
            }
        }
        best
    }

    fn overflow(&self, bin: usize, used: usize) -> PackError {
        PackError::InvariantViolation {
            bin,
            used,
            capacity: self.capacity,
        }
    }
}
