//! Flat array of open bins, as scanned by [`crate::online::BestFit`].
//!
//! A bin whose used capacity exceeds `K - min_size` cannot accept any further item. Such a bin is
//! retired by moving the last open bin into its slot, which keeps the open list short without
//! changing which bins are candidates.

use log::trace;

use crate::error::{try_vec, PackError};
use crate::Instance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBin {
    id: usize,
    used: usize,
}

/// Open bins and a count of retired ones.
#[derive(Debug)]
pub struct BinLedger {
    open: Vec<OpenBin>,
    retired: usize,
    capacity: usize,
    retire_above: usize,
}

impl BinLedger {
    /// Allocates a ledger able to hold one bin per item.
    pub fn new(instance: &Instance, n: usize) -> Result<Self, PackError> {
        Ok(BinLedger {
            open: try_vec("open bins", n)?,
            retired: 0,
            capacity: instance.capacity,
            retire_above: instance.retire_above(),
        })
    }

    /// Returns the slot of the open bin that would be fullest after adding `size`.
    ///
    /// Ties go to the earliest slot.
    pub fn best_fit(&self, size: usize) -> Option<usize> {
        let mut best = None;
        let mut best_used = 0;
        for (slot, bin) in self.open.iter().enumerate() {
            if size > self.capacity - bin.used {
                continue;
            }
            let used = bin.used + size;
            if used > best_used {
                best = Some(slot);
                best_used = used;
            }
        }
        best
    }

    /// Adds `size` to the bin in `slot` and returns its id, retiring the bin if it became full.
    pub fn place(&mut self, slot: usize, size: usize) -> Result<usize, PackError> {
        let bin = &mut self.open[slot];
        let used = match bin.used.checked_add(size) {
            Some(used) if used <= self.capacity => used,
            used => {
                return Err(PackError::InvariantViolation {
                    bin: bin.id,
                    used: used.unwrap_or(usize::MAX),
                    capacity: self.capacity,
                })
            }
        };
        bin.used = used;
        let id = bin.id;
        if used > self.retire_above {
            self.open.swap_remove(slot);
            self.retired += 1;
            trace!("retired bin {id} at {used}/{}", self.capacity);
        }
        Ok(id)
    }

    /// Opens a new bin holding `size` and returns its id.
    pub fn open(&mut self, size: usize) -> Result<usize, PackError> {
        let id = self.len();
        if size > self.capacity {
            return Err(PackError::InvariantViolation {
                bin: id,
                used: size,
                capacity: self.capacity,
            });
        }
        trace!("opened bin {id} with {size}");
        self.open.push(OpenBin { id, used: size });
        Ok(id)
    }

    /// Number of bins still accepting items.
    pub fn open_bins(&self) -> usize {
        self.open.len()
    }

    /// Number of bins that can no longer accept items.
    pub fn retired_bins(&self) -> usize {
        self.retired
    }

    /// Total number of bins in use.
    pub fn len(&self) -> usize {
        self.open.len() + self.retired
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(capacity: usize, min_size: usize) -> BinLedger {
        BinLedger::new(&Instance::new(capacity).with_min_size(min_size), 8).unwrap()
    }

    #[test]
    fn best_fit_prefers_fullest_feasible_bin() {
        let mut ledger = ledger(10, 1);
        ledger.open(3).unwrap();
        ledger.open(6).unwrap();
        ledger.open(8).unwrap();
        assert_eq!(ledger.best_fit(2), Some(2));
        assert_eq!(ledger.best_fit(4), Some(1));
        assert_eq!(ledger.best_fit(8), None);
    }

    #[test]
    fn best_fit_breaks_ties_by_earliest_slot() {
        let mut ledger = ledger(10, 1);
        ledger.open(5).unwrap();
        ledger.open(5).unwrap();
        assert_eq!(ledger.best_fit(3), Some(0));
    }

    #[test]
    fn nearly_full_bins_are_retired() {
        let mut ledger = ledger(5, 2);
        let a = ledger.open(2).unwrap();
        let b = ledger.open(3).unwrap();
        assert_eq!(ledger.open_bins(), 2);

        // 2 + 2 = 4 > 5 - 2, so bin `a` can never take another item.
        assert_eq!(ledger.place(0, 2).unwrap(), a);
        assert_eq!(ledger.open_bins(), 1);
        assert_eq!(ledger.retired_bins(), 1);
        assert_eq!(ledger.len(), 2);

        // The remaining bin moved into slot 0.
        assert_eq!(ledger.best_fit(2), Some(0));
        assert_eq!(ledger.place(0, 2).unwrap(), b);
        assert_eq!(ledger.open_bins(), 0);
    }

    #[test]
    fn ids_stay_stable_across_retirement() {
        let mut ledger = ledger(4, 1);
        ledger.open(3).unwrap();
        ledger.place(0, 1).unwrap();
        assert_eq!(ledger.open_bins(), 0);
        assert_eq!(ledger.open(1).unwrap(), 1);
    }

    #[test]
    fn fit_check_handles_maximal_capacity() {
        let mut ledger = ledger(usize::MAX, 1);
        ledger.open(usize::MAX).unwrap();
        assert_eq!(ledger.best_fit(1), None);
        assert!(matches!(
            ledger.place(0, 1),
            Err(PackError::InvariantViolation { used: usize::MAX, .. })
        ));
    }

    #[test]
    fn overflowing_placement_is_reported() {
        let mut ledger = ledger(5, 1);
        ledger.open(4).unwrap();
        assert_eq!(
            ledger.place(0, 2),
            Err(PackError::InvariantViolation {
                bin: 0,
                used: 6,
                capacity: 5
            })
        );
    }
}
