//! Online bin packing strategies.
//!
//! Online strategies place items in the order they are given, without looking ahead. Each call
//! validates the input, allocates its working structure, packs every item and returns a
//! [`Packing`]. Nothing is shared between calls.

use std::time::{Duration, Instant};

use log::debug;

use super::*;
use crate::error::try_vec;
use crate::heap::BinHeap;
use crate::histogram::CapacityHistogram;
use crate::ledger::BinLedger;

/// Outcome of packing a sequence of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    /// Number of bins holding at least one item.
    pub bins: usize,
    /// Bin id of every item, for the strategies that track it. Ids are in `0..bins`.
    pub assignment: Option<Vec<usize>>,
    /// Time spent placing items, excluding validation and allocation.
    pub elapsed: Duration,
}

impl Packing {
    /// Checks that every item is assigned to a known bin and that no bin is over capacity.
    ///
    /// Packings without an assignment trivially pass.
    pub fn verify(&self, instance: &Instance, items: &[impl Item]) -> Result<(), PackError> {
        let Some(assignment) = &self.assignment else {
            return Ok(());
        };
        if assignment.len() != items.len() {
            return Err(PackError::InvalidAssignment {
                index: assignment.len().min(items.len()),
            });
        }
        let mut used = vec![0usize; self.bins];
        for (index, (&bin, item)) in assignment.iter().zip(items).enumerate() {
            let load = used
                .get_mut(bin)
                .ok_or(PackError::InvalidAssignment { index })?;
            *load = load.saturating_add(item.size());
            if *load > instance.capacity {
                return Err(PackError::InvariantViolation {
                    bin,
                    used: *load,
                    capacity: instance.capacity,
                });
            }
        }
        Ok(())
    }
}

/// An online strategy for packing items into bins of a given instance.
pub trait Strategy {
    /// Short name of the strategy, used in logs.
    fn name(&self) -> &'static str;

    /// Packs all items in order, failing before any placement if the input is invalid.
    fn pack(&self, instance: &Instance, items: &[impl Item]) -> Result<Packing, PackError>;
}

fn finish(
    strategy: &impl Strategy,
    instance: &Instance,
    n: usize,
    bins: usize,
    assignment: Option<Vec<usize>>,
    start: Instant,
) -> Packing {
    let elapsed = start.elapsed();
    debug!(
        "{}: packed {n} items into {bins} bins of capacity {} in {elapsed:?}",
        strategy.name(),
        instance.capacity,
    );
    Packing {
        bins,
        assignment,
        elapsed,
    }
}

/// Best-Fit over a flat list of open bins. O(n²) in the worst case.
///
/// Each item goes to the bin that is fullest after insertion, with ties going to the earliest bin
/// in the list. Bins that can no longer take an item of `min_size` are retired from the list.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFit;
impl Strategy for BestFit {
    fn name(&self) -> &'static str {
        "best-fit"
    }

    fn pack(&self, instance: &Instance, items: &[impl Item]) -> Result<Packing, PackError> {
        instance.validate(items)?;
        instance.validate_min_size(items)?;
        let mut ledger = BinLedger::new(instance, items.len())?;
        let mut assignment = try_vec("assignment", items.len())?;

        let start = Instant::now();
        for item in items {
            let size = item.size();
            let bin = match ledger.best_fit(size) {
                Some(slot) => ledger.place(slot, size)?,
                None => ledger.open(size)?,
            };
            assignment.push(bin);
        }
        Ok(finish(
            self,
            instance,
            items.len(),
            ledger.len(),
            Some(assignment),
            start,
        ))
    }
}

/// Best-Fit over a min-heap of bins keyed by used capacity. O(n log n) typically.
///
/// If the least full bin cannot take an item, no bin can, and a new one is opened right away.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFitHeap;
impl Strategy for BestFitHeap {
    fn name(&self) -> &'static str {
        "best-fit-heap"
    }

    fn pack(&self, instance: &Instance, items: &[impl Item]) -> Result<Packing, PackError> {
        instance.validate(items)?;
        let mut heap = BinHeap::new(instance.capacity, items.len())?;

        let start = Instant::now();
        for item in items {
            let size = item.size();
            match heap.tightest_fit(size) {
                Some(idx) => heap.increase(idx, size)?,
                None => heap.push(size)?,
            }
        }
        Ok(finish(self, instance, items.len(), heap.len(), None, start))
    }
}

/// Best-Fit through a histogram of remaining capacities. O(n·K) regardless of the bin count.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFitLookup;
impl Strategy for BestFitLookup {
    fn name(&self) -> &'static str {
        "best-fit-lookup"
    }

    fn pack(&self, instance: &Instance, items: &[impl Item]) -> Result<Packing, PackError> {
        instance.validate(items)?;
        let mut histogram = CapacityHistogram::new(instance.capacity, items.len())?;

        let start = Instant::now();
        for item in items {
            let size = item.size();
            let remaining = histogram
                .tightest_fit(size)
                .ok_or(PackError::InvariantViolation {
                    bin: instance.capacity,
                    used: size,
                    capacity: instance.capacity,
                })?;
            histogram.take(remaining, size)?;
        }
        debug_assert_eq!(histogram.total_bins(), items.len());
        Ok(finish(
            self,
            instance,
            items.len(),
            histogram.used_bins(),
            None,
            start,
        ))
    }
}

/// Next-Fit: keeps a single bin open and starts a new one whenever the item does not fit. O(n).
#[derive(Debug, Default, Clone, Copy)]
pub struct NextFit;
impl Strategy for NextFit {
    fn name(&self) -> &'static str {
        "next-fit"
    }

    fn pack(&self, instance: &Instance, items: &[impl Item]) -> Result<Packing, PackError> {
        instance.validate(items)?;
        let mut assignment = try_vec("assignment", items.len())?;

        let start = Instant::now();
        let mut bins = 0;
        let mut used = 0;
        for item in items {
            let size = item.size();
            if bins > 0 && size <= instance.capacity - used {
                used += size;
            } else {
                bins += 1;
                used = size;
            }
            assignment.push(bins - 1);
        }
        Ok(finish(
            self,
            instance,
            items.len(),
            bins,
            Some(assignment),
            start,
        ))
    }
}
