//! One-dimensional bin-packing with the Best-Fit heuristic
//!
//! Every item is placed into the open bin that is left with the least spare capacity after the
//! insertion, and a new bin is opened only when no open bin fits. Three strategies implement the
//! same policy with different accelerations:
//!
//! - [`online::BestFit`] scans a flat [`ledger::BinLedger`], retiring bins that can no longer
//!   accept any item.
//! - [`online::BestFitHeap`] searches a [`heap::BinHeap`], pruning subtrees that would overflow.
//! - [`online::BestFitLookup`] looks the tightest bin up in a [`histogram::CapacityHistogram`].
//!
//! All of them agree on the number of bins for the same input. The sibling Next-Fit heuristics
//! live in [`online::NextFit`] and [`offline::NextFitDecreasing`].
//!
//! ```
//! use best_fit_packing::{online::*, Instance};
//!
//! let items = [4usize, 3, 2, 2];
//! let instance = Instance::for_items(5, &items);
//! let packing = BestFit.pack(&instance, &items).unwrap();
//! assert_eq!(packing.bins, 3);
//! ```

pub mod error;
pub mod heap;
pub mod histogram;
pub mod instance;
pub mod ledger;
pub mod offline;
pub mod online;

pub use error::PackError;
pub use instance::Instance;
pub use online::Packing;

/// An item that can be packed into a bin.
pub trait Item {
    /// Returns the size of the item.
    fn size(&self) -> usize;
}

impl Item for usize {
    fn size(&self) -> usize {
        *self
    }
}

impl Item for u32 {
    fn size(&self) -> usize {
        *self as usize
    }
}

impl<T: Item> Item for &T {
    fn size(&self) -> usize {
        (**self).size()
    }
}
