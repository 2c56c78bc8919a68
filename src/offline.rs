//! Offline bin packing strategies.
//!
//! Offline strategies have access to all items in advance and may reorder them before packing.

use std::cmp::Ordering;

use crate::online::{BestFit, NextFit, Strategy as OnlineStrategy};
use crate::*;

/// An offline strategy that packs all items into bins, possibly reordering them first.
pub trait Strategy {
    /// Packs all items, leaving them in the order they were packed in.
    fn pack_all(&self, instance: &Instance, items: &mut [impl Item]) -> Result<Packing, PackError>;
}

/// Three-way comparison between two item sizes.
pub type SizeOrder = fn(&usize, &usize) -> Ordering;

/// Orders larger items first.
pub fn descending(a: &usize, b: &usize) -> Ordering {
    b.cmp(a)
}

/// An offline strategy that sorts the items and then packs them with an online strategy.
///
/// The sort is stable, so items of equal size keep their relative order.
pub struct Decreasing<S, F = SizeOrder> {
    online: S,
    order: F,
}

impl<S: OnlineStrategy> Decreasing<S> {
    /// Sorts by descending size.
    pub fn new(online: S) -> Self {
        Decreasing {
            online,
            order: descending,
        }
    }
}

impl<S: OnlineStrategy + Default> Default for Decreasing<S> {
    fn default() -> Self {
        Decreasing::new(S::default())
    }
}

impl<S, F> Decreasing<S, F>
where
    S: OnlineStrategy,
    F: Fn(&usize, &usize) -> Ordering,
{
    /// Sorts with a custom comparison of item sizes.
    pub fn with_order(online: S, order: F) -> Self {
        Decreasing { online, order }
    }
}

impl<S, F> Strategy for Decreasing<S, F>
where
    S: OnlineStrategy,
    F: Fn(&usize, &usize) -> Ordering,
{
    fn pack_all(&self, instance: &Instance, items: &mut [impl Item]) -> Result<Packing, PackError> {
        // Validate in caller order so that reported indices are meaningful.
        instance.validate(&*items)?;
        items.sort_by(|a, b| (self.order)(&a.size(), &b.size()));
        self.online.pack(instance, &*items)
    }
}

/// Next-Fit on items sorted by descending size.
pub type NextFitDecreasing = Decreasing<NextFit>;

/// Best-Fit on items sorted by descending size.
pub type BestFitDecreasing = Decreasing<BestFit>;
