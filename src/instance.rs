//! Problem instance parameters.

use crate::{Item, PackError};

/// Parameters shared by every item of one packing call.
///
/// The number of items is the length of the slice passed alongside the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
    /// Capacity `K` of every bin.
    pub capacity: usize,
    /// Lower bound on every item size, used to retire bins early.
    pub min_size: usize,
}

impl Instance {
    /// Creates an instance with the most conservative `min_size` of 1.
    pub fn new(capacity: usize) -> Self {
        Instance {
            capacity,
            min_size: 1,
        }
    }

    /// Creates an instance whose `min_size` is the smallest of the given items.
    pub fn for_items(capacity: usize, items: &[impl Item]) -> Self {
        let min_size = items.iter().map(Item::size).min().unwrap_or(1);
        Instance { capacity, min_size }
    }

    pub fn with_min_size(self, min_size: usize) -> Self {
        Instance { min_size, ..self }
    }

    /// Checks the capacity and the items before any bin is opened.
    ///
    /// `min_size` is not checked here, since only bin retirement relies on it. Strategies that
    /// retire bins call [`Instance::validate_min_size`] as well.
    pub fn validate(&self, items: &[impl Item]) -> Result<(), PackError> {
        if self.capacity == 0 {
            return Err(PackError::InvalidCapacity);
        }
        for (index, item) in items.iter().enumerate() {
            let size = item.size();
            if size == 0 || size > self.capacity {
                return Err(PackError::InvalidItemSize {
                    index,
                    size,
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }

    /// Checks that `min_size` is a lower bound on every item size.
    pub fn validate_min_size(&self, items: &[impl Item]) -> Result<(), PackError> {
        let smallest = items
            .iter()
            .map(Item::size)
            .min()
            .unwrap_or(self.capacity);
        if self.min_size == 0 || self.min_size > smallest {
            return Err(PackError::InvalidMinSize {
                min_size: self.min_size,
                smallest,
            });
        }
        Ok(())
    }

    /// Fewest bins any packing of `items` can use, `ceil(sum / K)`.
    pub fn lower_bound(&self, items: &[impl Item]) -> usize {
        let total: u128 = items.iter().map(|item| item.size() as u128).sum();
        total.div_ceil(self.capacity.max(1) as u128) as usize
    }

    /// Used capacity above which no further item can fit into a bin.
    pub fn retire_above(&self) -> usize {
        self.capacity.saturating_sub(self.min_size)
    }
}
