//! Errors reported by the packing strategies.

use std::collections::TryReserveError;

use thiserror::Error;

/// Everything that can make a packing call fail.
///
/// Input errors are detected before any bin is opened, so a failed call never leaves a partial
/// result behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("bin capacity must be positive")]
    InvalidCapacity,
    #[error("item {index} has size {size}, expected 1..={capacity}")]
    InvalidItemSize {
        index: usize,
        size: usize,
        capacity: usize,
    },
    #[error("min_size {min_size} is not in 1..={smallest} (smallest item)")]
    InvalidMinSize { min_size: usize, smallest: usize },
    #[error("could not allocate {what} for {len} entries")]
    AllocationFailure { what: &'static str, len: usize },
    #[error("item {index} is not assigned to a valid bin")]
    InvalidAssignment { index: usize },
    /// A bin would end up above capacity. This is a bug in a strategy, never a user error.
    #[error("bin {bin} would hold {used}, exceeding capacity {capacity}")]
    InvariantViolation {
        bin: usize,
        used: usize,
        capacity: usize,
    },
}

/// Allocates an empty vector with room for exactly `len` elements.
pub(crate) fn try_vec<T>(what: &'static str, len: usize) -> Result<Vec<T>, PackError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_: TryReserveError| PackError::AllocationFailure { what, len })?;
    Ok(vec)
}
