//! Error types for positional operations.

use thiserror::Error;

/// Index falls outside the valid range for the requested operation.
///
/// `insert` accepts `0..=len`; `erase`, `at` and `at_mut` accept `0..len`.
/// The container is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Length of the container at the time of the call.
    pub len: usize,
}

impl OutOfRange {
    /// Validates an insertion position, which may equal `len`.
    #[inline]
    pub(crate) fn check_insert(index: usize, len: usize) -> Result<(), Self> {
        if index > len {
            return Err(Self::rejected(index, len));
        }
        Ok(())
    }

    /// Validates a position that must name an existing element.
    #[inline]
    pub(crate) fn check_element(index: usize, len: usize) -> Result<(), Self> {
        if index >= len {
            return Err(Self::rejected(index, len));
        }
        Ok(())
    }

    #[cold]
    fn rejected(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "index out of range");
        Self { index, len }
    }
}
