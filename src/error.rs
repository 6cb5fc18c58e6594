//! Errors raised by sequences and heaps

use thiserror::Error;

use crate::base::Position;

/// Errors coming from the backing sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: Position, length: usize },

    #[error("cannot pop from an empty sequence")]
    EmptySequence,
}

/// Errors of the heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The minimum was requested on a heap without elements
    #[error("the heap is empty")]
    EmptyHeap,

    /// Propagated unchanged from the backing sequence
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
