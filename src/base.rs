use crate::error::HeapError;

/// Index of an element within a sequence
pub type Position = usize;

pub type HeapResult<T> = Result<T, HeapError>;

/// Marks object that have a length
pub trait Len {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parent of a (non root) node in the implicit binary tree
#[inline]
pub fn parent(position: Position) -> Position {
    (position - 1) / 2
}

/// Left child of a node; the right child is the next position
#[inline]
pub fn left_child(position: Position) -> Position {
    2 * position + 1
}
