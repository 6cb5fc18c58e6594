//! Growable, index addressable sequences used as heap storage

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    base::{Len, Position},
    error::SequenceError,
};

/// Default number of slots reserved by a new dynamic array
pub const DEFAULT_CAPACITY: usize = 4;

/// The operations a heap needs from its storage
pub trait Sequence<T>: Len {
    /// Adds an element after the last one
    fn append(&mut self, item: T);

    fn get(&self, index: Position) -> Result<&T, SequenceError>;

    fn set(&mut self, index: Position, item: T) -> Result<(), SequenceError>;

    /// Exchanges two elements; nothing moves if one index is invalid
    fn swap(&mut self, i: Position, j: Position) -> Result<(), SequenceError>;

    /// Removes and returns the last element
    fn pop_last(&mut self) -> Result<T, SequenceError>;
}

#[inline]
fn check_index(index: Position, length: usize) -> Result<(), SequenceError> {
    if index < length {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, length })
    }
}

/// A growable array with bounds-checked access
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Len for DynamicArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    #[inline]
    fn append(&mut self, item: T) {
        self.data.push(item);
    }

    fn get(&self, index: Position) -> Result<&T, SequenceError> {
        self.data
            .as_slice()
            .get(index)
            .ok_or_else(|| SequenceError::IndexOutOfRange {
                index,
                length: self.data.len(),
            })
    }

    fn set(&mut self, index: Position, item: T) -> Result<(), SequenceError> {
        check_index(index, self.data.len())?;
        self.data[index] = item;
        Ok(())
    }

    fn swap(&mut self, i: Position, j: Position) -> Result<(), SequenceError> {
        check_index(i, self.data.len())?;
        check_index(j, self.data.len())?;
        self.data.as_mut_slice().swap(i, j);
        Ok(())
    }

    fn pop_last(&mut self) -> Result<T, SequenceError> {
        self.data.pop().ok_or(SequenceError::EmptySequence)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: Vec::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (ix, item) in self.data.iter().enumerate() {
            if ix > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

// Plain vectors can be used as sources for heap construction

impl<T> Len for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn get(&self, index: Position) -> Result<&T, SequenceError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| SequenceError::IndexOutOfRange {
                index,
                length: Vec::len(self),
            })
    }

    fn set(&mut self, index: Position, item: T) -> Result<(), SequenceError> {
        check_index(index, Vec::len(self))?;
        self[index] = item;
        Ok(())
    }

    fn swap(&mut self, i: Position, j: Position) -> Result<(), SequenceError> {
        check_index(i, Vec::len(self))?;
        check_index(j, Vec::len(self))?;
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    fn pop_last(&mut self) -> Result<T, SequenceError> {
        self.pop().ok_or(SequenceError::EmptySequence)
    }
}
