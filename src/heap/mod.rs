//! Binary min-heap over a dynamic array

pub mod percolate;

use std::fmt;

use compare::{natural, Compare, Natural, Rev};
use derivative::Derivative;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    base::{HeapResult, Len},
    error::HeapError,
    sequence::{DynamicArray, Sequence, DEFAULT_CAPACITY},
};

use self::percolate::{heapify, is_heap, last_non_leaf, percolate_down, percolate_up};

#[derive(Derivative, Clone, Debug)]
#[derivative(Default)]
pub struct MinHeapOptions {
    /// Number of slots reserved in the backing array
    #[derivative(Default(value = "DEFAULT_CAPACITY"))]
    pub initial_capacity: usize,
}

/// A binary min-heap
///
/// Elements are ordered by the comparator `C`, the natural order by default.
/// The heap occupies positions `[0, len)` of its backing array and every
/// parent compares less or equal to its children.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: fmt::Debug"), Clone(bound = "T: Clone, C: Clone"))]
pub struct MinHeap<T, C = Natural<T>> {
    heap: DynamicArray<T>,
    #[derivative(Debug = "ignore")]
    cmp: C,
}

/// A heap whose root is the largest element
pub type MaxHeap<T> = MinHeap<T, Rev<Natural<T>>>;

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `Ord`
    pub fn new() -> Self {
        Self::with_options(MinHeapOptions::default())
    }

    pub fn with_options(options: MinHeapOptions) -> Self {
        Self::with_options_and_comparator(options, natural())
    }

    /// Creates a heap and adds the items one at a time, in iteration order
    pub fn with_initial<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut heap = Self::new();
        heap.extend(items);
        heap
    }
}

impl<T: Ord> MinHeap<T, Rev<Natural<T>>> {
    pub fn new_max() -> MaxHeap<T> {
        MinHeap::with_comparator(natural().rev())
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_options_and_comparator(MinHeapOptions::default(), cmp)
    }

    pub fn with_options_and_comparator(options: MinHeapOptions, cmp: C) -> Self {
        Self {
            heap: DynamicArray::with_capacity(options.initial_capacity),
            cmp,
        }
    }

    /// Takes ownership of the array and heapifies it in place
    fn from_array(mut heap: DynamicArray<T>, cmp: C) -> Self {
        debug!(
            "Heapifying {} elements (last non-leaf {:?})",
            heap.len(),
            last_non_leaf(heap.len())
        );
        heapify(heap.as_mut_slice(), &cmp);
        Self { heap, cmp }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.len() == 0
    }

    /// Adds an element and moves it up to its place
    pub fn add(&mut self, item: T) {
        let position = self.heap.len();
        self.heap.append(item);
        percolate_up(self.heap.as_mut_slice(), position, &self.cmp);
    }

    /// Returns the minimum without removing it
    pub fn get_min(&self) -> HeapResult<&T> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        Ok(self.heap.get(0)?)
    }

    /// Removes and returns the minimum
    pub fn remove_min(&mut self) -> HeapResult<T> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last)?;
        let min = self.heap.pop_last()?;

        percolate_down(self.heap.as_mut_slice(), 0, &self.cmp);
        Ok(min)
    }

    /// Replaces the content of the heap by a copy of `source`
    ///
    /// The heap keeps its own storage: later changes to `source` do not
    /// affect it.
    pub fn build_heap<S>(&mut self, source: &S) -> HeapResult<()>
    where
        S: Sequence<T> + ?Sized,
        T: Clone,
    {
        let mut heap = DynamicArray::with_capacity(source.len());
        for ix in 0..source.len() {
            heap.append(source.get(ix)?.clone());
        }

        debug!(
            "Building heap from {} elements (last non-leaf {:?})",
            heap.len(),
            last_non_leaf(heap.len())
        );
        heapify(heap.as_mut_slice(), &self.cmp);
        self.heap = heap;
        Ok(())
    }

    /// Checks the heap property over the whole backing array
    pub fn is_valid(&self) -> bool {
        is_heap(self.heap.as_slice(), &self.cmp)
    }

    /// The elements in heap order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Removes every element, smallest first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(min) = self.remove_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T, C> Len for MinHeap<T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_array(DynamicArray::from(items), natural())
    }
}

// NOTE: items are added one by one, as when creating a heap with initial values
impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

impl<'a, T, C> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

impl<T: fmt::Display, C> fmt::Display for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HEAP {}", self.heap)
    }
}

impl<T: Serialize, C> Serialize for MinHeap<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.heap.serialize(serializer)
    }
}

/// Deserialized lists are heapified, whatever their order
impl<'de, T, C> Deserialize<'de> for MinHeap<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let heap = DynamicArray::<T>::deserialize(deserializer)?;
        Ok(Self::from_array(heap, C::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_heap() {
        let mut heap = MinHeap::<u32>::new();
        assert!(heap.is_empty());
        assert_eq!(heap.get_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.remove_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_add_descending() {
        let mut heap = MinHeap::new();
        for value in (201..=300).rev().step_by(15) {
            heap.add(value);
            assert_eq!(heap.get_min(), Ok(&value));
        }
        assert_eq!(heap.as_slice(), &[210, 255, 225, 300, 270, 285, 240]);
    }

    #[test]
    fn test_initial_values() {
        let mut heap = MinHeap::with_initial(["fish", "bird"]);
        assert_eq!(heap.as_slice(), &["bird", "fish"]);

        for value in ["monkey", "zebra", "elephant", "horse", "bear"] {
            heap.add(value);
        }
        assert_eq!(
            heap.as_slice(),
            &["bear", "elephant", "bird", "zebra", "fish", "monkey", "horse"]
        );
    }

    #[test]
    fn test_get_min_twice() {
        let heap = MinHeap::with_initial(["fish", "bird"]);
        assert_eq!(heap.get_min(), Ok(&"bird"));
        assert_eq!(heap.get_min(), Ok(&"bird"));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_remove_min_single() {
        let mut heap = MinHeap::with_initial([7]);
        assert_eq!(heap.remove_min(), Ok(7));
        assert!(heap.is_empty());
        assert_eq!(heap.remove_min(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn test_capacity_option() {
        let heap = MinHeap::<u64>::with_options(MinHeapOptions {
            initial_capacity: 100,
        });
        assert!(heap.heap.capacity() >= 100);
        assert_eq!(MinHeapOptions::default().initial_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_max_heap() {
        let mut heap = MaxHeap::new_max();
        heap.extend([3, 9, 1, 7]);
        assert_eq!(heap.get_min(), Ok(&9));
        assert!(heap.is_valid());
        assert_eq!(heap.into_sorted_vec(), vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_arrangement_accessors() {
        let heap = MinHeap::with_initial([1, 10, 2, 9, 3]);
        let arrangement = vec![1, 3, 2, 10, 9];

        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), arrangement);

        let mut borrowed = Vec::new();
        for value in &heap {
            borrowed.push(*value);
        }
        assert_eq!(borrowed, arrangement);

        assert_eq!(heap.into_vec(), arrangement);
    }

    #[test]
    fn test_display() {
        let heap = MinHeap::with_initial([3, 1, 2]);
        assert_eq!(heap.to_string(), "HEAP [1, 3, 2]");
        assert_eq!(MinHeap::<i8>::new().to_string(), "HEAP []");
    }
}
