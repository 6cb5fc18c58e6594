use compare::Compare;
use log::debug;

use min_heap::{Len, MinHeap};

use crate::values::{create_rng, random_values};

/// A heap filled with random values together with its sorted content
pub struct TestHeap {
    pub heap: MinHeap<i64>,
    pub values: Vec<i64>,
    pub sorted: Vec<i64>,
}

impl TestHeap {
    pub fn new(count: usize, max_value: i64, seed: Option<u64>) -> Self {
        let mut rng = create_rng(seed);
        let values = random_values(count, max_value, &mut rng);
        debug!("Created {} random values", values.len());

        let heap = MinHeap::with_initial(values.iter().copied());

        let mut sorted = values.clone();
        sorted.sort();

        Self {
            heap,
            values,
            sorted,
        }
    }
}

/// Asserts that every parent is less or equal to its children
pub fn check_heap_property<T, C>(heap: &MinHeap<T, C>)
where
    T: std::fmt::Debug,
    C: Compare<T>,
{
    let data = heap.as_slice();
    for parent in 0..data.len() {
        for child in [2 * parent + 1, 2 * parent + 2] {
            if child < data.len() {
                assert!(
                    heap.comparator().compares_le(&data[parent], &data[child]),
                    "Heap property broken between {} ({:?}) and {} ({:?})",
                    parent,
                    data[parent],
                    child,
                    data[child]
                );
            }
        }
    }
    assert!(heap.is_valid());
}

/// Removes everything from the heap, checking the heap property at each step
pub fn drain_checked<T, C>(heap: &mut MinHeap<T, C>) -> Vec<T>
where
    T: std::fmt::Debug,
    C: Compare<T>,
{
    let mut extracted = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        let expected_len = heap.len() - 1;
        let min = heap.remove_min().expect("the heap is not empty");
        assert_eq!(heap.len(), expected_len);
        check_heap_property(heap);
        extracted.push(min);
    }
    extracted
}
