//! Heap property maintenance on slices
//!
//! The heap is stored level by level: the children of position `p` are at
//! `2p + 1` and `2p + 2`, and every parent compares less or equal to its
//! children under the comparator.

use compare::Compare;

use crate::base::{left_child, parent, Position};

/// Moves the element at `position` towards the root while it is smaller
/// than its parent
pub fn percolate_up<T, C: Compare<T>>(data: &mut [T], mut position: Position, cmp: &C) {
    while position != 0 {
        let j = parent(position);
        if !cmp.compares_lt(&data[position], &data[j]) {
            break;
        }
        data.swap(position, j);
        position = j;
    }
}

/// Moves the element at `position` towards the leaves while it is larger
/// than one of its children
pub fn percolate_down<T, C: Compare<T>>(data: &mut [T], mut position: Position, cmp: &C) {
    let length = data.len();

    loop {
        let left = left_child(position);
        let right = left + 1;

        // Leaf
        if left >= length {
            return;
        }

        // A lone left child is the last element, hence a leaf
        if right == length {
            if cmp.compares_gt(&data[position], &data[left]) {
                data.swap(position, left);
            }
            return;
        }

        if !(cmp.compares_gt(&data[position], &data[left])
            || cmp.compares_gt(&data[position], &data[right]))
        {
            return;
        }

        // Ties go to the right child
        let child = if cmp.compares_lt(&data[left], &data[right]) {
            left
        } else {
            right
        };
        data.swap(position, child);
        position = child;
    }
}

/// Index of the last node having at least one child
#[inline]
pub fn last_non_leaf(length: usize) -> Option<Position> {
    (length / 2).checked_sub(1)
}

/// Bottom-up heap construction, O(n)
pub fn heapify<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    if let Some(start) = last_non_leaf(data.len()) {
        for position in (0..=start).rev() {
            percolate_down(data, position, cmp);
        }
    }
}

/// Checks that every parent is less or equal to its children
pub fn is_heap<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|position| cmp.compares_le(&data[parent(position)], &data[position]))
}
