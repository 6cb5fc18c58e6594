//! A binary min-heap stored in a growable array
//!
//! ```rust
//! use min_heap::{DynamicArray, MinHeap};
//!
//! let mut heap = MinHeap::with_initial([1, 10, 2, 9, 3]);
//! assert_eq!(heap.remove_min(), Ok(1));
//!
//! heap.build_heap(&DynamicArray::from(vec![100, 20, 6]))
//!     .expect("a dynamic array is a valid source");
//! assert_eq!(heap.get_min(), Ok(&6));
//! ```

pub mod base;
pub mod error;
pub mod heap;
pub mod sequence;

pub use base::Len;
pub use error::{HeapError, SequenceError};
pub use heap::{MaxHeap, MinHeap, MinHeapOptions};
pub use sequence::{DynamicArray, Sequence};
