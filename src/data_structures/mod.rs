pub mod indexed_dary_heap;

pub use indexed_dary_heap::{HeapEntry, IndexedDaryHeap};
