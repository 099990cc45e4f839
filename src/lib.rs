//! dary_sssp - Single-Source Shortest Paths with an Indexed d-ary Heap
//!
//! This library computes shortest-path distances from one source vertex to every
//! other vertex of a weighted, undirected graph with non-negative edge weights.
//!
//! The relaxation loop is driven by [`IndexedDaryHeap`], a d-ary min-heap that
//! keeps a reverse index from vertex identifiers to heap slots so that
//! decrease-key and membership tests need no search.
//!
//! ```
//! use dary_sssp::ShortestPathEngine;
//!
//! let edges = [(1, 2, 10), (1, 3, 3), (3, 2, 4), (2, 4, 2), (3, 4, 8), (4, 5, 1)];
//! let mut engine = ShortestPathEngine::new(5, &edges).unwrap();
//! let result = engine.run(1).unwrap();
//! assert_eq!(result.to_sentinel_vec(), vec![0, 7, 3, 9, 10]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{EngineConfig, EngineState, ShortestPathEngine, ShortestPathResult};
/// Re-export main types for convenient use
pub use data_structures::{HeapEntry, IndexedDaryHeap};
pub use graph::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Graph must have at least one vertex")]
    EmptyGraph,

    #[error("Negative edge weight on edge from {0} to {1}")]
    NegativeWeight(usize, usize),

    #[error("Invalid branching factor: {0}")]
    InvalidBranchingFactor(usize),

    #[error("Heap id {id} out of range 1..={capacity}")]
    IdOutOfRange { id: usize, capacity: usize },

    #[error("Heap is empty")]
    HeapEmpty,

    #[error("Heap already contains id {0}")]
    DuplicateId(usize),

    #[error("Heap does not contain id {0}")]
    MissingId(usize),

    #[error("New key for id {0} is greater than its current key")]
    KeyIncrease(usize),

    #[error("Distance to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: usize },

    #[error("Engine is in state {0:?}; call reset() before running again")]
    StaleState(EngineState),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
