pub mod generators;
pub mod traits;
pub mod undirected;

pub use traits::{Graph, Weight};
pub use undirected::UndirectedGraph;
