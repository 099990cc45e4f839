pub mod engine;
pub mod result;

pub use engine::{EngineConfig, EngineState, ShortestPathEngine};
pub use result::{ShortestPathResult, UNREACHABLE};
