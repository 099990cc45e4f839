use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::ShortestPathResult;
use crate::data_structures::{HeapEntry, IndexedDaryHeap};
use crate::graph::{Graph, UndirectedGraph, Weight};
use crate::{Error, Result};

/// Tuning knobs for [`ShortestPathEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of children per heap node
    pub branching_factor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { branching_factor: 2 }
    }
}

impl EngineConfig {
    /// Set the branching factor of the engine's heap
    pub fn with_branching_factor(mut self, d: usize) -> Self {
        self.branching_factor = d;
        self
    }
}

/// Lifecycle of a [`ShortestPathEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Adjacency built, per-run state clean
    Built,
    /// Relaxation loop in progress
    Running,
    /// A run finished; per-run state must be reset before the next one
    Done,
}

/// Dijkstra's algorithm over an undirected graph, driven by an indexed d-ary heap.
///
/// The adjacency lists are built once at construction. Each [`run`] consumes the
/// per-run state (heap, explored flags, tentative distances); a second run needs
/// [`reset`] first, or a fresh engine.
///
/// Edge weights must be non-negative (checked at construction). A distance sum
/// that does not fit in `W` stops the run with [`Error::DistanceOverflow`].
///
/// [`run`]: ShortestPathEngine::run
/// [`reset`]: ShortestPathEngine::reset
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W>
where
    W: Weight,
{
    config: EngineConfig,
    state: EngineState,
    graph: UndirectedGraph<W>,
    heap: IndexedDaryHeap<W>,
    /// Settled flags, 0-based
    explored: Vec<bool>,
    /// Tentative distances, 0-based; `None` is infinity
    distances: Vec<Option<W>>,
}

impl<W> ShortestPathEngine<W>
where
    W: Weight,
{
    /// Creates an engine with the default configuration (binary heap)
    pub fn new(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        Self::with_config(vertex_count, edges, EngineConfig::default())
    }

    /// Creates an engine for vertices `1..=vertex_count` and `(u, v, w)` edges
    pub fn with_config(
        vertex_count: usize,
        edges: &[(usize, usize, W)],
        config: EngineConfig,
    ) -> Result<Self> {
        let graph = UndirectedGraph::from_edges(vertex_count, edges)?;
        let heap = IndexedDaryHeap::new(vertex_count, config.branching_factor)?;

        Ok(ShortestPathEngine {
            config,
            state: EngineState::Built,
            graph,
            heap,
            explored: vec![false; vertex_count],
            distances: vec![None; vertex_count],
        })
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Adjacency built at construction
    pub fn graph(&self) -> &UndirectedGraph<W> {
        &self.graph
    }

    /// Clears per-run state so the engine can run again
    pub fn reset(&mut self) {
        self.heap.clear();
        self.explored.fill(false);
        self.distances.fill(None);
        self.state = EngineState::Built;
    }

    /// Computes distances from `source` to every vertex
    pub fn run(&mut self, source: usize) -> Result<ShortestPathResult<W>> {
        self.relax_from(source, None)?;

        Ok(ShortestPathResult {
            distances: self.distances.clone(),
            source,
        })
    }

    /// Computes the distance from `source` to `target`, stopping as soon as
    /// `target` is settled. Returns `None` if `target` is unreachable.
    pub fn distance_to(&mut self, source: usize, target: usize) -> Result<Option<W>> {
        if !self.graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        self.relax_from(source, Some(target))?;
        Ok(self.distances[target - 1])
    }

    fn relax_from(&mut self, source: usize, target: Option<usize>) -> Result<()> {
        if self.state != EngineState::Built {
            return Err(Error::StaleState(self.state));
        }
        if !self.graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        self.state = EngineState::Running;
        let outcome = self.settle_all(source, target);
        self.state = EngineState::Done;
        outcome
    }

    fn settle_all(&mut self, source: usize, target: Option<usize>) -> Result<()> {
        debug!(
            "starting run from vertex {} (d = {}, {} vertices)",
            source,
            self.heap.branching_factor(),
            self.graph.vertex_count()
        );

        self.distances[source - 1] = Some(W::zero());
        self.heap.insert(source, W::zero())?;

        let mut settled = 0;
        while !self.heap.is_empty() {
            let HeapEntry { id: u, key: dist_u } = self.heap.extract_min()?;
            self.explored[u - 1] = true;
            settled += 1;
            trace!("settled vertex {} at distance {:?}", u, dist_u);

            if target == Some(u) {
                break;
            }

            for (v, weight) in self.graph.neighbors(u) {
                if self.explored[v - 1] {
                    continue;
                }

                let candidate = dist_u
                    .checked_sum(weight)
                    .ok_or(Error::DistanceOverflow { vertex: v })?;
                let improves = match self.distances[v - 1] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    self.distances[v - 1] = Some(candidate);
                    if self.heap.contains(v)? {
                        self.heap.decrease_key(v, candidate)?;
                    } else {
                        self.heap.insert(v, candidate)?;
                    }
                }
            }
        }

        debug!("run from vertex {} settled {} vertices", source, settled);
        Ok(())
    }
}
