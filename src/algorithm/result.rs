use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// Marker written for unreachable vertices by [`ShortestPathResult::to_sentinel_vec`]
pub const UNREACHABLE: i64 = -1;

/// Result of a shortest path computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// `distances[i]` is the distance from source to vertex `i + 1`,
    /// `None` if it cannot be reached
    pub distances: Vec<Option<W>>,

    /// Source vertex ID (1-based)
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to a 1-based vertex, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        vertex
            .checked_sub(1)
            .and_then(|i| self.distances.get(i).copied().flatten())
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

impl<W> ShortestPathResult<W>
where
    W: Weight + ToPrimitive,
{
    /// Flattens the distances into integers, using [`UNREACHABLE`] for
    /// vertices the source cannot reach.
    ///
    /// Distances beyond `i64::MAX` saturate at `i64::MAX`; float distances
    /// are truncated toward zero.
    pub fn to_sentinel_vec(&self) -> Vec<i64> {
        self.distances
            .iter()
            .map(|d| match d {
                Some(d) => d.to_i64().unwrap_or(i64::MAX),
                None => UNREACHABLE,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_one_based() {
        let result = ShortestPathResult {
            distances: vec![Some(0u32), None, Some(4)],
            source: 1,
        };
        assert_eq!(result.distance(1), Some(0));
        assert_eq!(result.distance(2), None);
        assert_eq!(result.distance(3), Some(4));
        assert_eq!(result.distance(0), None);
        assert_eq!(result.distance(4), None);
        assert_eq!(result.reachable_count(), 2);
        assert_eq!(result.to_sentinel_vec(), vec![0, -1, 4]);
    }

    #[test]
    fn wide_unsigned_weights_flatten() {
        let result = ShortestPathResult {
            distances: vec![Some(0u64), None, Some(u64::MAX)],
            source: 1,
        };
        assert_eq!(result.to_sentinel_vec(), vec![0, -1, i64::MAX]);

        let result = ShortestPathResult {
            distances: vec![None, Some(0usize), Some(12)],
            source: 2,
        };
        assert_eq!(result.to_sentinel_vec(), vec![-1, 0, 12]);
    }
}
