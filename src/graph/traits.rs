use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Edge weight and distance type.
///
/// Distances are sums of weights, so the type must be totally ordered and have
/// an additive identity. Integers qualify directly; floats do through
/// `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two distances, `None` when it is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            // Overflow shows up as a non-finite sum
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    sum.is_finite().then_some(OrderedFloat(sum))
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a weighted undirected graph with 1-based vertex ids
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(neighbor, weight)` pairs of a vertex
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Gets the lightest weight among edges joining the two vertices
    fn get_edge_weight(&self, a: usize, b: usize) -> Option<W>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sums_detect_overflow() {
        assert_eq!(3u32.checked_sum(4), Some(7));
        assert_eq!(u32::MAX.checked_sum(1), None);
        assert_eq!(i64::MAX.checked_sum(0), Some(i64::MAX));
    }

    #[test]
    fn float_sums_detect_overflow() {
        assert_eq!(OrderedFloat(1.5f64).checked_sum(OrderedFloat(0.25)), Some(OrderedFloat(1.75)));
        assert_eq!(OrderedFloat(f64::MAX).checked_sum(OrderedFloat(f64::MAX)), None);
        assert_eq!(OrderedFloat(f32::MAX).checked_sum(OrderedFloat(f32::MAX)), None);
    }
}
