//! Edge-list generators for tests and benchmarks.
//!
//! All generators return 1-based `(u, v, w)` triples ready for
//! [`ShortestPathEngine::new`](crate::ShortestPathEngine::new).

use rand::prelude::*;

/// Generates a connected graph: a random spanning tree plus `extra_edges`
/// random edges. Weights are drawn from `0..=max_weight`.
pub fn generate_connected<R: Rng + ?Sized>(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Vec<(usize, usize, u32)> {
    assert!(n > 0, "n must be positive");

    let mut edges = Vec::with_capacity(n - 1 + extra_edges);

    // Attach every vertex to a random earlier one
    for v in 2..=n {
        let u = rng.gen_range(1..v);
        edges.push((u, v, rng.gen_range(0..=max_weight)));
    }

    edges.extend(generate_random(n, extra_edges, max_weight, rng));
    edges
}

/// Generates `m` uniformly random edges without self-loops. The result is
/// usually disconnected when `m` is small compared with `n`.
pub fn generate_random<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: u32,
    rng: &mut R,
) -> Vec<(usize, usize, u32)> {
    assert!(n > 0, "n must be positive");

    let mut edges = Vec::with_capacity(m);
    if n < 2 {
        return edges;
    }

    while edges.len() < m {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        // Avoid self-loops
        if u != v {
            edges.push((u, v, rng.gen_range(0..=max_weight)));
        }
    }
    edges
}

/// Generates a `width` x `height` 4-connected grid with unit weights.
/// Vertex `(x, y)` has id `y * width + x + 1`.
pub fn generate_grid(width: usize, height: usize) -> Vec<(usize, usize, u32)> {
    let id = |x: usize, y: usize| y * width + x + 1;

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((id(x, y), id(x + 1, y), 1));
            }
            if y + 1 < height {
                edges.push((id(x, y), id(x, y + 1), 1));
            }
        }
    }
    edges
}
