use std::time::{Duration, Instant};

use colored::Colorize;
use dary_sssp::graph::generators::generate_connected;
use dary_sssp::{EngineConfig, ShortestPathEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

/// One row of the summary table
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    branching_factor: usize,
    millis: f64,
    reachable: usize,
}

// Function to benchmark one branching factor on a graph
fn benchmark_engine(
    n: usize,
    edges: &[(usize, usize, u32)],
    d: usize,
    source: usize,
) -> Result<(Duration, usize), dary_sssp::Error> {
    let config = EngineConfig::default().with_branching_factor(d);
    let mut engine = ShortestPathEngine::with_config(n, edges, config)?;

    let start = Instant::now();
    let result = engine.run(source)?;
    Ok((start.elapsed(), result.reachable_count()))
}

// Runs independent engines for a sample of sources in parallel and checks that
// every branching factor agrees with the binary heap
fn cross_check(
    n: usize,
    edges: &[(usize, usize, u32)],
    factors: &[usize],
) -> Result<usize, dary_sssp::Error> {
    let sources: Vec<usize> = (1..=n).step_by((n / 16).max(1)).collect();

    let mismatches = sources
        .par_iter()
        .map(|&source| -> Result<usize, dary_sssp::Error> {
            let mut binary = ShortestPathEngine::new(n, edges)?;
            let expected = binary.run(source)?;

            let mut bad = 0;
            for &d in factors {
                let config = EngineConfig::default().with_branching_factor(d);
                let mut engine = ShortestPathEngine::with_config(n, edges, config)?;
                if engine.run(source)?.distances != expected.distances {
                    log::warn!("d = {} disagrees with d = 2 from source {}", d, source);
                    bad += 1;
                }
            }
            Ok(bad)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(mismatches.into_iter().sum())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];
    let factors = [2, 3, 4, 8, 16];

    // Edge factor: average number of extra edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("{}", "Benchmark: indexed d-ary heap Dijkstra".bold());
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(2024);
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating connected graph with {} vertices...", size);
        let edges = generate_connected(size, edge_factor * size, 100, &mut rng);
        let source = 1;

        for &d in &factors {
            let (elapsed, reachable) = benchmark_engine(size, &edges, d, source)?;
            println!("  - d = {:<2} settled {} vertices in {:?}", d, reachable, elapsed);
            rows.push(BenchmarkRow {
                vertices: size,
                edges: edges.len(),
                branching_factor: d,
                millis: elapsed.as_secs_f64() * 1000.0,
                reachable,
            });
        }

        let mismatches = cross_check(size, &edges, &factors)?;
        if mismatches == 0 {
            println!("  {}", "all branching factors agree".green());
        } else {
            println!("  {}", format!("{} mismatching runs", mismatches).red());
        }
    }

    // Print summary table
    println!("\n=====================================================");
    println!("{}", "Summary of Results".bold());
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<4} | {:<12}",
        "Vertices", "Edges", "d", "Time (ms)"
    );
    println!("-----------------------------------------------------");
    for row in &rows {
        println!(
            "{:<10} | {:<10} | {:<4} | {:<12.2}",
            row.vertices, row.edges, row.branching_factor, row.millis
        );
    }

    println!("\n{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
