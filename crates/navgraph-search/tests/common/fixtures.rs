//! Deterministic graph fixtures.
//!
//! Random graphs are generated from a seeded `ChaCha8Rng`, so every run sees
//! the same topology and costs.

#![allow(dead_code)]

use navgraph_core::{AdjacencyGraph, Connection, Graph, IndexedGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const SEED: u64 = 42;

/// Road between two lettered junctions.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub from: char,
    pub to: char,
    pub length: f32,
}

impl Connection<char> for Road {
    fn cost(&self) -> f32 {
        self.length
    }

    fn from_node(&self) -> &char {
        &self.from
    }

    fn to_node(&self) -> &char {
        &self.to
    }
}

/// Graph whose nodes are the letters `'A'..`, indexed by offset from `'A'`.
#[derive(Debug, Clone)]
pub struct LetterGraph {
    roads: Vec<Vec<Road>>,
}

impl LetterGraph {
    pub fn new(junctions: usize) -> Self {
        Self {
            roads: vec![Vec::new(); junctions],
        }
    }

    pub fn road(mut self, from: char, to: char, length: f32) -> Self {
        let slot = (from as usize) - ('A' as usize);
        self.roads[slot].push(Road { from, to, length });
        self
    }
}

impl Graph for LetterGraph {
    type Node = char;
    type Connection = Road;

    fn connections(&self, node: &char) -> &[Road] {
        self.roads
            .get(self.index(node))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl IndexedGraph for LetterGraph {
    fn index(&self, node: &char) -> usize {
        (*node as usize).wrapping_sub('A' as usize)
    }

    fn node_count(&self) -> usize {
        self.roads.len()
    }
}

/// A->B(1), A->C(4), B->C(1), B->D(5), C->D(1); E is isolated.
pub fn letter_scenario() -> LetterGraph {
    LetterGraph::new(5)
        .road('A', 'B', 1.0)
        .road('A', 'C', 4.0)
        .road('B', 'C', 1.0)
        .road('B', 'D', 5.0)
        .road('C', 'D', 1.0)
}

/// Directed graph with `node_count` nodes and about `node_count * degree`
/// random connections, costs in `[0, max_cost)`.
pub fn random_graph(seed: u64, node_count: usize, degree: usize, max_cost: f32) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = AdjacencyGraph::builder(node_count);
    for from in 0..node_count {
        for _ in 0..degree {
            let to = rng.gen_range(0..node_count);
            let cost = rng.gen_range(0.0..max_cost);
            builder.connect(from, to, cost);
        }
    }
    builder.build().expect("random graph is valid")
}

/// Random graph whose connections only go from lower to higher indices.
pub fn random_dag(seed: u64, node_count: usize, degree: usize) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = AdjacencyGraph::builder(node_count);
    for from in 0..node_count.saturating_sub(1) {
        for _ in 0..degree {
            let to = rng.gen_range(from + 1..node_count);
            let cost = rng.gen_range(1.0..10.0);
            builder.connect(from, to, cost);
        }
    }
    builder.build().expect("random DAG is valid")
}

/// Random `(start, goal)` pairs over `node_count` nodes.
pub fn random_queries(seed: u64, node_count: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

/// Grid with random per-cell entry costs in `[1, 5)`, plus its width.
///
/// Every cost is at least 1, so Manhattan distance stays admissible.
pub fn weighted_grid(seed: u64, width: usize, height: usize) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let entry_costs: Vec<f32> = (0..width * height).map(|_| rng.gen_range(1.0..5.0)).collect();
    let mut builder = AdjacencyGraph::builder(width * height);
    for y in 0..height {
        for x in 0..width {
            let here = y * width + x;
            if x + 1 < width {
                builder.connect(here, here + 1, entry_costs[here + 1]);
                builder.connect(here + 1, here, entry_costs[here]);
            }
            if y + 1 < height {
                builder.connect(here, here + width, entry_costs[here + width]);
                builder.connect(here + width, here, entry_costs[here]);
            }
        }
    }
    builder.build().expect("weighted grid is valid")
}

/// Manhattan distance between two cells of a grid `width` cells wide.
pub fn manhattan(width: usize) -> impl Fn(&usize, &usize) -> f32 {
    move |a: &usize, b: &usize| {
        let dx = (a % width).abs_diff(b % width);
        let dy = (a / width).abs_diff(b / width);
        (dx + dy) as f32
    }
}
