//! Record reuse across searches.

use navgraph_core::{AdjacencyGraph, ZeroHeuristic};
use navgraph_search::{astar_cost, IndexedAStarPathFinder, SearchConfig};

use crate::common::fixtures::{manhattan, random_graph, random_queries, weighted_grid, SEED};

#[test]
fn test_warm_finder_matches_fresh_finder() {
    let graph = random_graph(SEED, 200, 3, 8.0);
    let queries = random_queries(SEED + 1, 200, 150);
    let mut warm = IndexedAStarPathFinder::new(&graph);

    for (start, goal) in queries {
        let mut fresh = IndexedAStarPathFinder::new(&graph);
        assert_eq!(
            warm.find_path(&start, &goal, &ZeroHeuristic),
            fresh.find_path(&start, &goal, &ZeroHeuristic),
            "{start} -> {goal}"
        );
    }
}

#[test]
fn test_reuse_after_failed_and_rejected_searches() {
    let mut builder = AdjacencyGraph::builder(4);
    builder.connect(0, 1, 2.0).connect(1, 2, 2.0);
    let graph = builder.build().expect("build failed");
    let mut finder = IndexedAStarPathFinder::new(&graph);

    assert!(!finder.find_path(&0, &3, &ZeroHeuristic).path_found);
    assert!(!finder.find_path(&0, &40, &ZeroHeuristic).path_found);
    let result = finder.find_path(&0, &2, &ZeroHeuristic);
    assert_eq!(result.path, vec![0, 1, 2]);
    assert_eq!(result.total_cost, 4.0);
}

#[test]
fn test_reuse_after_expansion_limit() {
    let mut builder = AdjacencyGraph::builder(10);
    for node in 0..9 {
        builder.connect(node, node + 1, 1.5);
    }
    let graph = builder.build().expect("build failed");
    let mut finder =
        IndexedAStarPathFinder::with_config(&graph, SearchConfig::default().max_expansions(3)).expect("config");

    assert!(!finder.find_path(&0, &9, &ZeroHeuristic).path_found);

    // The aborted search leaves stale open entries and records behind
    let result = finder.find_path(&5, &8, &ZeroHeuristic);
    assert_eq!(result.path, vec![5, 6, 7, 8]);
    assert_eq!(result.total_cost, 4.5);
    assert_eq!(astar_cost(&graph, &5, &8, &ZeroHeuristic).expect("valid"), Some(4.5));
}

#[test]
fn test_generation_advances_per_search() {
    let graph = random_graph(SEED, 20, 2, 4.0);
    let mut finder = IndexedAStarPathFinder::new(&graph);
    for (round, (start, goal)) in random_queries(SEED, 20, 25).into_iter().enumerate() {
        finder.find_path(&start, &goal, &ZeroHeuristic);
        assert_eq!(finder.search_generation(), round as u32 + 1);
    }
}

#[test]
fn test_alternating_heuristics_on_one_finder() {
    let width = 15;
    let graph = weighted_grid(SEED + 3, width, width);
    let queries = random_queries(SEED + 3, width * width, 40);
    let mut finder = IndexedAStarPathFinder::new(&graph);
    let guide = manhattan(width);

    for (start, goal) in queries {
        let blind = finder.find_path(&start, &goal, &ZeroHeuristic);
        let guided = finder.find_path(&start, &goal, &guide);
        assert_eq!(blind.path_found, guided.path_found);
        assert!((blind.total_cost - guided.total_cost).abs() < 1e-3, "{start} -> {goal}");
    }
}
