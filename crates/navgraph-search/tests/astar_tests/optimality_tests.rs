//! Optimality against a reference Dijkstra solver.

use navgraph_core::{AdjacencyGraph, Connection, DefaultConnection, Heuristic, IndexedGraph, ZeroHeuristic};
use navgraph_search::{IndexedAStarPathFinder, SearchConfig};

use crate::common::fixtures::{manhattan, random_dag, random_graph, random_queries, weighted_grid, SEED};
use crate::common::helpers::{assert_connected_path, dijkstra_costs, COST_EPSILON};

fn all_nodes(graph: &AdjacencyGraph) -> Vec<usize> {
    (0..graph.node_count()).collect()
}

fn check_against_dijkstra<H>(graph: &AdjacencyGraph, queries: &[(usize, usize)], heuristic: &H)
where
    H: Heuristic<usize>,
{
    let nodes = all_nodes(graph);
    let mut finder = IndexedAStarPathFinder::new(graph);

    for &(start, goal) in queries {
        let expected = dijkstra_costs(graph, &nodes, start)[goal];
        let mut path: Vec<&DefaultConnection> = Vec::new();
        let found = finder.search_connection_path(&start, &goal, heuristic, &mut path);

        match expected {
            None => assert!(!found, "{start} -> {goal} should be unreachable"),
            Some(cost) => {
                assert!(found, "{start} -> {goal} should be reachable");
                assert_connected_path(&path, &start, &goal);
                let total: f32 = path.iter().map(|c| c.cost()).sum();
                assert!(
                    (total - cost).abs() < COST_EPSILON,
                    "{start} -> {goal}: A* cost {total} vs Dijkstra {cost}"
                );
            }
        }
    }
}

#[test]
fn test_optimal_on_random_graphs() {
    for (offset, degree) in [(0, 1), (1, 2), (2, 4)] {
        let graph = random_graph(SEED + offset, 120, degree, 10.0);
        let queries = random_queries(SEED + offset, 120, 60);
        check_against_dijkstra(&graph, &queries, &ZeroHeuristic);
    }
}

#[test]
fn test_optimal_on_random_dag() {
    let graph = random_dag(SEED, 80, 3);
    let queries = random_queries(SEED, 80, 80);
    check_against_dijkstra(&graph, &queries, &ZeroHeuristic);
}

#[test]
fn test_optimal_on_weighted_grid_with_manhattan() {
    let width = 12;
    let graph = weighted_grid(SEED, width, width);
    let queries = random_queries(SEED, width * width, 50);
    check_against_dijkstra(&graph, &queries, &manhattan(width));
}

#[test]
fn test_zero_cost_connections() {
    let graph = random_graph(SEED, 60, 3, 0.5);
    let mut builder = AdjacencyGraph::builder(graph.node_count());
    for connection in graph.iter_connections() {
        // Every third connection is free
        let cost = if connection.to % 3 == 0 { 0.0 } else { connection.cost };
        builder.connect(connection.from, connection.to, cost);
    }
    let graph = builder.build().expect("build failed");
    let queries = random_queries(SEED + 7, 60, 40);
    check_against_dijkstra(&graph, &queries, &ZeroHeuristic);
}

#[test]
fn test_heuristic_reduces_work() {
    let width = 30;
    let graph = weighted_grid(SEED, width, width);
    let goal = width * width - 1;

    let mut blind = IndexedAStarPathFinder::with_config(&graph, SearchConfig::with_metrics()).expect("config");
    let mut guided = IndexedAStarPathFinder::with_config(&graph, SearchConfig::with_metrics()).expect("config");

    let blind_result = blind.find_path(&0, &goal, &ZeroHeuristic);
    let guided_result = guided.find_path(&0, &goal, &manhattan(width));
    assert!((blind_result.total_cost - guided_result.total_cost).abs() < COST_EPSILON);

    let blind_visits = blind.metrics().map(|m| m.visited_nodes()).unwrap_or_default();
    let guided_visits = guided.metrics().map(|m| m.visited_nodes()).unwrap_or_default();
    assert!(guided_visits <= blind_visits, "{guided_visits} > {blind_visits}");
}
