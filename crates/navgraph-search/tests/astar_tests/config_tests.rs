//! Finders configured from JSON.

use std::io::Write;

use navgraph_core::{GraphError, ZeroHeuristic};
use navgraph_search::{IndexedAStarPathFinder, SearchConfig};
use tempfile::NamedTempFile;

use crate::common::fixtures::{random_graph, SEED};

#[test]
fn test_finder_from_config_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"collect_metrics": true, "open_list_capacity": 8}}"#).expect("write config");

    let config = SearchConfig::from_json_file(file.path()).expect("load config");
    let graph = random_graph(SEED, 50, 3, 5.0);
    let mut finder = IndexedAStarPathFinder::with_config(&graph, config).expect("valid config");

    finder.find_path(&0, &49, &ZeroHeuristic);
    let metrics = finder.metrics().copied().expect("metrics enabled by file");
    assert!(metrics.open_list_additions() >= 1);
    assert!(metrics.open_list_peak() >= 1);
}

#[test]
fn test_zero_expansion_cap_rejected() {
    assert!(matches!(
        SearchConfig::from_json_str(r#"{"max_expansions": 0}"#),
        Err(GraphError::InvalidConfig(_))
    ));

    let graph = random_graph(SEED, 5, 1, 1.0);
    let config = SearchConfig {
        max_expansions: Some(0),
        ..SearchConfig::default()
    };
    assert!(matches!(
        IndexedAStarPathFinder::with_config(&graph, config),
        Err(GraphError::InvalidConfig(_))
    ));
}
