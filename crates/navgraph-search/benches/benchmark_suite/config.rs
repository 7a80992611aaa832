//! Benchmark configuration constants.

#![allow(dead_code)]

/// Seed shared by every generator
pub const SEED: u64 = 42;

/// Node counts for random-graph benchmarks
pub const GRAPH_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Average out-degree of random graphs
pub const AVG_DEGREE: usize = 4;

/// Grid widths for grid benchmarks (square grids)
pub const GRID_WIDTHS: &[usize] = &[32, 128, 256];

/// Queries issued per benchmark iteration
pub const QUERIES_PER_ITER: usize = 16;

/// Entries pushed through the open list per iteration
pub const OPEN_LIST_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Install a `RUST_LOG`-driven subscriber once per process.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call from another bench group finds the subscriber already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
