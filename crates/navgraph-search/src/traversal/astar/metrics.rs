//! Optional search instrumentation.

use serde::Serialize;

/// Counters describing the cost of the most recent search.
///
/// Collected only when [`SearchConfig::collect_metrics`](crate::config::SearchConfig)
/// is set, and zeroed at the start of every search. Purely observational:
/// the search outcome is identical with or without them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    visited_nodes: usize,
    open_list_additions: usize,
    open_list_peak: usize,
}

impl Metrics {
    /// Edge relaxations attempted (one per outgoing connection examined).
    #[inline]
    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    /// Insertions into the open list, including re-insertions and the start node.
    #[inline]
    pub fn open_list_additions(&self) -> usize {
        self.open_list_additions
    }

    /// Largest open-list size observed.
    #[inline]
    pub fn open_list_peak(&self) -> usize {
        self.open_list_peak
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub(crate) fn record_visit(&mut self) {
        self.visited_nodes += 1;
    }

    #[inline]
    pub(crate) fn record_addition(&mut self, open_list_len: usize) {
        self.open_list_additions += 1;
        self.open_list_peak = self.open_list_peak.max(open_list_len);
    }
}
