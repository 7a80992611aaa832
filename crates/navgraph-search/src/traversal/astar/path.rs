//! Path reconstruction.
//!
//! Both variants walk the incoming-connection chain backward from the goal
//! record, pushing into the caller's path, then reverse it. The walk is
//! bounded by the node count so a graph that breaks the non-negative cost
//! contract cannot trap it in a cycle.

use navgraph_core::{Connection, GraphPath, IndexedGraph};

use super::algorithm::IndexedAStarPathFinder;

impl<'g, G: IndexedGraph> IndexedAStarPathFinder<'g, G> {
    /// Fill `out_path` with the connections from start to goal.
    pub(super) fn generate_connection_path<P>(&self, start_index: usize, goal_index: usize, out_path: &mut P)
    where
        P: GraphPath<&'g G::Connection>,
    {
        out_path.clear();
        let mut index = goal_index;
        for _ in 0..self.records.len() {
            if index == start_index {
                break;
            }
            let Some(connection) = self.records.get(index).and_then(|record| record.incoming_connection()) else {
                break;
            };
            out_path.push(connection);
            index = self.graph.index(connection.from_node());
        }
        out_path.reverse();
    }

    /// Fill `out_path` with the nodes from start to goal, inclusive.
    pub(super) fn generate_node_path<P>(&self, start: &G::Node, goal_index: usize, out_path: &mut P)
    where
        P: GraphPath<G::Node>,
    {
        out_path.clear();
        let mut index = goal_index;
        for _ in 0..self.records.len() {
            let Some(record) = self.records.get(index) else {
                break;
            };
            let Some(connection) = record.incoming_connection() else {
                break;
            };
            out_path.push(record.node().clone());
            index = self.graph.index(connection.from_node());
        }
        out_path.push(start.clone());
        out_path.reverse();
    }
}
