//! Per-node search state, reused across searches.
//!
//! Records live in a dense array addressed by node index. Each record carries
//! the generation of the search that last touched it; a record whose tag
//! differs from the current generation is stale and is reset to
//! [`NodeCategory::Unvisited`] on first access. Starting a new search is
//! therefore a single counter increment instead of an O(node_count) clear.

/// Record lifecycle within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Not reached by the current search.
    Unvisited,
    /// Discovered and waiting in the open list.
    Open,
    /// Popped from the open list; cost finalized unless a cheaper route reopens it.
    Closed,
}

/// Generation tag meaning "never touched by any search".
pub(crate) const NEVER_VISITED: u32 = 0;

/// Search state for one graph node.
#[derive(Debug, Clone)]
pub struct NodeRecord<'g, N, C> {
    pub(crate) node: N,
    pub(crate) incoming: Option<&'g C>,
    pub(crate) cost_so_far: f32,
    pub(crate) estimated_total_cost: f32,
    pub(crate) category: NodeCategory,
    pub(crate) search_generation: u32,
}

impl<'g, N, C> NodeRecord<'g, N, C> {
    fn new(node: N, generation: u32) -> Self {
        Self {
            node,
            incoming: None,
            cost_so_far: 0.0,
            estimated_total_cost: 0.0,
            category: NodeCategory::Unvisited,
            search_generation: generation,
        }
    }

    fn reset(&mut self, generation: u32) {
        self.incoming = None;
        self.cost_so_far = 0.0;
        self.estimated_total_cost = 0.0;
        self.category = NodeCategory::Unvisited;
        self.search_generation = generation;
    }

    /// Node this record describes.
    #[inline]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Connection that achieved the current best cost (`None` for the start).
    #[inline]
    pub fn incoming_connection(&self) -> Option<&'g C> {
        self.incoming
    }

    /// Cost from the start along the best known route.
    #[inline]
    pub fn cost_so_far(&self) -> f32 {
        self.cost_so_far
    }

    /// Heap key: `cost_so_far` plus the heuristic estimate.
    #[inline]
    pub fn estimated_total_cost(&self) -> f32 {
        self.estimated_total_cost
    }

    /// Current category.
    #[inline]
    pub fn category(&self) -> NodeCategory {
        self.category
    }

    /// Generation of the search that last touched this record.
    #[inline]
    pub fn search_generation(&self) -> u32 {
        self.search_generation
    }
}

/// Dense, lazily allocated array of [`NodeRecord`]s.
#[derive(Debug)]
pub struct NodeRecordStore<'g, N, C> {
    records: Vec<Option<NodeRecord<'g, N, C>>>,
    generation: u32,
}

impl<'g, N: Clone, C> NodeRecordStore<'g, N, C> {
    /// Create a store for `node_count` nodes. No record is allocated yet.
    pub fn new(node_count: usize) -> Self {
        let mut records = Vec::with_capacity(node_count);
        records.resize_with(node_count, || None);
        Self {
            records,
            generation: NEVER_VISITED,
        }
    }

    /// Advance to a new search generation and return it.
    ///
    /// The counter wraps to 1, never 0. On wrap every allocated record is
    /// retagged as never visited so a tag from the previous cycle cannot
    /// collide with a fresh generation.
    pub fn begin_search(&mut self) -> u32 {
        self.generation = match self.generation.checked_add(1) {
            Some(next) => next,
            None => {
                tracing::trace!(
                    records = self.records.len(),
                    "Search generation wrapped, retagging node records"
                );
                for record in self.records.iter_mut().flatten() {
                    record.search_generation = NEVER_VISITED;
                }
                1
            }
        };
        self.generation
    }

    /// Record for `node` at `index`, valid for the current generation.
    ///
    /// Allocates the record on first reference and resets it if it belongs
    /// to an earlier search.
    ///
    /// # Panics
    /// Panics if `index >= node_count`. Endpoint indices are validated
    /// before a search starts, so this only fires when a graph hands out an
    /// out-of-range neighbour index.
    pub fn get_or_create(&mut self, index: usize, node: &N) -> &mut NodeRecord<'g, N, C> {
        let generation = self.generation;
        let record = self.records[index].get_or_insert_with(|| NodeRecord::new(node.clone(), generation));
        if record.search_generation != generation {
            record.reset(generation);
        }
        record
    }

    /// Record at `index` if the current search has touched it.
    pub fn get(&self, index: usize) -> Option<&NodeRecord<'g, N, C>> {
        self.records
            .get(index)
            .and_then(Option::as_ref)
            .filter(|record| record.search_generation == self.generation)
    }

    /// Mutable record at `index` if the current search has touched it.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut NodeRecord<'g, N, C>> {
        let generation = self.generation;
        self.records
            .get_mut(index)
            .and_then(Option::as_mut)
            .filter(|record| record.search_generation == generation)
    }

    /// Current search generation (0 before the first search).
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of addressable slots (the graph's node count).
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of slots that have ever been allocated.
    pub fn allocated(&self) -> usize {
        self.records.iter().filter(|slot| slot.is_some()).count()
    }

    #[cfg(test)]
    pub(crate) fn set_generation(&mut self, generation: u32) {
        self.generation = generation;
    }
}
