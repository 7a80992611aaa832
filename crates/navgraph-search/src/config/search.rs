//! Indexed A* engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use navgraph_core::{GraphError, GraphResult};

/// Configuration for [`IndexedAStarPathFinder`](crate::traversal::IndexedAStarPathFinder).
///
/// The defaults reproduce the plain algorithm: no instrumentation and no
/// limit on how many nodes a search may expand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Collect visited/insertion/peak counters on every search.
    /// Default: false
    pub collect_metrics: bool,

    /// Maximum nodes expanded per search before giving up.
    /// `None` runs until the goal is found or the open list is exhausted.
    /// Default: None
    pub max_expansions: Option<usize>,

    /// Initial open-list allocation, in entries.
    /// Default: 64
    pub open_list_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            collect_metrics: false,
            max_expansions: None,
            open_list_capacity: 64,
        }
    }
}

impl SearchConfig {
    /// Config with metrics collection enabled.
    #[must_use]
    pub fn with_metrics() -> Self {
        Self {
            collect_metrics: true,
            ..Default::default()
        }
    }

    /// Builder: enable or disable metrics collection.
    #[must_use]
    pub fn collect_metrics(mut self, enabled: bool) -> Self {
        self.collect_metrics = enabled;
        self
    }

    /// Builder: cap the number of expansions per search.
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: remove the expansion cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Builder: set initial open-list capacity.
    #[must_use]
    pub fn open_list_capacity(mut self, capacity: usize) -> Self {
        self.open_list_capacity = capacity;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - `max_expansions` is `Some(0)`
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_expansions == Some(0) {
            return Err(GraphError::InvalidConfig(
                "max_expansions must be at least 1 (use None for no limit)".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    /// * `GraphError::Deserialization` - malformed JSON
    /// * `GraphError::InvalidConfig` - parsed config fails validation
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// * `GraphError::Io` - file could not be read
    /// * see [`SearchConfig::from_json_str`]
    pub fn from_json_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// * `GraphError::Serialization` - serialization failed
    pub fn to_json_string(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }
}
