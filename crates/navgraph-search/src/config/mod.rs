//! Configuration types for the search engine.
//!
//! - Search engine behavior (SearchConfig): metrics collection, optional
//!   expansion cap, initial open-list capacity

mod search;

pub use self::search::SearchConfig;
