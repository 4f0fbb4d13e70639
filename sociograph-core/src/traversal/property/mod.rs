//! Property-based tests for the traversal engine.
//!
//! Checks enumeration and Dijkstra against Bellman-Ford style oracles,
//! cross-checks the two member path finders, and compares the bounded
//! engagement search with exhaustive enumeration of simple paths.

mod distances;
mod enumeration;
mod oracle;
mod paths;
mod search;
mod strategies;
mod types;
