//! Benchmark support crate for sociograph.
//!
//! Builds seeded networks and weighted graphs for the Criterion benchmarks
//! covering graph enumeration, shortest paths, and the engagement search.

pub mod error;
pub mod fixtures;
pub mod params;
