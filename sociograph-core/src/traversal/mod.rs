//! Traversal engine: enumeration, shortest paths, and engagement search.
//!
//! Every routine borrows its graph immutably and keeps all per-run state in
//! locals, so a graph can be searched from several places at once.

mod bfs;
mod dijkstra;
mod engagement;
mod order;
#[cfg(test)]
mod property;

pub use self::{
    bfs::{BfsTree, Colour, breadth_first_tree, hop_distances, shortest_path},
    dijkstra::{Distance, member_path, shortest_distances},
    engagement::{DEFAULT_MAX_DEPTH, EngagementPath, highest_engagement_path},
    order::{TraversalOrder, breadth_first_order, depth_first_order, traverse},
};
