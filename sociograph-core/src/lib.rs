//! Social-network graph analysis.
//!
//! A [`Network`] holds members joined by directed follow edges and annotated
//! with like and comment counts. The traversal engine answers fewest-hops and
//! highest-engagement path queries over it, and a separate undirected
//! [`WeightedGraph`] backs plain BFS/DFS enumeration and Dijkstra distances.
//!
//! ```
//! use sociograph_core::{MemberId, Network, highest_engagement_path, shortest_path};
//!
//! let id = MemberId::new;
//! let mut network = Network::new();
//! for raw in 1..=3 {
//!     network.add_member(id(raw), format!("Member_{raw}"))?;
//! }
//! network.ensure_path(&[id(1), id(2), id(3)])?;
//! network.like(id(2), id(1), 4)?;
//!
//! assert_eq!(shortest_path(&network, id(1), id(3))?, Some(vec![id(1), id(2), id(3)]));
//! assert_eq!(highest_engagement_path(&network, id(1), id(3), 5)?.score(), 4);
//! # Ok::<(), sociograph_core::NetworkError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
mod error;
mod graph;
mod member;
mod network;
#[cfg(feature = "synthetic")]
mod synthetic;
#[cfg(test)]
mod test_utils;
pub mod traversal;

pub use crate::{
    analysis::{
        MemberReport, NetworkSummary, Regression, Statistics, hop_distance_matrix,
        influence_matrix, linear_regression, reachability_matrix,
    },
    error::{
        AnalysisError, AnalysisErrorCode, GraphError, GraphErrorCode, NetworkError,
        NetworkErrorCode, Result,
    },
    graph::{Weight, WeightedGraph},
    member::{Interaction, Member, MemberId},
    network::Network,
    traversal::{
        BfsTree, Colour, DEFAULT_MAX_DEPTH, Distance, EngagementPath, TraversalOrder,
        breadth_first_order, breadth_first_tree, depth_first_order, highest_engagement_path,
        hop_distances, member_path, shortest_distances, shortest_path, traverse,
    },
};

#[cfg(feature = "synthetic")]
pub use crate::{
    error::{SyntheticError, SyntheticErrorCode},
    synthetic::{SyntheticGraphConfig, SyntheticNetworkConfig},
};
