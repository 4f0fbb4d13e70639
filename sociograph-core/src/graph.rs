//! Generic undirected weighted graph used by the plain traversal routines.
//!
//! Adjacency is stored as ordered maps so neighbour iteration, and therefore
//! every traversal order derived from it, is deterministic.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use crate::error::GraphError;

/// Numeric edge weight accepted by [`WeightedGraph`].
///
/// Implementations supply a total order (floats use IEEE total ordering) so
/// weights can key a priority queue.
pub trait Weight: Copy + fmt::Debug + PartialEq {
    /// Additive identity, the distance from a node to itself.
    const ZERO: Self;

    /// Adds two weights, or `None` when the sum is not representable
    /// (integer overflow, or a float sum that is no longer finite).
    fn combine(self, other: Self) -> Option<Self>;

    /// Total order over weights.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns `true` when the weight is finite and non-negative.
    fn is_admissible(&self) -> bool;

    /// Widens the weight for diagnostics.
    fn as_f64(self) -> f64;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn combine(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn is_admissible(&self) -> bool {
                    true
                }

                #[expect(
                    clippy::cast_precision_loss,
                    reason = "widening is only used for error reporting"
                )]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_integer_weight!(u32, u64, usize);

impl Weight for f32 {
    const ZERO: Self = 0.0;

    fn combine(self, other: Self) -> Option<Self> {
        Some(self + other).filter(|sum| sum.is_finite())
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn is_admissible(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    fn combine(self, other: Self) -> Option<Self> {
        Some(self + other).filter(|sum| sum.is_finite())
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn is_admissible(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// Undirected graph with non-negative edge weights.
///
/// # Examples
/// ```
/// use sociograph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge(0_u32, 1, 4_u32)?;
/// assert_eq!(graph.weight(1, 0), Some(4));
/// assert_eq!(graph.neighbours(9).count(), 0);
/// # Ok::<(), sociograph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph<N, W> {
    adjacency: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N, W> Default for WeightedGraph<N, W> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N, W> WeightedGraph<N, W>
where
    N: Copy + Ord,
    W: Weight,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an isolated node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds the undirected edge `{u, v}` with `weight`, creating missing
    /// endpoints. Re-adding an edge replaces its weight in both directions.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] when `weight` is negative or
    /// non-finite.
    pub fn add_edge(&mut self, u: N, v: N, weight: W) -> Result<(), GraphError> {
        if !weight.is_admissible() {
            return Err(GraphError::InvalidWeight {
                weight: weight.as_f64(),
            });
        }
        self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        Ok(())
    }

    /// Iterates over `(neighbour, weight)` pairs of `node` in ascending
    /// neighbour order. An absent node has no neighbours.
    pub fn neighbours(&self, node: N) -> impl Iterator<Item = (N, W)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(next, weight)| (*next, *weight)))
    }

    /// Weight of the edge `{u, v}`, if present.
    #[must_use]
    pub fn weight(&self, u: N, v: N) -> Option<W> {
        self.adjacency
            .get(&u)
            .and_then(|edges| edges.get(&v))
            .copied()
    }

    /// Number of neighbours of `node` (zero when absent).
    #[must_use]
    pub fn degree(&self, node: N) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeMap::len)
    }

    /// Returns `true` when `node` has been added.
    #[must_use]
    pub fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterates over nodes in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, each counted once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(node, edges)| edges.keys().filter(|next| *next >= node).count())
            .sum()
    }
}
