//! Whole-network reports built on top of the traversal engine.
//!
//! Matrices are indexed by member position in ascending identifier order,
//! matching [`Network::ids`].

use tracing::{debug, instrument};

use crate::{
    error::AnalysisError,
    member::{Member, MemberId},
    network::Network,
    traversal::BfsTree,
};

/// Aggregate counters over a whole network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkSummary {
    members: usize,
    followings: usize,
    likes: u64,
    comments: u64,
}

impl NetworkSummary {
    /// Counts members, follow edges, likes, and comments.
    ///
    /// # Examples
    /// ```
    /// use sociograph_core::{MemberId, Network, NetworkSummary};
    ///
    /// let mut network = Network::new();
    /// network.add_member(MemberId::new(1), "a")?;
    /// network.add_member(MemberId::new(2), "b")?;
    /// network.follow(MemberId::new(1), MemberId::new(2))?;
    /// network.like(MemberId::new(2), MemberId::new(1), 4)?;
    ///
    /// let summary = NetworkSummary::from_network(&network);
    /// assert_eq!(summary.members(), 2);
    /// assert_eq!(summary.engagements(), 4);
    /// # Ok::<(), sociograph_core::NetworkError>(())
    /// ```
    #[must_use]
    pub fn from_network(network: &Network) -> Self {
        network
            .members()
            .fold(Self::default(), |summary, member| Self {
                members: summary.members.saturating_add(1),
                followings: summary.followings.saturating_add(member.following().len()),
                likes: summary.likes.saturating_add(member.total_likes_given()),
                comments: summary.comments.saturating_add(member.total_comments_given()),
            })
    }

    /// Number of members.
    #[must_use]
    #[rustfmt::skip]
    pub fn members(&self) -> usize { self.members }

    /// Number of follow edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn followings(&self) -> usize { self.followings }

    /// Total likes recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn likes(&self) -> u64 { self.likes }

    /// Total comments recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn comments(&self) -> u64 { self.comments }

    /// Likes plus comments.
    #[must_use]
    pub fn engagements(&self) -> u64 {
        self.likes.saturating_add(self.comments)
    }
}

/// Per-member activity report.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberReport {
    /// Member identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Number of members this member follows.
    pub follows: usize,
    /// Number of followers.
    pub followed_by: usize,
    /// Likes given to others.
    pub likes_given: u64,
    /// Likes received from others.
    pub likes_received: u64,
    /// Comments given to others.
    pub comments_given: u64,
    /// Comments received from others.
    pub comments_received: u64,
    /// See [`Member::engagement_rate`].
    pub engagement_rate: f64,
}

impl MemberReport {
    /// Snapshots the counters of `member`.
    #[must_use]
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id(),
            name: member.name().to_owned(),
            follows: member.following().len(),
            followed_by: member.followers().len(),
            likes_given: member.total_likes_given(),
            likes_received: member.total_likes_received(),
            comments_given: member.total_comments_given(),
            comments_received: member.total_comments_received(),
            engagement_rate: member.engagement_rate(),
        }
    }
}

/// All-pairs hop distances: row `i`, column `j` holds the BFS distance from
/// the `i`-th to the `j`-th member, or `None` when unreachable.
#[must_use]
#[instrument(
    name = "analysis.hop_matrix",
    level = "debug",
    skip(network),
    fields(members = network.len()),
)]
pub fn hop_distance_matrix(network: &Network) -> Vec<Vec<Option<usize>>> {
    network
        .ids()
        .map(|start| {
            let tree = BfsTree::grow(network, start);
            network.ids().map(|end| tree.distance(end)).collect()
        })
        .collect()
}

/// Marks with `1` every pair of distinct members joined by a follow path.
///
/// # Examples
/// ```
/// use sociograph_core::reachability_matrix;
///
/// let hops = vec![vec![Some(0), Some(1)], vec![None, Some(0)]];
/// assert_eq!(reachability_matrix(&hops), vec![vec![0, 1], vec![0, 0]]);
/// ```
#[must_use]
pub fn reachability_matrix(hops: &[Vec<Option<usize>>]) -> Vec<Vec<u8>> {
    hops.iter()
        .enumerate()
        .map(|(row, distances)| {
            distances
                .iter()
                .enumerate()
                .map(|(column, distance)| u8::from(row != column && distance.is_some()))
                .collect()
        })
        .collect()
}

/// Pairwise influence: row `i`, column `j` holds
/// [`Member::influence_on`] of the `i`-th member towards the `j`-th.
#[must_use]
pub fn influence_matrix(network: &Network) -> Vec<Vec<f64>> {
    network
        .members()
        .map(|member| network.ids().map(|other| member.influence_on(other)).collect())
        .collect()
}

/// Descriptive statistics over a non-empty sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    count: usize,
    mean: f64,
    std_dev: f64,
    max: f64,
}

impl Statistics {
    /// Computes count, mean, population standard deviation, and maximum.
    ///
    /// Returns `None` for an empty sample.
    ///
    /// # Examples
    /// ```
    /// use sociograph_core::Statistics;
    ///
    /// let stats = Statistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
    ///     .expect("sample is not empty");
    /// assert_eq!(stats.mean(), 5.0);
    /// assert_eq!(stats.std_dev(), 2.0);
    /// assert_eq!(stats.max(), 9.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample sizes are far below f64 mantissa precision"
    )]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / count as f64;
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            max,
        })
    }

    /// Number of observations.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.count }

    /// Arithmetic mean.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean(&self) -> f64 { self.mean }

    /// Population standard deviation.
    #[must_use]
    #[rustfmt::skip]
    pub fn std_dev(&self) -> f64 { self.std_dev }

    /// Largest observation.
    #[must_use]
    #[rustfmt::skip]
    pub fn max(&self) -> f64 { self.max }
}

/// Least-squares fit of `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regression {
    /// Fitted slope.
    pub slope: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
}

/// Fits a least-squares line through paired samples.
///
/// A constant `xs` yields slope and R² of zero; a constant `ys` yields an R²
/// of zero.
///
/// # Errors
/// Returns [`AnalysisError::LengthMismatch`] when the samples differ in
/// length and [`AnalysisError::EmptySample`] when they are empty.
///
/// # Examples
/// ```
/// use sociograph_core::linear_regression;
///
/// let fit = linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// # Ok::<(), sociograph_core::AnalysisError>(())
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "sample sizes are far below f64 mantissa precision"
)]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<Regression, AnalysisError> {
    if xs.len() != ys.len() {
        return Err(AnalysisError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(AnalysisError::EmptySample);
    }

    let count = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;
    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        debug!(observations = xs.len(), "regression skipped: constant explanatory sample");
        return Ok(Regression {
            slope: 0.0,
            r_squared: 0.0,
        });
    }
    let slope = sxy / sxx;
    let r_squared = if syy == 0.0 {
        0.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };
    Ok(Regression { slope, r_squared })
}
