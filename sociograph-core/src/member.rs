//! Members of the social network and their interaction counters.
//!
//! A [`Member`] is a vertex of the social graph. Follow edges are stored as
//! identifier sets on both endpoints, and every like or comment is recorded
//! twice: on the giver (keyed by the receiver) and on the receiver (keyed by
//! the giver). [`crate::Network`] is the only writer, so both sides always
//! agree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Opaque identifier of a [`Member`] within one [`crate::Network`].
///
/// # Examples
/// ```
/// use sociograph_core::MemberId;
///
/// let id = MemberId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MemberId(u64);

impl MemberId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MemberId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex of the social graph.
///
/// Members are created through [`crate::Network::add_member`] and mutated only
/// by the network's edge-forming operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    following: BTreeSet<MemberId>,
    followers: BTreeSet<MemberId>,
    likes_given: BTreeMap<MemberId, u64>,
    comments_given: BTreeMap<MemberId, u64>,
    likes_received: BTreeMap<MemberId, u64>,
    comments_received: BTreeMap<MemberId, u64>,
}

impl Member {
    pub(crate) fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            following: BTreeSet::new(),
            followers: BTreeSet::new(),
            likes_given: BTreeMap::new(),
            comments_given: BTreeMap::new(),
            likes_received: BTreeMap::new(),
            comments_received: BTreeMap::new(),
        }
    }

    /// Returns the member identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> MemberId { self.id }

    /// Returns the display name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Members this member follows (outgoing edges).
    #[must_use]
    #[rustfmt::skip]
    pub fn following(&self) -> &BTreeSet<MemberId> { &self.following }

    /// Members following this member (incoming edges).
    #[must_use]
    #[rustfmt::skip]
    pub fn followers(&self) -> &BTreeSet<MemberId> { &self.followers }

    /// Likes given by this member, keyed by receiver.
    #[must_use]
    #[rustfmt::skip]
    pub fn likes_given(&self) -> &BTreeMap<MemberId, u64> { &self.likes_given }

    /// Comments given by this member, keyed by receiver.
    #[must_use]
    #[rustfmt::skip]
    pub fn comments_given(&self) -> &BTreeMap<MemberId, u64> { &self.comments_given }

    /// Likes received by this member, keyed by giver.
    #[must_use]
    #[rustfmt::skip]
    pub fn likes_received(&self) -> &BTreeMap<MemberId, u64> { &self.likes_received }

    /// Comments received by this member, keyed by giver.
    #[must_use]
    #[rustfmt::skip]
    pub fn comments_received(&self) -> &BTreeMap<MemberId, u64> { &self.comments_received }

    /// Returns `true` when this member follows `other`.
    #[must_use]
    pub fn follows(&self, other: MemberId) -> bool {
        self.following.contains(&other)
    }

    /// Total likes given to every other member.
    #[must_use]
    pub fn total_likes_given(&self) -> u64 {
        saturating_sum(self.likes_given.values())
    }

    /// Total comments given to every other member.
    #[must_use]
    pub fn total_comments_given(&self) -> u64 {
        saturating_sum(self.comments_given.values())
    }

    /// Total likes received from every other member.
    #[must_use]
    pub fn total_likes_received(&self) -> u64 {
        saturating_sum(self.likes_received.values())
    }

    /// Total comments received from every other member.
    #[must_use]
    pub fn total_comments_received(&self) -> u64 {
        saturating_sum(self.comments_received.values())
    }

    /// Likes plus comments given by this member.
    ///
    /// This is the per-node score used by
    /// [`crate::highest_engagement_path`].
    ///
    /// # Examples
    /// ```
    /// use sociograph_core::{MemberId, Network};
    ///
    /// let mut network = Network::new();
    /// network.add_member(MemberId::new(1), "Ada")?;
    /// network.add_member(MemberId::new(2), "Grace")?;
    /// network.like(MemberId::new(1), MemberId::new(2), 3)?;
    /// network.comment(MemberId::new(1), MemberId::new(2), 2)?;
    /// let ada = network.member(MemberId::new(1)).expect("member exists");
    /// assert_eq!(ada.total_engagement(), 5);
    /// # Ok::<(), sociograph_core::NetworkError>(())
    /// ```
    #[must_use]
    pub fn total_engagement(&self) -> u64 {
        self.total_likes_given()
            .saturating_add(self.total_comments_given())
    }

    /// Engagement given per follower, as a percentage.
    ///
    /// Returns `0.0` for a member without followers.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "engagement counters are reported as approximate percentages"
    )]
    pub fn engagement_rate(&self) -> f64 {
        let followers = self.followers.len();
        if followers == 0 {
            return 0.0;
        }
        self.total_engagement() as f64 / followers as f64 * 100.0
    }

    /// Share of this member's engagement directed at `other`, as a percentage.
    ///
    /// Returns `0.0` when this member has not engaged with anyone.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "engagement counters are reported as approximate percentages"
    )]
    pub fn influence_on(&self, other: MemberId) -> f64 {
        let total = self.total_engagement();
        if total == 0 {
            return 0.0;
        }
        let directed = self
            .likes_given_to(other)
            .saturating_add(self.comments_given_to(other));
        directed as f64 / total as f64 * 100.0
    }

    /// Likes this member gave to `other`.
    #[must_use]
    pub fn likes_given_to(&self, other: MemberId) -> u64 {
        self.likes_given.get(&other).copied().unwrap_or(0)
    }

    /// Comments this member gave to `other`.
    #[must_use]
    pub fn comments_given_to(&self, other: MemberId) -> u64 {
        self.comments_given.get(&other).copied().unwrap_or(0)
    }

    pub(crate) fn insert_following(&mut self, followee: MemberId) {
        self.following.insert(followee);
    }

    pub(crate) fn insert_follower(&mut self, follower: MemberId) {
        self.followers.insert(follower);
    }

    pub(crate) fn record_given(&mut self, kind: Interaction, target: MemberId, count: u64) {
        let counters = match kind {
            Interaction::Like => &mut self.likes_given,
            Interaction::Comment => &mut self.comments_given,
        };
        bump(counters, target, count);
    }

    pub(crate) fn record_received(&mut self, kind: Interaction, source: MemberId, count: u64) {
        let counters = match kind {
            Interaction::Like => &mut self.likes_received,
            Interaction::Comment => &mut self.comments_received,
        };
        bump(counters, source, count);
    }
}

/// Interaction kinds tracked between members.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Interaction {
    /// A like.
    Like,
    /// A comment.
    Comment,
}

fn bump(counters: &mut BTreeMap<MemberId, u64>, key: MemberId, count: u64) {
    let slot = counters.entry(key).or_insert(0);
    *slot = slot.saturating_add(count);
}

fn saturating_sum<'a>(values: impl Iterator<Item = &'a u64>) -> u64 {
    values.fold(0, |acc, value| acc.saturating_add(*value))
}
