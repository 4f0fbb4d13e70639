//! The social network: members plus directed follow edges and interactions.
//!
//! Edge-forming operations require both endpoints to exist and fail fast with
//! [`NetworkError::UnknownMember`] otherwise.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{
    error::{NetworkError, Result},
    member::{Interaction, Member, MemberId},
};

/// A directed social graph keyed by [`MemberId`].
///
/// # Examples
/// ```
/// use sociograph_core::{MemberId, Network};
///
/// let mut network = Network::new();
/// network.add_member(MemberId::new(1), "Alice")?;
/// network.add_member(MemberId::new(2), "Bob")?;
/// network.follow(MemberId::new(1), MemberId::new(2))?;
///
/// let bob = network.member(MemberId::new(2)).expect("member exists");
/// assert!(bob.followers().contains(&MemberId::new(1)));
/// # Ok::<(), sociograph_core::NetworkError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Network {
    members: BTreeMap<MemberId, Member>,
}

impl Network {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member with the given identifier and display name.
    ///
    /// # Errors
    /// Returns [`NetworkError::DuplicateMember`] when `id` is already taken.
    pub fn add_member(&mut self, id: MemberId, name: impl Into<String>) -> Result<()> {
        if self.members.contains_key(&id) {
            return Err(NetworkError::DuplicateMember { id });
        }
        self.members.insert(id, Member::new(id, name));
        Ok(())
    }

    /// Makes `follower` follow `followee`, updating both members.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when either member is absent.
    pub fn follow(&mut self, follower: MemberId, followee: MemberId) -> Result<()> {
        self.require(follower)?;
        self.require(followee)?;
        self.member_mut(follower)?.insert_following(followee);
        self.member_mut(followee)?.insert_follower(follower);
        trace!(%follower, %followee, "follow edge added");
        Ok(())
    }

    /// Records `count` likes from `liker` to `likee`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when either member is absent.
    pub fn like(&mut self, liker: MemberId, likee: MemberId, count: u64) -> Result<()> {
        self.interact(Interaction::Like, liker, likee, count)
    }

    /// Records `count` comments from `commenter` to `commentee`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when either member is absent.
    pub fn comment(&mut self, commenter: MemberId, commentee: MemberId, count: u64) -> Result<()> {
        self.interact(Interaction::Comment, commenter, commentee, count)
    }

    /// Records an interaction of `kind` on both the giver and the receiver.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when either member is absent.
    pub fn interact(
        &mut self,
        kind: Interaction,
        giver: MemberId,
        receiver: MemberId,
        count: u64,
    ) -> Result<()> {
        self.require(giver)?;
        self.require(receiver)?;
        self.member_mut(giver)?.record_given(kind, receiver, count);
        self.member_mut(receiver)?.record_received(kind, giver, count);
        trace!(?kind, %giver, %receiver, count, "interaction recorded");
        Ok(())
    }

    /// Adds a follow edge between every consecutive pair in `path`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when any member is absent. Edges
    /// added before the failing pair are kept.
    ///
    /// # Examples
    /// ```
    /// use sociograph_core::{MemberId, Network};
    ///
    /// let mut network = Network::new();
    /// for id in 1..=3 {
    ///     network.add_member(MemberId::new(id), format!("Member{id}"))?;
    /// }
    /// let path = [1, 2, 3].map(MemberId::new);
    /// network.ensure_path(&path)?;
    /// assert!(network.member(MemberId::new(2)).expect("exists").follows(MemberId::new(3)));
    /// # Ok::<(), sociograph_core::NetworkError>(())
    /// ```
    pub fn ensure_path(&mut self, path: &[MemberId]) -> Result<()> {
        for pair in path.windows(2) {
            if let [from, to] = pair {
                self.follow(*from, *to)?;
            }
        }
        Ok(())
    }

    /// Looks up a member by identifier.
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Looks up a member, failing when it is absent.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownMember`] when `id` is absent.
    pub fn require(&self, id: MemberId) -> Result<&Member> {
        self.members
            .get(&id)
            .ok_or(NetworkError::UnknownMember { id })
    }

    fn member_mut(&mut self, id: MemberId) -> Result<&mut Member> {
        self.members
            .get_mut(&id)
            .ok_or(NetworkError::UnknownMember { id })
    }

    /// Iterates over members in ascending identifier order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = &Member> {
        self.members.values()
    }

    /// Iterates over member identifiers in ascending order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = MemberId> + '_ {
        self.members.keys().copied()
    }

    /// Returns `true` when `id` names a member of this network.
    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the network has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Total number of follow edges.
    #[must_use]
    pub fn following_count(&self) -> usize {
        self.members
            .values()
            .map(|member| member.following().len())
            .sum()
    }
}
