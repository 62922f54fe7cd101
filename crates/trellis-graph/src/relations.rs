//! Per-user relationships: friendships, pending requests and inboxes.
//!
//! Friendships are edges of an undirected petgraph `GraphMap`, so a
//! friendship recorded for one side is always visible from the other.
//! Pending requests are directed and kept on the receiver; inboxes are
//! kept newest-first.

use petgraph::graphmap::UnGraphMap;
use std::collections::{HashMap, VecDeque};
use trellis_core::{Message, Result, SocialError, UserId};

/// How a pending friend request is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Accept,
    Reject,
}

/// Relationship state for every user in a directory.
#[derive(Debug, Default, Clone)]
pub struct RelationshipStore {
    /// Confirmed friendships.
    friendships: UnGraphMap<UserId, ()>,

    /// Maps a receiver to the senders of its pending requests, newest first.
    pending: HashMap<UserId, VecDeque<UserId>>,

    /// Maps a receiver to its inbox, newest first.
    inboxes: HashMap<UserId, VecDeque<Message>>,
}

impl RelationshipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `a` and `b` are friends. Symmetric.
    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friendships.contains_edge(a, b)
    }

    /// Records a friendship on both sides. No-op if already friends.
    pub fn add_friend_edge(&mut self, a: UserId, b: UserId) {
        if a == b {
            return;
        }
        self.friendships.add_edge(a, b, ());
    }

    /// Removes a friendship from both sides. No-op if not friends.
    pub fn remove_friend_edge(&mut self, a: UserId, b: UserId) {
        self.friendships.remove_edge(a, b);
    }

    /// Lists a user's friends.
    ///
    /// The order is unspecified: removing a friendship moves the last
    /// neighbour into the freed slot.
    pub fn friends(&self, user: UserId) -> Vec<UserId> {
        self.friendships.neighbors(user).collect()
    }

    /// Returns true if `receiver` holds a pending request from `sender`.
    pub fn has_pending_request(&self, receiver: UserId, sender: UserId) -> bool {
        self.pending
            .get(&receiver)
            .is_some_and(|senders| senders.contains(&sender))
    }

    /// Files a request from `sender` on `receiver`'s pending list.
    ///
    /// Returns false and changes nothing if the two are already friends or
    /// a request exists in either direction.
    pub fn add_pending_request(&mut self, sender: UserId, receiver: UserId) -> bool {
        if sender == receiver
            || self.are_friends(sender, receiver)
            || self.has_pending_request(receiver, sender)
            || self.has_pending_request(sender, receiver)
        {
            return false;
        }

        self.pending.entry(receiver).or_default().push_front(sender);
        true
    }

    /// Removes the request from `sender` held by `receiver`.
    ///
    /// On [`Resolution::Accept`] the friendship is recorded in the same step.
    pub fn resolve_pending_request(
        &mut self,
        receiver: UserId,
        sender: UserId,
        resolution: Resolution,
    ) -> Result<()> {
        let senders = self
            .pending
            .get_mut(&receiver)
            .ok_or(SocialError::NoPendingRequest)?;
        let position = senders
            .iter()
            .position(|&s| s == sender)
            .ok_or(SocialError::NoPendingRequest)?;
        senders.remove(position);

        if resolution == Resolution::Accept {
            self.add_friend_edge(receiver, sender);
        }

        Ok(())
    }

    /// Lists the senders of a user's pending requests, newest first.
    pub fn pending_requests(&self, receiver: UserId) -> Vec<UserId> {
        self.pending
            .get(&receiver)
            .map(|senders| senders.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Delivers a message to the head of `receiver`'s inbox.
    pub fn post_message(&mut self, sender: UserId, receiver: UserId, text: impl Into<String>) {
        self.inboxes
            .entry(receiver)
            .or_default()
            .push_front(Message::new(sender, text));
    }

    /// Iterates over a user's inbox, newest first.
    pub fn messages(&self, user: UserId) -> impl Iterator<Item = &Message> + '_ {
        self.inboxes.get(&user).into_iter().flatten()
    }

    /// Returns the number of friendships (each counted once).
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count()
    }

    /// Returns the number of outstanding requests.
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(VecDeque::len).sum()
    }

    /// Returns the number of delivered messages.
    pub fn message_count(&self) -> usize {
        self.inboxes.values().map(VecDeque::len).sum()
    }
}
