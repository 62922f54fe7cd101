//! The social graph service.
//!
//! `SocialGraph` is the string-ID façade over the directory, the
//! relationship store and the group registry. Every use-case resolves its
//! IDs first, then checks relationship state, and only then mutates, so a
//! rejected call never leaves anything half-done.
//!
//! The friend-request lifecycle for a pair {S, R} is:
//!
//! ```text
//! None ──send(S→R)──▶ PendingFromS ──accept──▶ Friends
//!   ▲                      │                      │
//!   └──────reject──────────┘◀─────delete──────────┘
//! ```
//!
//! `PendingFromS` and `PendingFromR` never coexist.

use crate::directory::UserDirectory;
use crate::groups::GroupRegistry;
use crate::query::{Affinity, GraphStats, InboxEntry, ProfileView, Suggestion, UserSummary};
use crate::relations::{RelationshipStore, Resolution};
use tracing::debug;
use trellis_core::{NewProfile, ProfileField, Result, SocialError, User, UserId};

/// In-memory social graph.
#[derive(Debug, Default, Clone)]
pub struct SocialGraph {
    directory: UserDirectory,
    relations: RelationshipStore,
    groups: GroupRegistry,
}

impl SocialGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user directory.
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// The relationship store.
    pub fn relations(&self) -> &RelationshipStore {
        &self.relations
    }

    /// The group registry.
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profiles
    // ─────────────────────────────────────────────────────────────────────

    /// Creates a profile.
    ///
    /// The name and ID must not be blank. City, interest and institution
    /// may be.
    pub fn create_profile(&mut self, profile: NewProfile) -> Result<UserId> {
        if profile.name.trim().is_empty() {
            return Err(SocialError::EmptyInput("name"));
        }
        if profile.id.trim().is_empty() {
            return Err(SocialError::EmptyInput("id"));
        }

        let id = profile.id.clone();
        let handle = self.directory.insert(profile.into())?;
        debug!(user = %id, "profile created");
        Ok(handle)
    }

    /// Returns a user's profile and friend list.
    pub fn view_profile(&self, user_id: &str) -> Result<ProfileView> {
        let (handle, user) = self.lookup(user_id)?;
        Ok(ProfileView {
            id: user.id.clone(),
            name: user.name.clone(),
            city: user.city.clone(),
            interest: user.interest.clone(),
            institution: user.institution.clone(),
            friends: self.summaries(self.relations.friends(handle)),
        })
    }

    /// Overwrites one profile field. The ID is never editable.
    pub fn edit_profile(&mut self, user_id: &str, field: ProfileField, value: &str) -> Result<()> {
        let handle = self.resolve(user_id)?;
        if value.trim().is_empty() {
            return Err(SocialError::EmptyInput(field.as_str()));
        }

        self.directory
            .get_mut(handle)
            .ok_or_else(|| SocialError::UserNotFound(user_id.to_string()))?
            .set_field(field, value);
        debug!(user = %user_id, %field, "profile edited");
        Ok(())
    }

    /// Lists every user in ascending ID order.
    pub fn list_all_users(&self) -> Vec<UserSummary> {
        self.directory
            .iter()
            .map(|(_, user)| UserSummary::from(user))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Friendships
    // ─────────────────────────────────────────────────────────────────────

    /// Sends a friend request from `sender_id` to `receiver_id`.
    pub fn send_friend_request(&mut self, sender_id: &str, receiver_id: &str) -> Result<()> {
        if sender_id == receiver_id {
            return Err(SocialError::SelfReference);
        }
        let sender = self.resolve(sender_id)?;
        let receiver = self.resolve(receiver_id)?;

        if self.relations.are_friends(sender, receiver) {
            return Err(SocialError::AlreadyFriends);
        }
        if !self.relations.add_pending_request(sender, receiver) {
            return Err(SocialError::AlreadyPending);
        }

        debug!(sender = %sender_id, receiver = %receiver_id, "friend request sent");
        Ok(())
    }

    /// Accepts the request `user_id` received from `sender_id`.
    pub fn accept_friend_request(&mut self, user_id: &str, sender_id: &str) -> Result<()> {
        self.resolve_request(user_id, sender_id, Resolution::Accept)
    }

    /// Rejects the request `user_id` received from `sender_id`.
    pub fn reject_friend_request(&mut self, user_id: &str, sender_id: &str) -> Result<()> {
        self.resolve_request(user_id, sender_id, Resolution::Reject)
    }

    fn resolve_request(
        &mut self,
        user_id: &str,
        sender_id: &str,
        resolution: Resolution,
    ) -> Result<()> {
        let user = self.resolve(user_id)?;
        let sender = self.resolve(sender_id)?;

        self.relations
            .resolve_pending_request(user, sender, resolution)?;
        debug!(receiver = %user_id, sender = %sender_id, ?resolution, "friend request resolved");
        Ok(())
    }

    /// Ends a friendship on both sides.
    pub fn delete_friend(&mut self, user_id: &str, friend_id: &str) -> Result<()> {
        if user_id == friend_id {
            return Err(SocialError::SelfReference);
        }
        let user = self.resolve(user_id)?;
        let friend = self.resolve(friend_id)?;

        if !self.relations.are_friends(user, friend) {
            return Err(SocialError::NotFriends);
        }
        self.relations.remove_friend_edge(user, friend);
        debug!(user = %user_id, friend = %friend_id, "friendship removed");
        Ok(())
    }

    /// Returns true if the two users are friends.
    pub fn are_friends(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self
            .relations
            .are_friends(self.resolve(a)?, self.resolve(b)?))
    }

    /// Returns true if `receiver_id` holds a pending request from `sender_id`.
    pub fn has_pending_request(&self, receiver_id: &str, sender_id: &str) -> Result<bool> {
        Ok(self
            .relations
            .has_pending_request(self.resolve(receiver_id)?, self.resolve(sender_id)?))
    }

    /// Lists a user's friends.
    pub fn list_friends(&self, user_id: &str) -> Result<Vec<UserSummary>> {
        let user = self.resolve(user_id)?;
        Ok(self.summaries(self.relations.friends(user)))
    }

    /// Lists who has sent `user_id` a pending request, newest first.
    pub fn list_pending_requests(&self, user_id: &str) -> Result<Vec<UserSummary>> {
        let user = self.resolve(user_id)?;
        Ok(self.summaries(self.relations.pending_requests(user)))
    }

    /// Lists the users who are friends with both `a` and `b`.
    ///
    /// Friends are compared by identity, never by profile contents.
    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<Vec<UserSummary>> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;

        let mutual = self
            .relations
            .friends(a)
            .into_iter()
            .filter(|&friend| self.relations.are_friends(b, friend));
        Ok(self.summaries(mutual))
    }

    /// Suggests friends who share a city, interest or institution.
    ///
    /// Users already related to `user_id` (friends or a pending request in
    /// either direction) are skipped. Results are in ascending ID order.
    pub fn suggest_friends(&self, user_id: &str) -> Result<Vec<Suggestion>> {
        let (handle, user) = self.lookup(user_id)?;

        let suggestions = self
            .directory
            .iter()
            .filter(|&(other, _)| other != handle && !self.related(handle, other))
            .filter_map(|(_, candidate)| {
                let reasons: Vec<Affinity> = [
                    Affinity::City,
                    Affinity::Interest,
                    Affinity::Institution,
                ]
                .into_iter()
                .filter(|affinity| affinity.matches(user, candidate))
                .collect();
                (!reasons.is_empty()).then(|| Suggestion {
                    user: UserSummary::from(candidate),
                    reasons,
                })
            })
            .collect();

        Ok(suggestions)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Messages
    // ─────────────────────────────────────────────────────────────────────

    /// Sends a direct message. Sender and receiver must be friends.
    pub fn send_message(&mut self, sender_id: &str, receiver_id: &str, text: &str) -> Result<()> {
        let sender = self.resolve(sender_id)?;
        let receiver = self.resolve(receiver_id)?;

        if !self.relations.are_friends(sender, receiver) {
            return Err(SocialError::NotFriends);
        }
        if text.trim().is_empty() {
            return Err(SocialError::EmptyInput("message"));
        }

        self.relations.post_message(sender, receiver, text);
        debug!(sender = %sender_id, receiver = %receiver_id, "message sent");
        Ok(())
    }

    /// Returns a user's inbox, newest first.
    pub fn read_messages(&self, user_id: &str) -> Result<Vec<InboxEntry>> {
        let user = self.resolve(user_id)?;
        Ok(self
            .relations
            .messages(user)
            .filter_map(|message| {
                Some(InboxEntry {
                    from: self.summary(message.sender)?,
                    text: message.text.clone(),
                })
            })
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Groups
    // ─────────────────────────────────────────────────────────────────────

    /// Creates an empty group.
    pub fn create_group(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SocialError::EmptyInput("group name"));
        }
        self.groups.create_group(name)?;
        debug!(group = %name, "group created");
        Ok(())
    }

    /// Adds a user to a group.
    pub fn join_group(&mut self, user_id: &str, group: &str) -> Result<()> {
        let user = self.resolve(user_id)?;
        self.groups.join(group, user)?;
        debug!(user = %user_id, %group, "joined group");
        Ok(())
    }

    /// Lists a group's members in join order.
    pub fn group_members(&self, group: &str) -> Result<Vec<UserSummary>> {
        let members = self
            .groups
            .members(group)
            .ok_or_else(|| SocialError::GroupNotFound(group.to_string()))?;
        Ok(self.summaries(members.iter().copied()))
    }

    /// Sends a friend request from `user_id` to every unrelated member of
    /// `group`. Returns how many requests were sent.
    pub fn send_friend_request_to_group(&mut self, user_id: &str, group: &str) -> Result<usize> {
        let user = self.resolve(user_id)?;
        let members = self
            .groups
            .members(group)
            .ok_or_else(|| SocialError::GroupNotFound(group.to_string()))?
            .to_vec();

        let mut sent = 0;
        for member in members {
            if member != user && self.relations.add_pending_request(user, member) {
                sent += 1;
            }
        }

        debug!(sender = %user_id, %group, sent, "group friend requests sent");
        Ok(sent)
    }

    /// Delivers a message to every other member of a group.
    ///
    /// The sender must be a member. Returns how many members received it.
    pub fn send_group_message(&mut self, sender_id: &str, group: &str, text: &str) -> Result<usize> {
        let sender = self.resolve(sender_id)?;
        let members = self
            .groups
            .members(group)
            .ok_or_else(|| SocialError::GroupNotFound(group.to_string()))?;

        if !members.contains(&sender) {
            return Err(SocialError::NotAMember);
        }
        if text.trim().is_empty() {
            return Err(SocialError::EmptyInput("message"));
        }

        let recipients: Vec<UserId> = members.iter().copied().filter(|&m| m != sender).collect();
        for &recipient in &recipients {
            self.relations.post_message(sender, recipient, text);
        }

        debug!(sender = %sender_id, %group, delivered = recipients.len(), "group message sent");
        Ok(recipients.len())
    }

    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            users: self.directory.len(),
            friendships: self.relations.friendship_count(),
            pending_requests: self.relations.pending_count(),
            messages: self.relations.message_count(),
            groups: self.groups.len(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn resolve(&self, id: &str) -> Result<UserId> {
        self.directory
            .find(id)
            .ok_or_else(|| SocialError::UserNotFound(id.to_string()))
    }

    fn lookup(&self, id: &str) -> Result<(UserId, &User)> {
        let handle = self.resolve(id)?;
        let user = self
            .directory
            .get(handle)
            .ok_or_else(|| SocialError::UserNotFound(id.to_string()))?;
        Ok((handle, user))
    }

    /// Friends, or a request pending in either direction.
    fn related(&self, a: UserId, b: UserId) -> bool {
        self.relations.are_friends(a, b)
            || self.relations.has_pending_request(a, b)
            || self.relations.has_pending_request(b, a)
    }

    fn summary(&self, handle: UserId) -> Option<UserSummary> {
        self.directory.get(handle).map(UserSummary::from)
    }

    fn summaries(&self, handles: impl IntoIterator<Item = UserId>) -> Vec<UserSummary> {
        handles
            .into_iter()
            .filter_map(|handle| self.summary(handle))
            .collect()
    }
}
