//! The user directory.
//!
//! Users live in an arena and are referenced everywhere else by
//! [`UserId`] handles. A sorted index over the string IDs gives exact
//! lookup and ascending-ID traversal.

use std::collections::BTreeMap;
use trellis_core::{Result, SocialError, User, UserId};

/// Ordered collection of user profiles keyed by ID.
#[derive(Debug, Default, Clone)]
pub struct UserDirectory {
    /// Arena of profiles. A handle is an index into this vector.
    users: Vec<User>,

    /// Maps string IDs to handles, ordered by ID.
    id_index: BTreeMap<String, UserId>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user.
    ///
    /// Fails with [`SocialError::DuplicateKey`] if the ID is taken, in
    /// which case the existing record is left untouched.
    pub fn insert(&mut self, user: User) -> Result<UserId> {
        if self.id_index.contains_key(&user.id) {
            return Err(SocialError::DuplicateKey(user.id));
        }

        let handle = UserId(self.users.len());
        self.id_index.insert(user.id.clone(), handle);
        self.users.push(user);

        Ok(handle)
    }

    /// Exact lookup by string ID.
    pub fn find(&self, id: &str) -> Option<UserId> {
        self.id_index.get(id).copied()
    }

    /// Gets a user by handle.
    pub fn get(&self, handle: UserId) -> Option<&User> {
        self.users.get(handle.index())
    }

    /// Gets a user by handle for editing.
    ///
    /// The ID must not be changed through this reference; the index
    /// would no longer find the user.
    pub(crate) fn get_mut(&mut self, handle: UserId) -> Option<&mut User> {
        self.users.get_mut(handle.index())
    }

    /// Iterates over all users in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &User)> + '_ {
        self.id_index
            .values()
            .filter_map(|&handle| Some((handle, self.get(handle)?)))
    }

    /// Returns the number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::NewProfile;

    fn user(id: &str, name: &str) -> User {
        NewProfile::new(id, name).into()
    }

    #[test]
    fn test_insert_find() {
        let mut dir = UserDirectory::new();
        let handle = dir.insert(user("alice", "Alice")).unwrap();

        assert_eq!(dir.find("alice"), Some(handle));
        assert_eq!(dir.find("bob"), None);
        assert_eq!(dir.get(handle).unwrap().name, "Alice");
    }

    #[test]
    fn test_find_is_exact() {
        let mut dir = UserDirectory::new();
        dir.insert(user("alice", "Alice")).unwrap();

        assert_eq!(dir.find("ali"), None);
        assert_eq!(dir.find("Alice"), None);
        assert_eq!(dir.find("alice "), None);
    }

    #[test]
    fn test_duplicate_rejected_and_original_kept() {
        let mut dir = UserDirectory::new();
        dir.insert(user("1", "First")).unwrap();

        let err = dir.insert(user("1", "Second")).unwrap_err();
        assert_eq!(err, SocialError::DuplicateKey("1".to_string()));

        let handle = dir.find("1").unwrap();
        assert_eq!(dir.get(handle).unwrap().name, "First");
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_iter_ascending() {
        let mut dir = UserDirectory::new();
        for id in ["m", "c", "x", "a", "q"] {
            dir.insert(user(id, id)).unwrap();
        }

        let ids: Vec<&str> = dir.iter().map(|(_, u)| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "m", "q", "x"]);

        // Restartable: a second walk sees the same sequence.
        let again: Vec<&str> = dir.iter().map(|(_, u)| u.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_string_ordering_not_numeric() {
        let mut dir = UserDirectory::new();
        for id in ["10", "9", "100"] {
            dir.insert(user(id, id)).unwrap();
        }

        let ids: Vec<&str> = dir.iter().map(|(_, u)| u.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "100", "9"]);
    }

    #[test]
    fn test_handles_are_arena_indexes() {
        let mut dir = UserDirectory::new();
        for (position, id) in ["c", "a", "b"].into_iter().enumerate() {
            let handle = dir.insert(user(id, id)).unwrap();
            assert_eq!(handle, UserId(position));
            assert_eq!(dir.get(handle).unwrap().id, id);
        }
        assert_eq!(dir.find("a"), Some(UserId(1)));
    }

    #[test]
    fn test_empty() {
        let dir = UserDirectory::new();
        assert!(dir.is_empty());
        assert_eq!(dir.iter().count(), 0);
    }
}
