//! Named groups and their rosters.

use trellis_core::{Result, SocialError, UserId};

/// A named group of users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Members in join order.
    pub members: Vec<UserId>,
}

impl Group {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Returns true if the user is on the roster.
    pub fn is_member(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }
}

/// Flat registry of groups, looked up by exact name.
#[derive(Debug, Default, Clone)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group.
    pub fn create_group(&mut self, name: &str) -> Result<()> {
        if self.find_group(name).is_some() {
            return Err(SocialError::AlreadyExists(name.to_string()));
        }
        self.groups.push(Group::new(name));
        Ok(())
    }

    /// Finds a group by exact name.
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Adds a user to a group's roster.
    pub fn join(&mut self, name: &str, user: UserId) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| SocialError::GroupNotFound(name.to_string()))?;

        if group.is_member(user) {
            return Err(SocialError::AlreadyMember);
        }
        group.members.push(user);
        Ok(())
    }

    /// Returns true if the group exists and the user belongs to it.
    pub fn is_member(&self, name: &str, user: UserId) -> bool {
        self.find_group(name).is_some_and(|g| g.is_member(user))
    }

    /// Returns a group's roster in join order.
    pub fn members(&self, name: &str) -> Option<&[UserId]> {
        self.find_group(name).map(|g| g.members.as_slice())
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no group has been created.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
