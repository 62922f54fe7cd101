//! Error types for social graph operations.
//!
//! Every variant is a recoverable outcome reported back to the caller.
//! None of them leave the graph in a partially updated state.

use thiserror::Error;

/// Error type for social graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    /// No user with this ID.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No group with this name.
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// A user with this ID already exists.
    #[error("User with this ID already exists: {0}")]
    DuplicateKey(String),

    /// A group with this name already exists.
    #[error("Group already exists: {0}")]
    AlreadyExists(String),

    #[error("You are already friends")]
    AlreadyFriends,

    /// A request is already pending between the two users, in either direction.
    #[error("A friend request is already pending between you two")]
    AlreadyPending,

    #[error("You are not friends")]
    NotFriends,

    /// The operation names the same user on both sides.
    #[error("A user cannot do this with themselves")]
    SelfReference,

    #[error("No pending friend request")]
    NoPendingRequest,

    #[error("Not a member of this group")]
    NotAMember,

    #[error("Already a member of this group")]
    AlreadyMember,

    /// A required field was empty.
    #[error("Input cannot be empty: {0}")]
    EmptyInput(&'static str),

    /// A profile field name that cannot be edited.
    #[error("Unknown profile field: {0}")]
    UnknownField(String),
}

impl SocialError {
    /// Stable machine-readable code for this outcome.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::GroupNotFound(_) => "not_found",
            Self::DuplicateKey(_) => "duplicate_key",
            Self::AlreadyExists(_) => "already_exists",
            Self::AlreadyFriends => "already_friends",
            Self::AlreadyPending => "already_pending",
            Self::NotFriends => "not_friends",
            Self::SelfReference => "self_reference",
            Self::NoPendingRequest => "no_pending_request",
            Self::NotAMember => "not_a_member",
            Self::AlreadyMember => "already_member",
            Self::EmptyInput(_) => "empty_input",
            Self::UnknownField(_) => "unknown_field",
        }
    }
}

/// Result type alias for social graph operations.
pub type Result<T> = std::result::Result<T, SocialError>;
