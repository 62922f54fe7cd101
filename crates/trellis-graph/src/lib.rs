//! Trellis Graph - Friendships, groups and social use-cases
//!
//! This crate manages the social graph: who exists, who is friends with
//! whom, which friend requests are waiting, what landed in each inbox and
//! who belongs to which group.
//!
//! # Architecture
//!
//! ```text
//! SocialGraph (string-ID use-cases)
//!     ├── UserDirectory      (arena + ordered ID index)
//!     ├── RelationshipStore  (friend graph, pending requests, inboxes)
//!     └── GroupRegistry      (named rosters)
//! ```
//!
//! Everything below the service works on [`UserId`](trellis_core::UserId)
//! handles; only the service speaks string IDs.
//!
//! # Example
//!
//! ```
//! use trellis_core::NewProfile;
//! use trellis_graph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//! graph.create_profile(NewProfile::new("1", "Ada")).unwrap();
//! graph.create_profile(NewProfile::new("2", "Grace")).unwrap();
//!
//! graph.send_friend_request("1", "2").unwrap();
//! graph.accept_friend_request("2", "1").unwrap();
//! assert!(graph.are_friends("1", "2").unwrap());
//! ```

mod directory;
mod groups;
mod query;
mod relations;
mod service;

pub use directory::UserDirectory;
pub use groups::{Group, GroupRegistry};
pub use query::{Affinity, GraphStats, InboxEntry, ProfileView, Suggestion, UserSummary};
pub use relations::{RelationshipStore, Resolution};
pub use service::SocialGraph;
