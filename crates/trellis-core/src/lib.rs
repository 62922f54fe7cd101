//! Trellis Core - Profiles, messages and domain errors
//!
//! This crate holds the data model shared by the graph and the CLI:
//! user profiles, the handles that reference them, inbox messages and
//! the error type every social operation reports.
//!
//! # Example
//!
//! ```
//! use trellis_core::{NewProfile, ProfileField, User};
//!
//! let mut user: User = NewProfile::new("1", "Ada").with_city("London").into();
//! user.set_field(ProfileField::City, "Paris");
//! assert_eq!(user.city, "Paris");
//! ```

mod error;
mod message;
mod user;

pub use error::{Result, SocialError};
pub use message::Message;
pub use user::{NewProfile, ProfileField, User, UserId};
