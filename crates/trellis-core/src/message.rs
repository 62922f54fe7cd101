use crate::user::UserId;
use serde::{Deserialize, Serialize};

/// A message delivered to a user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message.
    pub sender: UserId,
    pub text: String,
}

impl Message {
    pub fn new(sender: UserId, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}
