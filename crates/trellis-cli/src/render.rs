//! Output formatting for the shell.
//!
//! Human output is built as lines of (possibly coloured) text. JSON output
//! wraps every outcome in a small envelope so scripts can tell success from
//! failure without parsing prose.

use colored::Colorize;
use serde::Serialize;
use trellis_core::SocialError;
use trellis_graph::{GraphStats, InboxEntry, ProfileView, Suggestion, UserSummary};

/// JSON envelope for a successful operation.
#[derive(Serialize)]
pub struct Success<'a, T: Serialize> {
    pub ok: bool,
    pub data: &'a T,
}

impl<'a, T: Serialize> Success<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self { ok: true, data }
    }
}

/// JSON envelope for a rejected operation.
#[derive(Serialize)]
pub struct Failure {
    pub ok: bool,
    pub error: &'static str,
    pub message: String,
}

impl From<&SocialError> for Failure {
    fn from(err: &SocialError) -> Self {
        Self {
            ok: false,
            error: err.code(),
            message: err.to_string(),
        }
    }
}

/// A one-line success notice.
pub fn done(message: impl std::fmt::Display) -> Vec<String> {
    vec![format!("{} {}", "✓".green(), message)]
}

/// A one-line failure notice.
pub fn failed(err: &SocialError) -> String {
    format!("{} {}", "✗".red(), err)
}

/// A titled list of users, or `empty` when there are none.
pub fn user_list(title: impl std::fmt::Display, users: &[UserSummary], empty: &str) -> Vec<String> {
    let mut lines = vec![title.to_string().cyan().bold().to_string()];
    if users.is_empty() {
        lines.push(format!("  {}", empty.dimmed()));
    }
    lines.extend(users.iter().map(|u| format!("  {u}")));
    lines
}

pub fn inbox(user_id: &str, entries: &[InboxEntry]) -> Vec<String> {
    let mut lines = vec![format!("Messages for {user_id}:").cyan().bold().to_string()];
    if entries.is_empty() {
        lines.push(format!("  {}", "No messages.".dimmed()));
    }
    lines.extend(
        entries
            .iter()
            .map(|e| format!("  From: {} - Message: {}", e.from, e.text)),
    );
    lines
}

pub fn suggestions(user_id: &str, suggestions: &[Suggestion]) -> Vec<String> {
    let mut lines = vec![format!("Friend suggestions for {user_id}:")
        .cyan()
        .bold()
        .to_string()];
    if suggestions.is_empty() {
        lines.push(format!("  {}", "No suggestions.".dimmed()));
    }
    for suggestion in suggestions {
        let reasons: Vec<String> = suggestion
            .reasons
            .iter()
            .map(|r| format!("[{r}]"))
            .collect();
        lines.push(format!(
            "  {} - Reason: {}",
            suggestion.user,
            reasons.join(" ").yellow()
        ));
    }
    lines
}

pub fn profile(view: &ProfileView) -> Vec<String> {
    let mut lines = vec![
        "--- User Profile ---".cyan().bold().to_string(),
        format!("  {} {}", "Name:".dimmed(), view.name),
        format!("  {} {}", "ID:".dimmed(), view.id),
        format!("  {} {}", "City:".dimmed(), view.city),
        format!("  {} {}", "Interests:".dimmed(), view.interest),
        format!("  {} {}", "Institution:".dimmed(), view.institution),
    ];
    lines.extend(user_list("Friends:", &view.friends, "No friends."));
    lines
}

pub fn stats(stats: &GraphStats) -> Vec<String> {
    vec![
        "Trellis Status".cyan().bold().to_string(),
        format!("  {} {}", "Users:".dimmed(), stats.users),
        format!("  {} {}", "Friendships:".dimmed(), stats.friendships),
        format!("  {} {}", "Pending:".dimmed(), stats.pending_requests),
        format!("  {} {}", "Messages:".dimmed(), stats.messages),
        format!("  {} {}", "Groups:".dimmed(), stats.groups),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> UserSummary {
        UserSummary {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_user_list_empty() {
        colored::control::set_override(false);
        let lines = user_list("Friends of 1:", &[], "No friends.");
        assert_eq!(lines, vec!["Friends of 1:", "  No friends."]);
    }

    #[test]
    fn test_user_list_entries() {
        colored::control::set_override(false);
        let lines = user_list("Members:", &[summary("1", "Ada"), summary("2", "Bob")], "-");
        assert_eq!(lines, vec!["Members:", "  Ada (1)", "  Bob (2)"]);
    }

    #[test]
    fn test_failure_envelope() {
        let failure = Failure::from(&SocialError::NotFriends);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "not_friends");
        assert_eq!(json["message"], "You are not friends");
    }

    #[test]
    fn test_success_envelope() {
        let users = vec![summary("1", "Ada")];
        let json = serde_json::to_value(Success::new(&users)).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"][0]["name"], "Ada");
    }
}
