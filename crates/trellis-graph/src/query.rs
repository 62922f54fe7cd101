//! Result payloads returned by the social graph.
//!
//! These are plain serializable snapshots: they copy names and IDs out of
//! the graph so callers can render them after the graph moves on.

use serde::Serialize;
use trellis_core::User;

/// Minimal reference to a user, for lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

impl std::fmt::Display for UserSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A user's profile together with their friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub interest: String,
    pub institution: String,
    pub friends: Vec<UserSummary>,
}

/// An attribute two users have in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    City,
    Interest,
    Institution,
}

impl Affinity {
    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Affinity::City => "Same City",
            Affinity::Interest => "Same Interest",
            Affinity::Institution => "Same Institution",
        }
    }

    /// Compares the attribute on two users.
    ///
    /// An empty value never matches, even against another empty value.
    pub fn matches(&self, a: &User, b: &User) -> bool {
        let (x, y) = match self {
            Affinity::City => (&a.city, &b.city),
            Affinity::Interest => (&a.interest, &b.interest),
            Affinity::Institution => (&a.institution, &b.institution),
        };
        !x.is_empty() && x == y
    }
}

impl std::fmt::Display for Affinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggested friend and why they were suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub user: UserSummary,
    /// Matching attributes, in city, interest, institution order. Never empty.
    pub reasons: Vec<Affinity>,
}

/// A message as seen in an inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxEntry {
    pub from: UserSummary,
    pub text: String,
}

/// Graph statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub users: usize,
    pub friendships: usize,
    pub pending_requests: usize,
    pub messages: usize,
    pub groups: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::NewProfile;

    #[test]
    fn test_affinity_ignores_empty_fields() {
        let a: User = NewProfile::new("1", "A").into();
        let b: User = NewProfile::new("2", "B").into();

        assert!(!Affinity::City.matches(&a, &b));
        assert!(!Affinity::Interest.matches(&a, &b));
        assert!(!Affinity::Institution.matches(&a, &b));
    }

    #[test]
    fn test_affinity_exact_match() {
        let a: User = NewProfile::new("1", "A").with_city("Lahore").into();
        let b: User = NewProfile::new("2", "B").with_city("Lahore").into();
        let c: User = NewProfile::new("3", "C").with_city("lahore").into();

        assert!(Affinity::City.matches(&a, &b));
        assert!(!Affinity::City.matches(&a, &c));
    }

    #[test]
    fn test_summary_display() {
        let user: User = NewProfile::new("7", "Grace").into();
        assert_eq!(UserSummary::from(&user).to_string(), "Grace (7)");
    }

    #[test]
    fn test_suggestion_serializes_reasons() {
        let suggestion = Suggestion {
            user: UserSummary {
                id: "2".to_string(),
                name: "B".to_string(),
            },
            reasons: vec![Affinity::City, Affinity::Institution],
        };

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["reasons"][0], "city");
        assert_eq!(json["reasons"][1], "institution");
        assert_eq!(json["user"]["id"], "2");
    }
}
