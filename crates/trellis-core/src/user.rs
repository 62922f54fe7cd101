//! User profiles.
//!
//! A profile is identified by its string ID, which never changes after
//! creation. Everything else about a user can be edited.

use crate::error::SocialError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Handle to a user stored in a directory.
///
/// Handles are dense indexes into the directory's storage. They stay valid
/// for the lifetime of the directory since users are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub usize);

impl UserId {
    /// Returns the handle as a storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable identifier.
    pub id: String,
    pub name: String,
    pub city: String,
    pub interest: String,
    pub institution: String,
}

impl User {
    /// Returns the value of an editable field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::City => &self.city,
            ProfileField::Interest => &self.interest,
            ProfileField::Institution => &self.institution,
        }
    }

    /// Overwrites exactly one editable field.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::City => &mut self.city,
            ProfileField::Interest => &mut self.interest,
            ProfileField::Institution => &mut self.institution,
        };
        *slot = value.into();
    }
}

/// Payload for creating a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: String,
    pub name: String,
    pub city: String,
    pub interest: String,
    pub institution: String,
}

impl NewProfile {
    /// Creates a profile payload with the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interest = interest.into();
        self
    }

    #[must_use]
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }
}

impl From<NewProfile> for User {
    fn from(profile: NewProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            city: profile.city,
            interest: profile.interest,
            institution: profile.institution,
        }
    }
}

/// A profile field that may be edited after creation.
///
/// The ID is not listed here on purpose: it can never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    City,
    Interest,
    Institution,
}

impl ProfileField {
    /// All editable fields, in menu order.
    pub const ALL: [ProfileField; 4] = [Self::Name, Self::City, Self::Interest, Self::Institution];

    /// Converts to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::Interest => "interest",
            Self::Institution => "institution",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "city" => Some(Self::City),
            "interest" => Some(Self::Interest),
            "institution" => Some(Self::Institution),
            _ => None,
        }
    }
}

impl FromStr for ProfileField {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SocialError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
