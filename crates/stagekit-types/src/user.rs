//! User and principal types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Clearance;

/// Unique user identifier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Sentinel id meaning "the acting user themselves"
    pub const SELF: UserId = UserId(0);

    /// Whether this is the self-referential sentinel
    #[inline]
    pub fn is_self(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A registered user as held in storage.
///
/// The password field carries the bcrypt digest and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub clearance: Clearance,
    pub profile_color: String,
    #[serde(rename = "last_modified")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user meets the given minimum clearance.
    #[inline]
    pub fn has_clearance(&self, minimum: Clearance) -> bool {
        self.clearance.satisfies(minimum)
    }

    /// Snapshot the public identity of this user for embedding in a token.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            clearance: self.clearance,
            profile_color: self.profile_color.clone(),
        }
    }
}

/// The authenticated actor attached to a request.
///
/// Produced by successful token verification; never mutated. Carries no
/// secrets, only the identity snapshot taken at token issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub clearance: Clearance,
    pub profile_color: String,
}

impl Principal {
    /// Check whether this principal meets the given minimum clearance.
    #[inline]
    pub fn has_clearance(&self, minimum: Clearance) -> bool {
        self.clearance.satisfies(minimum)
    }
}
