//! Token value types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::UserId;

/// Short-lived, self-contained signed credential.
///
/// Stateless: never persisted, never individually revocable; invalidated
/// only by expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

/// Long-lived signed credential paired with a persisted, revocable
/// record keyed by `(user_id, refresh)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(skip)]
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: UserId,
    pub refresh: String,
}

/// The pair handed out on authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(flatten)]
    pub access: AccessToken,
    #[serde(flatten)]
    pub refresh: RefreshToken,
}
