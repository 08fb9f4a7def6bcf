//! User-role resource

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A role as held by a user, with an activation flag.
///
/// Every (user, role) pair exists exactly once; `active` marks the roles
/// a user currently offers to fill on setlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: i64,
    pub user_id: UserId,
    pub role_id: i64,
    pub active: bool,
}
