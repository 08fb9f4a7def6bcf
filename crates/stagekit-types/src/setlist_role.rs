//! Setlist role resource

use serde::{Deserialize, Serialize};

/// Assignment of a user-role to a setlist.
///
/// Links a member's active role (e.g. "drums") to a concrete setlist,
/// meaning they fill that role on that occasion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetlistRole {
    pub id: i64,
    pub setlist_id: i64,
    #[serde(rename = "userrole_id")]
    pub user_role_id: i64,
}
