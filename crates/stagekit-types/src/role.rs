//! Role resource

use serde::{Deserialize, Serialize};

/// A band/stage role members can take on (e.g. vocals, keys, sound)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: String,
}
