//! Bundle resource

use serde::{Deserialize, Serialize};

/// Root sentinel for `Bundle::parent_id`
pub const ROOT_PARENT: i64 = 0;

/// A hierarchical grouping of songs.
///
/// `parent_id == 0` marks a root bundle; any positive value references
/// the parent bundle. Negative values are rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: i64,
    pub name: String,
    pub parent_id: i64,
}

impl Bundle {
    /// Whether this bundle sits at the top of the hierarchy
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT
    }
}
