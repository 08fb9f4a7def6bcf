//! Setlist entry resource

use serde::{Deserialize, Serialize};

/// Largest transpose step allowed on an entry
pub const TRANSPOSE_MAX: i16 = 6;
/// Smallest transpose step allowed on an entry
pub const TRANSPOSE_MIN: i16 = -5;

/// Whether a transpose step lies within the playable range
#[inline]
pub fn is_valid_transpose(transpose: i16) -> bool {
    (TRANSPOSE_MIN..=TRANSPOSE_MAX).contains(&transpose)
}

/// One song within a setlist, with per-occasion adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetlistEntry {
    pub id: i64,
    pub song_id: i64,
    pub setlist_id: i64,
    pub transpose: i16,
    pub notes: String,
    pub arrangement: serde_json::Value,
    pub rank: i64,
}
