//! Song resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A song with its chord sheet, filed under a bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub bundle_id: i64,
    pub creator_id: UserId,
    pub title: String,
    pub subtitle: String,
    pub key: String,
    pub bpm: u32,
    pub chord_sheet: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Musical keys a song may be written in
const VALID_KEYS: [&str; 34] = [
    "C", "D", "E", "F", "G", "A", "B", //
    "Cm", "Dm", "Em", "Fm", "Gm", "Am", "Bm", //
    "C#", "D#", "F#", "G#", "A#", //
    "C#m", "D#m", "F#m", "G#m", "A#m", //
    "Db", "Eb", "Gb", "Ab", "Bb", //
    "Dbm", "Ebm", "Gbm", "Abm", "Bbm",
];

impl Song {
    /// Whether the song's key is one of the recognized musical keys
    pub fn is_valid_key(&self) -> bool {
        VALID_KEYS.contains(&self.key.as_str())
    }
}
