//! Setlist resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// An ordered program of songs for a single occasion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setlist {
    pub id: i64,
    pub name: String,
    pub creator_id: UserId,
    pub deadline: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
