//! Clearance levels

use serde::{Deserialize, Serialize};

/// Principal privilege levels, ordered from least to most privileged.
///
/// The derived `Ord` follows declaration order, so
/// `Guest < Member < Editor < Admin` holds by construction. "Has
/// clearance X" always means "clearance is X or higher".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clearance {
    /// Read-only visitor
    Guest,
    /// Regular member, may contribute content
    Member,
    /// Trusted member, may edit content of others
    Editor,
    /// Full administrative control
    Admin,
}

impl Clearance {
    /// Check whether this clearance satisfies the given minimum.
    #[inline]
    pub fn satisfies(self, minimum: Clearance) -> bool {
        self >= minimum
    }
}

impl std::fmt::Display for Clearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Member => write!(f, "member"),
            Self::Editor => write!(f, "editor"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Clearance {
    type Err = ClearanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "member" => Ok(Self::Member),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            _ => Err(ClearanceParseError(s.to_string())),
        }
    }
}

/// Error parsing a clearance string
#[derive(Debug, Clone)]
pub struct ClearanceParseError(pub String);

impl std::fmt::Display for ClearanceParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid clearance: {}", self.0)
    }
}

impl std::error::Error for ClearanceParseError {}
