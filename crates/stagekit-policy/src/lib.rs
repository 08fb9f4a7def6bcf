//! Stagekit Policy - Resource authorization rules
//!
//! One policy service per resource type. Every mutating operation runs
//! the same shape of decision: clearance gate first (pure, cheapest),
//! then - only where the resource defines one - an ownership or
//! delegation fallback backed by a fresh storage lookup. Storage errors
//! met while fetching facts propagate as-is, so callers can still tell
//! "not found" from "not authorized".

pub mod bundle;
pub mod gate;
pub mod role;
pub mod setlist;
pub mod setlist_entry;
pub mod setlist_role;
pub mod song;
pub mod user;
pub mod user_role;
pub mod validate;

pub use bundle::BundleService;
pub use role::RoleService;
pub use setlist::SetlistService;
pub use setlist_entry::SetlistEntryService;
pub use setlist_role::SetlistRoleService;
pub use song::SongService;
pub use user::UserService;
pub use user_role::UserRoleService;
