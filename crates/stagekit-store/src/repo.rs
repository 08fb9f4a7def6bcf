//! Repository traits
//!
//! Define async repository interfaces for the external stores. Getters
//! return `StoreError::NotFound` for missing records; multi-id getters
//! resolve every requested id or fail, so authorization decisions never
//! proceed on partial facts.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use stagekit_types::{
    Bundle, Role, Setlist, SetlistEntry, SetlistRole, Song, User, UserId, UserRole,
};

use crate::error::StoreResult;

/// User store
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_id(&self, id: UserId) -> StoreResult<User>;

    async fn get_by_email(&self, email: &str) -> StoreResult<User>;

    async fn get_all(&self) -> StoreResult<Vec<User>>;

    /// Create a user, returning the record with its assigned id
    async fn create(&self, user: &User) -> StoreResult<User>;

    async fn update(&self, user: &User) -> StoreResult<()>;

    async fn delete(&self, id: UserId) -> StoreResult<()>;
}

/// Refresh-token store.
///
/// A TTL-capable key-value store is sufficient: one record per issued
/// token, keyed by `(user_id, token)`, living for `ttl`. Deleting an
/// absent record is a no-op, which is what makes revocation idempotent
/// and concurrent revoke/reissue races benign.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn create(&self, user_id: UserId, token: &str, ttl: Duration) -> StoreResult<()>;

    /// Delete one record; succeeds whether or not the record exists
    async fn delete(&self, user_id: UserId, token: &str) -> StoreResult<()>;

    /// All live token strings for a user (multi-device sessions)
    async fn list_all(&self, user_id: UserId) -> StoreResult<Vec<String>>;
}

/// Song store
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> StoreResult<Song>;

    async fn get_all(&self) -> StoreResult<Vec<Song>>;

    async fn create(&self, song: &Song) -> StoreResult<Song>;

    async fn update(&self, song: &Song) -> StoreResult<()>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Setlist store
#[async_trait]
pub trait SetlistStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> StoreResult<Setlist>;

    /// Resolve every id or fail with `NotFound`
    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<Setlist>>;

    async fn get_all(&self) -> StoreResult<Vec<Setlist>>;

    async fn get_by_timeframe(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Setlist>>;

    async fn create(&self, setlist: &Setlist) -> StoreResult<Setlist>;

    async fn update(&self, setlist: &Setlist) -> StoreResult<Setlist>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Setlist entry store. Entry streams come back ordered by rank.
#[async_trait]
pub trait SetlistEntryStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> StoreResult<SetlistEntry>;

    async fn get_all(&self) -> StoreResult<Vec<SetlistEntry>>;

    async fn get_by_setlists(&self, setlist_ids: &[i64]) -> StoreResult<Vec<SetlistEntry>>;

    async fn create_batch(&self, entries: &[SetlistEntry]) -> StoreResult<Vec<SetlistEntry>>;

    async fn update_batch(&self, entries: &[SetlistEntry]) -> StoreResult<()>;

    async fn delete_batch(&self, ids: &[i64]) -> StoreResult<()>;
}

/// Setlist role store
#[async_trait]
pub trait SetlistRoleStore: Send + Sync {
    /// Resolve every id or fail with `NotFound`
    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<SetlistRole>>;

    async fn get_by_setlists(&self, setlist_ids: &[i64]) -> StoreResult<Vec<SetlistRole>>;

    async fn create_batch(&self, roles: &[SetlistRole]) -> StoreResult<Vec<SetlistRole>>;

    async fn delete_batch(&self, ids: &[i64]) -> StoreResult<()>;
}

/// Bundle store
#[async_trait]
pub trait BundleStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> StoreResult<Bundle>;

    async fn get_all(&self) -> StoreResult<Vec<Bundle>>;

    /// Bundles no other bundle points at as parent
    async fn get_leaves(&self) -> StoreResult<Vec<Bundle>>;

    async fn create(&self, bundle: &Bundle) -> StoreResult<Bundle>;

    async fn update(&self, bundle: &Bundle) -> StoreResult<()>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Role store
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> StoreResult<Role>;

    async fn get_all(&self) -> StoreResult<Vec<Role>>;

    async fn create(&self, role: &Role) -> StoreResult<Role>;

    async fn update(&self, role: &Role) -> StoreResult<()>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// User-role store
#[async_trait]
pub trait UserRoleStore: Send + Sync {
    /// Resolve every id or fail with `NotFound`
    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<UserRole>>;

    async fn get_all(&self) -> StoreResult<Vec<UserRole>>;

    async fn get_by_user(&self, user_id: UserId) -> StoreResult<Vec<UserRole>>;

    async fn create_batch(&self, user_roles: &[UserRole]) -> StoreResult<Vec<UserRole>>;

    async fn update_batch(&self, user_roles: &[UserRole]) -> StoreResult<()>;

    async fn delete_by_role(&self, role_id: i64) -> StoreResult<()>;

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<()>;
}
