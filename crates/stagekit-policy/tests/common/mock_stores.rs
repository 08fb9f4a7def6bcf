//! Mock stores for policy testing
//!
//! In-memory dashmap-backed implementations of every store trait the
//! policies consume. Multi-id getters fail `NotFound` when any id is
//! missing, matching the trait contracts.

// each test binary uses its own subset of these mocks
#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use stagekit_store::{
    BundleStore, RefreshTokenStore, RoleStore, SetlistEntryStore, SetlistRoleStore, SetlistStore,
    SongStore, StoreError, StoreResult, UserRoleStore, UserStore,
};
use stagekit_types::{
    Bundle, Role, Setlist, SetlistEntry, SetlistRole, Song, User, UserId, UserRole,
};

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst)
}

/// In-memory user store
#[derive(Default, Clone)]
pub struct MockUserStore {
    users: Arc<DashMap<i64, User>>,
    next_id: Arc<AtomicI64>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_user(&self, user: User) {
        self.next_id.fetch_max(user.id.0 + 1, Ordering::SeqCst);
        self.users.insert(user.id.0, user);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id.0)
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn get_by_id(&self, id: UserId) -> StoreResult<User> {
        self.users
            .get(&id.0)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("user_id", id))
    }

    async fn get_by_email(&self, email: &str) -> StoreResult<User> {
        self.users
            .iter()
            .find(|r| r.value().email == email)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("email", email))
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|r| r.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, user: &User) -> StoreResult<User> {
        let mut created = user.clone();
        if created.id.0 == 0 {
            created.id = UserId(next(&self.next_id));
        }
        self.users.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        if !self.users.contains_key(&user.id.0) {
            return Err(StoreError::not_found("user_id", user.id));
        }
        self.users.insert(user.id.0, user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        self.users
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("user_id", id))
    }
}

/// In-memory refresh-token store
#[derive(Default, Clone)]
pub struct MockRefreshTokenStore {
    records: Arc<DashMap<(i64, String), DateTime<Utc>>>,
}

impl MockRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn count_for(&self, user_id: UserId) -> usize {
        self.records.iter().filter(|r| r.key().0 == user_id.0).count()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn create(&self, user_id: UserId, token: &str, ttl: Duration) -> StoreResult<()> {
        self.records
            .insert((user_id.0, token.to_string()), Utc::now() + ttl);
        Ok(())
    }

    async fn delete(&self, user_id: UserId, token: &str) -> StoreResult<()> {
        self.records.remove(&(user_id.0, token.to_string()));
        Ok(())
    }

    async fn list_all(&self, user_id: UserId) -> StoreResult<Vec<String>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.key().0 == user_id.0)
            .map(|r| r.key().1.clone())
            .collect())
    }
}

/// In-memory song store
#[derive(Default, Clone)]
pub struct MockSongStore {
    songs: Arc<DashMap<i64, Song>>,
    next_id: Arc<AtomicI64>,
}

impl MockSongStore {
    pub fn new() -> Self {
        Self {
            songs: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_song(&self, song: Song) {
        self.next_id.fetch_max(song.id + 1, Ordering::SeqCst);
        self.songs.insert(song.id, song);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: i64) -> bool {
        self.songs.contains_key(&id)
    }
}

#[async_trait]
impl SongStore for MockSongStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Song> {
        self.songs
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("song_id", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Song>> {
        let mut songs: Vec<Song> = self.songs.iter().map(|r| r.value().clone()).collect();
        songs.sort_by_key(|s| s.id);
        Ok(songs)
    }

    async fn create(&self, song: &Song) -> StoreResult<Song> {
        let mut created = song.clone();
        if created.id == 0 {
            created.id = next(&self.next_id);
        }
        self.songs.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, song: &Song) -> StoreResult<()> {
        if !self.songs.contains_key(&song.id) {
            return Err(StoreError::not_found("song_id", song.id));
        }
        self.songs.insert(song.id, song.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.songs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("song_id", id))
    }
}

/// In-memory setlist store
#[derive(Default, Clone)]
pub struct MockSetlistStore {
    setlists: Arc<DashMap<i64, Setlist>>,
    next_id: Arc<AtomicI64>,
}

impl MockSetlistStore {
    pub fn new() -> Self {
        Self {
            setlists: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_setlist(&self, setlist: Setlist) {
        self.next_id.fetch_max(setlist.id + 1, Ordering::SeqCst);
        self.setlists.insert(setlist.id, setlist);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: i64) -> bool {
        self.setlists.contains_key(&id)
    }
}

#[async_trait]
impl SetlistStore for MockSetlistStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Setlist> {
        self.setlists
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("setlist_id", id))
    }

    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<Setlist>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            found.push(
                self.setlists
                    .get(id)
                    .map(|r| r.value().clone())
                    .ok_or_else(|| StoreError::not_found("setlist_id", id))?,
            );
        }
        Ok(found)
    }

    async fn get_all(&self) -> StoreResult<Vec<Setlist>> {
        let mut setlists: Vec<Setlist> = self.setlists.iter().map(|r| r.value().clone()).collect();
        setlists.sort_by_key(|s| s.id);
        Ok(setlists)
    }

    async fn get_by_timeframe(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Setlist>> {
        let mut setlists: Vec<Setlist> = self
            .setlists
            .iter()
            .filter(|r| r.value().deadline >= from && r.value().deadline <= to)
            .map(|r| r.value().clone())
            .collect();
        setlists.sort_by_key(|s| s.id);
        Ok(setlists)
    }

    async fn create(&self, setlist: &Setlist) -> StoreResult<Setlist> {
        let mut created = setlist.clone();
        if created.id == 0 {
            created.id = next(&self.next_id);
        }
        self.setlists.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, setlist: &Setlist) -> StoreResult<Setlist> {
        if !self.setlists.contains_key(&setlist.id) {
            return Err(StoreError::not_found("setlist_id", setlist.id));
        }
        self.setlists.insert(setlist.id, setlist.clone());
        Ok(setlist.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.setlists
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("setlist_id", id))
    }
}

/// In-memory setlist entry store
#[derive(Default, Clone)]
pub struct MockSetlistEntryStore {
    entries: Arc<DashMap<i64, SetlistEntry>>,
    next_id: Arc<AtomicI64>,
}

impl MockSetlistEntryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_entry(&self, entry: SetlistEntry) {
        self.next_id.fetch_max(entry.id + 1, Ordering::SeqCst);
        self.entries.insert(entry.id, entry);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl SetlistEntryStore for MockSetlistEntryStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<SetlistEntry> {
        self.entries
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("setlist_entry_id", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<SetlistEntry>> {
        let mut entries: Vec<SetlistEntry> =
            self.entries.iter().map(|r| r.value().clone()).collect();
        entries.sort_by_key(|e| e.rank);
        Ok(entries)
    }

    async fn get_by_setlists(&self, setlist_ids: &[i64]) -> StoreResult<Vec<SetlistEntry>> {
        let mut entries: Vec<SetlistEntry> = self
            .entries
            .iter()
            .filter(|r| setlist_ids.contains(&r.value().setlist_id))
            .map(|r| r.value().clone())
            .collect();
        entries.sort_by_key(|e| e.rank);
        Ok(entries)
    }

    async fn create_batch(&self, entries: &[SetlistEntry]) -> StoreResult<Vec<SetlistEntry>> {
        let mut created = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut entry = entry.clone();
            if entry.id == 0 {
                entry.id = next(&self.next_id);
            }
            self.entries.insert(entry.id, entry.clone());
            created.push(entry);
        }
        Ok(created)
    }

    async fn update_batch(&self, entries: &[SetlistEntry]) -> StoreResult<()> {
        for entry in entries {
            if !self.entries.contains_key(&entry.id) {
                return Err(StoreError::not_found("setlist_entry_id", entry.id));
            }
        }
        for entry in entries {
            self.entries.insert(entry.id, entry.clone());
        }
        Ok(())
    }

    async fn delete_batch(&self, ids: &[i64]) -> StoreResult<()> {
        for id in ids {
            self.entries.remove(id);
        }
        Ok(())
    }
}

/// In-memory setlist role store
#[derive(Default, Clone)]
pub struct MockSetlistRoleStore {
    roles: Arc<DashMap<i64, SetlistRole>>,
    next_id: Arc<AtomicI64>,
}

impl MockSetlistRoleStore {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_role(&self, role: SetlistRole) {
        self.next_id.fetch_max(role.id + 1, Ordering::SeqCst);
        self.roles.insert(role.id, role);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

#[async_trait]
impl SetlistRoleStore for MockSetlistRoleStore {
    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<SetlistRole>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            found.push(
                self.roles
                    .get(id)
                    .map(|r| r.value().clone())
                    .ok_or_else(|| StoreError::not_found("setlist_role_id", id))?,
            );
        }
        Ok(found)
    }

    async fn get_by_setlists(&self, setlist_ids: &[i64]) -> StoreResult<Vec<SetlistRole>> {
        let mut roles: Vec<SetlistRole> = self
            .roles
            .iter()
            .filter(|r| setlist_ids.contains(&r.value().setlist_id))
            .map(|r| r.value().clone())
            .collect();
        roles.sort_by_key(|r| r.id);
        Ok(roles)
    }

    async fn create_batch(&self, roles: &[SetlistRole]) -> StoreResult<Vec<SetlistRole>> {
        let mut created = Vec::with_capacity(roles.len());
        for role in roles {
            let mut role = role.clone();
            if role.id == 0 {
                role.id = next(&self.next_id);
            }
            self.roles.insert(role.id, role.clone());
            created.push(role);
        }
        Ok(created)
    }

    async fn delete_batch(&self, ids: &[i64]) -> StoreResult<()> {
        for id in ids {
            self.roles.remove(id);
        }
        Ok(())
    }
}

/// In-memory bundle store
#[derive(Default, Clone)]
pub struct MockBundleStore {
    bundles: Arc<DashMap<i64, Bundle>>,
    next_id: Arc<AtomicI64>,
}

impl MockBundleStore {
    pub fn new() -> Self {
        Self {
            bundles: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_bundle(&self, bundle: Bundle) {
        self.next_id.fetch_max(bundle.id + 1, Ordering::SeqCst);
        self.bundles.insert(bundle.id, bundle);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: i64) -> bool {
        self.bundles.contains_key(&id)
    }
}

#[async_trait]
impl BundleStore for MockBundleStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Bundle> {
        self.bundles
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("bundle_id", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Bundle>> {
        let mut bundles: Vec<Bundle> = self.bundles.iter().map(|r| r.value().clone()).collect();
        bundles.sort_by_key(|b| b.id);
        Ok(bundles)
    }

    async fn get_leaves(&self) -> StoreResult<Vec<Bundle>> {
        let mut leaves: Vec<Bundle> = self
            .bundles
            .iter()
            .filter(|candidate| {
                !self
                    .bundles
                    .iter()
                    .any(|other| other.value().parent_id == candidate.value().id)
            })
            .map(|r| r.value().clone())
            .collect();
        leaves.sort_by_key(|b| b.id);
        Ok(leaves)
    }

    async fn create(&self, bundle: &Bundle) -> StoreResult<Bundle> {
        let mut created = bundle.clone();
        if created.id == 0 {
            created.id = next(&self.next_id);
        }
        self.bundles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, bundle: &Bundle) -> StoreResult<()> {
        if !self.bundles.contains_key(&bundle.id) {
            return Err(StoreError::not_found("bundle_id", bundle.id));
        }
        self.bundles.insert(bundle.id, bundle.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.bundles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("bundle_id", id))
    }
}

/// In-memory role store
#[derive(Default, Clone)]
pub struct MockRoleStore {
    roles: Arc<DashMap<i64, Role>>,
    next_id: Arc<AtomicI64>,
}

impl MockRoleStore {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_role(&self, role: Role) {
        self.next_id.fetch_max(role.id + 1, Ordering::SeqCst);
        self.roles.insert(role.id, role);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: i64) -> bool {
        self.roles.contains_key(&id)
    }
}

#[async_trait]
impl RoleStore for MockRoleStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Role> {
        self.roles
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::not_found("role_id", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.iter().map(|r| r.value().clone()).collect();
        roles.sort_by_key(|r| r.id);
        Ok(roles)
    }

    async fn create(&self, role: &Role) -> StoreResult<Role> {
        let mut created = role.clone();
        if created.id == 0 {
            created.id = next(&self.next_id);
        }
        self.roles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, role: &Role) -> StoreResult<()> {
        if !self.roles.contains_key(&role.id) {
            return Err(StoreError::not_found("role_id", role.id));
        }
        self.roles.insert(role.id, role.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.roles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("role_id", id))
    }
}

/// In-memory user-role store
#[derive(Default, Clone)]
pub struct MockUserRoleStore {
    user_roles: Arc<DashMap<i64, UserRole>>,
    next_id: Arc<AtomicI64>,
}

impl MockUserRoleStore {
    pub fn new() -> Self {
        Self {
            user_roles: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn insert_user_role(&self, user_role: UserRole) {
        self.next_id.fetch_max(user_role.id + 1, Ordering::SeqCst);
        self.user_roles.insert(user_role.id, user_role);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.user_roles.len()
    }
}

#[async_trait]
impl UserRoleStore for MockUserRoleStore {
    async fn get_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<UserRole>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            found.push(
                self.user_roles
                    .get(id)
                    .map(|r| r.value().clone())
                    .ok_or_else(|| StoreError::not_found("user_role_id", id))?,
            );
        }
        Ok(found)
    }

    async fn get_all(&self) -> StoreResult<Vec<UserRole>> {
        let mut user_roles: Vec<UserRole> =
            self.user_roles.iter().map(|r| r.value().clone()).collect();
        user_roles.sort_by_key(|ur| ur.id);
        Ok(user_roles)
    }

    async fn get_by_user(&self, user_id: UserId) -> StoreResult<Vec<UserRole>> {
        let mut user_roles: Vec<UserRole> = self
            .user_roles
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        user_roles.sort_by_key(|ur| ur.id);
        Ok(user_roles)
    }

    async fn create_batch(&self, user_roles: &[UserRole]) -> StoreResult<Vec<UserRole>> {
        let mut created = Vec::with_capacity(user_roles.len());
        for user_role in user_roles {
            let mut user_role = user_role.clone();
            if user_role.id == 0 {
                user_role.id = next(&self.next_id);
            }
            self.user_roles.insert(user_role.id, user_role.clone());
            created.push(user_role);
        }
        Ok(created)
    }

    async fn update_batch(&self, user_roles: &[UserRole]) -> StoreResult<()> {
        for user_role in user_roles {
            if !self.user_roles.contains_key(&user_role.id) {
                return Err(StoreError::not_found("user_role_id", user_role.id));
            }
        }
        for user_role in user_roles {
            self.user_roles.insert(user_role.id, user_role.clone());
        }
        Ok(())
    }

    async fn delete_by_role(&self, role_id: i64) -> StoreResult<()> {
        self.user_roles.retain(|_, ur| ur.role_id != role_id);
        Ok(())
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<()> {
        self.user_roles.retain(|_, ur| ur.user_id != user_id);
        Ok(())
    }
}
