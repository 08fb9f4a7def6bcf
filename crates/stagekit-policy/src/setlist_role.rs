//! Setlist role policy - batch delegation
//!
//! Assigning or removing setlist roles touches many records at once.
//! Without the admin bypass, every referenced user-role must belong to
//! the acting principal; one foreign record fails the whole batch, so a
//! grant is always all-or-nothing.

use std::sync::Arc;

use stagekit_store::{SetlistRoleStore, SetlistStore, UserRoleStore};
use stagekit_types::{Clearance, Error, Principal, Setlist, SetlistRole};

pub struct SetlistRoleService<SR: SetlistRoleStore, SL: SetlistStore, UR: UserRoleStore> {
    setlist_roles: Arc<SR>,
    setlists: Arc<SL>,
    user_roles: Arc<UR>,
}

impl<SR: SetlistRoleStore, SL: SetlistStore, UR: UserRoleStore>
    SetlistRoleService<SR, SL, UR>
{
    pub fn new(setlist_roles: Arc<SR>, setlists: Arc<SL>, user_roles: Arc<UR>) -> Self {
        Self {
            setlist_roles,
            setlists,
            user_roles,
        }
    }

    pub async fn fetch(&self, setlists: &[Setlist]) -> Result<Vec<SetlistRole>, Error> {
        let ids: Vec<i64> = setlists.iter().map(|s| s.id).collect();

        Ok(self.setlist_roles.get_by_setlists(&ids).await?)
    }

    pub async fn store(
        &self,
        roles: &[SetlistRole],
        principal: &Principal,
    ) -> Result<Vec<SetlistRole>, Error> {
        // an empty grant is a no-op, not an error, and writes nothing
        if roles.is_empty() {
            return Ok(Vec::new());
        }

        if !principal.has_clearance(Clearance::Admin) {
            let user_role_ids: Vec<i64> = roles.iter().map(|r| r.user_role_id).collect();
            self.ensure_all_owned(&user_role_ids, principal).await?;
        }

        let setlist_ids: Vec<i64> = roles.iter().map(|r| r.setlist_id).collect();
        self.setlists.get_by_ids(&setlist_ids).await?;

        Ok(self.setlist_roles.create_batch(roles).await?)
    }

    pub async fn remove(&self, ids: &[i64], principal: &Principal) -> Result<(), Error> {
        if ids.is_empty() {
            return Ok(());
        }

        let roles = self.setlist_roles.get_by_ids(ids).await?;

        if !principal.has_clearance(Clearance::Admin) {
            let user_role_ids: Vec<i64> = roles.iter().map(|r| r.user_role_id).collect();
            self.ensure_all_owned(&user_role_ids, principal).await?;
        }

        Ok(self.setlist_roles.delete_batch(ids).await?)
    }

    /// Every referenced user-role must resolve and belong to the acting
    /// principal. A missing record surfaces as `NotFound` from the
    /// store; a foreign one denies the whole batch.
    async fn ensure_all_owned(
        &self,
        user_role_ids: &[i64],
        principal: &Principal,
    ) -> Result<(), Error> {
        let user_roles = self.user_roles.get_by_ids(user_role_ids).await?;

        if user_roles.iter().any(|ur| ur.user_id != principal.id) {
            return Err(Error::not_authorized(
                "cannot change the setlist role of someone else",
            ));
        }

        Ok(())
    }
}
