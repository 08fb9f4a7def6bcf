//! User-role policy
//!
//! A user only ever toggles their own role assignments: the id list is
//! the set of roles that should end up active, everything else of theirs
//! goes inactive.

use std::sync::Arc;

use stagekit_store::UserRoleStore;
use stagekit_types::{Error, Principal, UserRole};

pub struct UserRoleService<UR: UserRoleStore> {
    user_roles: Arc<UR>,
}

impl<UR: UserRoleStore> UserRoleService<UR> {
    pub fn new(user_roles: Arc<UR>) -> Self {
        Self { user_roles }
    }

    pub async fn fetch_all(&self) -> Result<Vec<UserRole>, Error> {
        Ok(self.user_roles.get_all().await?)
    }

    pub async fn fetch_by_user(&self, principal: &Principal) -> Result<Vec<UserRole>, Error> {
        Ok(self.user_roles.get_by_user(principal.id).await?)
    }

    pub async fn set_active_batch(
        &self,
        ids: &[i64],
        principal: &Principal,
    ) -> Result<Vec<UserRole>, Error> {
        let mine = self.user_roles.get_by_user(principal.id).await?;

        for id in ids {
            if !mine.iter().any(|ur| ur.id == *id) {
                return Err(Error::bad_request("invalid id given"));
            }
        }

        let to_update: Vec<UserRole> = mine
            .iter()
            .filter(|ur| ids.contains(&ur.id) != ur.active)
            .map(|ur| UserRole {
                active: !ur.active,
                ..ur.clone()
            })
            .collect();

        if to_update.is_empty() {
            return Err(Error::bad_request("no changes were made"));
        }

        self.user_roles.update_batch(&to_update).await?;

        Ok(to_update)
    }
}
