//! Role policy
//!
//! Roles are the catalogue of stage duties and are admin-only to change.
//! Creating one fans out an inactive user-role to every user; deleting
//! one cascades to its user-roles.

use std::sync::Arc;

use stagekit_store::{RoleStore, UserRoleStore, UserStore};
use stagekit_types::{Clearance, Error, Principal, Role, UserRole};

use crate::gate;

pub struct RoleService<R: RoleStore, U: UserStore, UR: UserRoleStore> {
    roles: Arc<R>,
    users: Arc<U>,
    user_roles: Arc<UR>,
}

impl<R: RoleStore, U: UserStore, UR: UserRoleStore> RoleService<R, U, UR> {
    pub fn new(roles: Arc<R>, users: Arc<U>, user_roles: Arc<UR>) -> Self {
        Self {
            roles,
            users,
            user_roles,
        }
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Role, Error> {
        Ok(self.roles.get_by_id(id).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Role>, Error> {
        Ok(self.roles.get_all().await?)
    }

    pub async fn store(&self, role: &Role, principal: &Principal) -> Result<Role, Error> {
        gate::require_clearance(principal, Clearance::Admin, "not authorized to create roles")?;

        let created = self.roles.create(role).await?;

        let users = self.users.get_all().await?;
        let user_roles: Vec<UserRole> = users
            .iter()
            .map(|user| UserRole {
                id: 0,
                user_id: user.id,
                role_id: created.id,
                active: false,
            })
            .collect();

        if !user_roles.is_empty() {
            self.user_roles.create_batch(&user_roles).await?;
        }

        Ok(created)
    }

    pub async fn update(&self, role: &Role, principal: &Principal) -> Result<(), Error> {
        if role.id == 0 {
            return Err(Error::bad_request("id cannot be zero"));
        }

        gate::require_clearance(principal, Clearance::Admin, "not authorized to update roles")?;

        self.roles.get_by_id(role.id).await?;

        Ok(self.roles.update(role).await?)
    }

    pub async fn remove(&self, id: i64, principal: &Principal) -> Result<(), Error> {
        gate::require_clearance(principal, Clearance::Admin, "not authorized to remove roles")?;

        self.roles.delete(id).await?;
        self.user_roles.delete_by_role(id).await?;

        Ok(())
    }
}
