//! User policy
//!
//! Account management. Deleting an account cascades: the user record,
//! their user-roles, and every refresh session die together, so a
//! deleted account cannot renew its way back in.

use std::sync::Arc;

use stagekit_auth_core::{password, SessionManager};
use stagekit_store::{RefreshTokenStore, RoleStore, UserRoleStore, UserStore};
use stagekit_types::{Clearance, Error, Principal, User, UserId, UserRole};

pub struct UserService<U, R, UR, T>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
    T: RefreshTokenStore,
{
    users: Arc<U>,
    roles: Arc<R>,
    user_roles: Arc<UR>,
    sessions: SessionManager<T, U>,
}

impl<U, R, UR, T> UserService<U, R, UR, T>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
    T: RefreshTokenStore,
{
    pub fn new(
        users: Arc<U>,
        roles: Arc<R>,
        user_roles: Arc<UR>,
        sessions: SessionManager<T, U>,
    ) -> Self {
        Self {
            users,
            roles,
            user_roles,
            sessions,
        }
    }

    pub async fn fetch_by_id(&self, id: UserId) -> Result<User, Error> {
        Ok(self.users.get_by_id(id).await?)
    }

    pub async fn fetch_by_email(&self, email: &str) -> Result<User, Error> {
        Ok(self.users.get_by_email(email).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.get_all().await?)
    }

    /// Register a user: hash their password, create the record, and fan
    /// out an inactive user-role for every existing role.
    pub async fn store(&self, user: &User) -> Result<User, Error> {
        let mut user = user.clone();
        if !user.password.is_empty() {
            user.password = password::hash(&user.password)?;
        }

        let created = self.users.create(&user).await?;

        let roles = self.roles.get_all().await?;
        let user_roles: Vec<UserRole> = roles
            .iter()
            .map(|role| UserRole {
                id: 0,
                user_id: created.id,
                role_id: role.id,
                active: false,
            })
            .collect();

        if !user_roles.is_empty() {
            self.user_roles.create_batch(&user_roles).await?;
        }

        Ok(created)
    }

    pub async fn update(&self, user: &User) -> Result<(), Error> {
        if user.id.is_self() {
            return Err(Error::not_found("user_id", 0));
        }

        Ok(self.users.update(user).await?)
    }

    /// Delete an account. `UserId::SELF` (0) targets the acting
    /// principal; deleting anyone else takes admin clearance.
    pub async fn remove(&self, principal: &Principal, id: UserId) -> Result<UserId, Error> {
        let delete_id = if id.is_self() { principal.id } else { id };

        if delete_id != principal.id && !principal.has_clearance(Clearance::Admin) {
            return Err(Error::not_authorized("cannot delete the given user"));
        }

        self.users.get_by_id(delete_id).await?;

        self.users.delete(delete_id).await?;
        self.user_roles.delete_by_user(delete_id).await?;
        self.sessions.revoke_all(delete_id).await?;

        Ok(delete_id)
    }
}
