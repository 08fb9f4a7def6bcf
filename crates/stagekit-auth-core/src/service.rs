//! Auth service - the facade the transport layer calls
//!
//! Ties credential checking to the session lifecycle: authenticate,
//! verify, renew, logout, revoke-all.

use std::sync::Arc;

use stagekit_store::{RefreshTokenStore, StoreError, UserStore};
use stagekit_types::{AccessToken, Error, Principal, TokenPair, UserId};

use crate::password;
use crate::session::SessionManager;
use crate::AuthConfig;

/// One message for every credential failure: wrong password and unknown
/// email must be indistinguishable.
const BAD_CREDENTIALS: &str = "email and/or password is incorrect";

/// The result of a successful login
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub principal: Principal,
    pub tokens: TokenPair,
}

/// Authentication service
pub struct AuthService<U: UserStore, T: RefreshTokenStore> {
    users: Arc<U>,
    sessions: SessionManager<T, U>,
}

impl<U: UserStore, T: RefreshTokenStore> AuthService<U, T> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, users: Arc<U>, tokens: Arc<T>) -> Self {
        Self {
            sessions: SessionManager::new(config, tokens, Arc::clone(&users)),
            users,
        }
    }

    /// Check an email/password pair and hand out a token pair.
    ///
    /// An unknown email still pays for a bcrypt round before failing, so
    /// it is indistinguishable from a wrong password in both response
    /// and timing.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, Error> {
        let user = match self.users.get_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound { .. }) => {
                password::burn(password);
                return Err(Error::not_authorized(BAD_CREDENTIALS));
            }
            Err(err) => return Err(err.into()),
        };

        if !password::verify(password, &user.password) {
            return Err(Error::not_authorized(BAD_CREDENTIALS));
        }

        let principal = user.principal();
        let access = self.sessions.issue_access(&principal)?;
        let refresh = self.sessions.issue_or_rotate_refresh(user.id, None).await?;

        Ok(AuthenticatedUser {
            principal,
            tokens: TokenPair { access, refresh },
        })
    }

    /// Verify a bearer access token and return the embedded principal.
    ///
    /// A missing credential is malformed input; everything else that can
    /// go wrong is an authorization failure.
    pub fn verify(&self, access: &str) -> Result<Principal, Error> {
        if access.is_empty() {
            return Err(Error::bad_request("no access token provided"));
        }

        self.sessions.verify_access(access)
    }

    /// Trade a refresh token for a fresh access token
    pub async fn renew(&self, refresh: &str) -> Result<AccessToken, Error> {
        self.sessions.renew_access(refresh).await
    }

    /// End one session. Safe to call twice.
    pub async fn logout(&self, user_id: UserId, refresh: &str) -> Result<(), Error> {
        self.sessions.revoke_one(user_id, refresh).await
    }

    /// End every session of a user (logout-everywhere, account deletion)
    pub async fn revoke_all_sessions(&self, user_id: UserId) -> Result<(), Error> {
        self.sessions.revoke_all(user_id).await
    }

    /// The underlying session lifecycle manager
    pub fn sessions(&self) -> &SessionManager<T, U> {
        &self.sessions
    }
}

impl<U: UserStore, T: RefreshTokenStore> std::fmt::Debug for AuthService<U, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("sessions", &self.sessions)
            .finish()
    }
}
