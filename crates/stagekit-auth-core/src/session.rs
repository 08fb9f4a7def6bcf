//! Session lifecycle management
//!
//! Issues access tokens from valid refresh tokens, rotates refresh
//! tokens on demand, and revokes persisted refresh records. Stateless
//! apart from the injected stores: no caches, no locks.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use stagekit_store::{RefreshTokenStore, StoreError, UserStore};
use stagekit_types::{AccessToken, Error, Principal, RefreshToken, UserId};

use crate::token::{AccessClaims, Claims, RefreshClaims, TokenCodec};
use crate::AuthConfig;

/// Session lifecycle manager.
///
/// All dependencies are constructor-injected; nothing is looked up from
/// ambient scope.
#[derive(Clone)]
pub struct SessionManager<T: RefreshTokenStore, U: UserStore> {
    codec: TokenCodec,
    config: AuthConfig,
    tokens: Arc<T>,
    users: Arc<U>,
}

impl<T: RefreshTokenStore, U: UserStore> SessionManager<T, U> {
    /// Create a new session manager
    pub fn new(config: AuthConfig, tokens: Arc<T>, users: Arc<U>) -> Self {
        Self {
            codec: TokenCodec::new(&config),
            config,
            tokens,
            users,
        }
    }

    /// Mint a fresh access token embedding the given principal snapshot.
    ///
    /// No persistence: access tokens are invalidated only by expiry.
    pub fn issue_access(&self, principal: &Principal) -> Result<AccessToken, Error> {
        let now = Utc::now();
        let claims = AccessClaims {
            principal: principal.clone(),
            iat: now.timestamp(),
            exp: (now + self.config.access_ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let signed = self.codec.encode(&Claims::Access(claims))?;

        Ok(AccessToken { access: signed })
    }

    /// Verify an access token and return the embedded principal.
    ///
    /// Pure CPU work, no storage round trip: the snapshot taken at
    /// issuance is the principal, and its staleness is bounded by the
    /// short access lifetime.
    pub fn verify_access(&self, token: &str) -> Result<Principal, Error> {
        let claims = self.codec.decode_access(token)?;

        Ok(claims.principal)
    }

    /// Return the current refresh token unchanged if it is still valid
    /// for this user, otherwise replace it.
    ///
    /// Rotate-on-demand, not rotate-on-every-use: an active session
    /// keeps its token (no redundant writes, no churn), while a client
    /// presenting a dead token gets its stale record cleaned up and a
    /// fresh token minted.
    pub async fn issue_or_rotate_refresh(
        &self,
        user_id: UserId,
        current: Option<&str>,
    ) -> Result<RefreshToken, Error> {
        if let Some(current) = current.filter(|t| !t.is_empty()) {
            match self.codec.decode_refresh(current) {
                Ok(claims) if claims.uid == user_id => {
                    let id = Uuid::parse_str(&claims.jti).unwrap_or_default();

                    return Ok(RefreshToken {
                        id,
                        user_id,
                        refresh: current.to_string(),
                    });
                }
                // Expired, tampered, or minted for someone else: drop the
                // stale record (absence is a no-op) and fall through.
                Ok(_) | Err(Error::NotAuthorized(_)) => {
                    self.delete_quietly(user_id, current).await?;
                }
                Err(err) => return Err(err),
            }
        }

        self.mint_refresh(user_id).await
    }

    /// Trade a valid refresh token for a fresh access token.
    ///
    /// The new access token embeds the *current* user record, so
    /// clearance or profile changes since login are picked up here.
    pub async fn renew_access(&self, refresh: &str) -> Result<AccessToken, Error> {
        if refresh.is_empty() {
            return Err(Error::bad_request("no refresh token provided"));
        }

        let claims = self.codec.decode_refresh(refresh)?;

        let live = self.tokens.list_all(claims.uid).await.map_err(Error::from)?;
        if !live.iter().any(|t| t == refresh) {
            tracing::debug!("refresh token no longer among live sessions of user {}", claims.uid);
            return Err(Error::not_authorized("token is invalid or expired"));
        }

        let user = self.users.get_by_id(claims.uid).await.map_err(Error::from)?;

        self.issue_access(&user.principal())
    }

    /// Delete exactly one persisted refresh record. Idempotent: revoking
    /// an already-absent token succeeds.
    pub async fn revoke_one(&self, user_id: UserId, token: &str) -> Result<(), Error> {
        self.delete_quietly(user_id, token).await
    }

    /// Delete every persisted refresh record of a user.
    ///
    /// A transport failure mid-way aborts and surfaces, so orphaned
    /// sessions are never silently left behind.
    pub async fn revoke_all(&self, user_id: UserId) -> Result<(), Error> {
        let live = self.tokens.list_all(user_id).await.map_err(Error::from)?;
        for token in &live {
            self.delete_quietly(user_id, token).await?;
        }

        Ok(())
    }

    async fn mint_refresh(&self, user_id: UserId) -> Result<RefreshToken, Error> {
        let now = Utc::now();
        let jti = Uuid::new_v4();
        let claims = RefreshClaims {
            uid: user_id,
            iat: now.timestamp(),
            exp: (now + self.config.refresh_ttl).timestamp(),
            jti: jti.to_string(),
        };
        let signed = self.codec.encode(&Claims::Refresh(claims))?;

        self.tokens
            .create(user_id, &signed, self.config.refresh_ttl)
            .await
            .map_err(Error::from)?;

        Ok(RefreshToken {
            id: jti,
            user_id,
            refresh: signed,
        })
    }

    async fn delete_quietly(&self, user_id: UserId, token: &str) -> Result<(), Error> {
        match self.tokens.delete(user_id, token).await {
            Ok(()) | Err(StoreError::NotFound { .. }) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl<T: RefreshTokenStore, U: UserStore> std::fmt::Debug for SessionManager<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("access_ttl", &self.config.access_ttl)
            .field("refresh_ttl", &self.config.refresh_ttl)
            .finish_non_exhaustive()
    }
}
