//! Signed-token codec
//!
//! Encodes and decodes the two token kinds as HS256 JWTs. The signing
//! algorithm is pinned at decode time, so "none" or mismatched-algorithm
//! tokens are rejected outright. Any decode failure - bad signature,
//! wrong algorithm, expired, malformed payload - surfaces as the same
//! `NotAuthorized`, without revealing which check failed.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use stagekit_types::{Error, Principal, UserId};

use crate::AuthConfig;

/// Claims carried by an access token: a full principal snapshot plus the
/// temporal claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "user")]
    pub principal: Principal,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Claims carried by a refresh token: only the user id plus the temporal
/// claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub uid: UserId,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Decoded token payload, tagged by kind.
///
/// Only produced by [`TokenCodec::decode`]; callers never construct
/// claims themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Claims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl Claims {
    /// The kind of token these claims came from
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Access(_) => TokenKind::Access,
            Self::Refresh(_) => TokenKind::Refresh,
        }
    }
}

/// The two token kinds the codec knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Codec for signing and verifying both token kinds.
///
/// Keys are pre-built once so signing does not re-derive them per call.
#[derive(Clone)]
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Build a codec from the configured secrets
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Sign claims into a token string.
    ///
    /// Fails only on signing or serialization problems, which are
    /// internal faults, never the caller's.
    pub fn encode(&self, claims: &Claims) -> Result<String, Error> {
        match claims {
            Claims::Access(claims) => self.encode_inner(claims, &self.access_encoding),
            Claims::Refresh(claims) => self.encode_inner(claims, &self.refresh_encoding),
        }
    }

    /// Verify and decode a token of the expected kind.
    pub fn decode(&self, token: &str, kind: TokenKind) -> Result<Claims, Error> {
        match kind {
            TokenKind::Access => self.decode_access(token).map(Claims::Access),
            TokenKind::Refresh => self.decode_refresh(token).map(Claims::Refresh),
        }
    }

    /// Verify and decode an access token
    pub fn decode_access(&self, token: &str) -> Result<AccessClaims, Error> {
        self.decode_inner(token, &self.access_decoding)
    }

    /// Verify and decode a refresh token
    pub fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, Error> {
        self.decode_inner(token, &self.refresh_decoding)
    }

    fn encode_inner<C: Serialize>(&self, claims: &C, key: &EncodingKey) -> Result<String, Error> {
        encode(&Header::new(Algorithm::HS256), claims, key).map_err(|e| {
            tracing::error!("could not sign token: {e}");
            Error::Internal
        })
    }

    fn decode_inner<C: DeserializeOwned>(
        &self,
        token: &str,
        key: &DecodingKey,
    ) -> Result<C, Error> {
        decode::<C>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {e}");
                Error::not_authorized("token is invalid or expired")
            })
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}
