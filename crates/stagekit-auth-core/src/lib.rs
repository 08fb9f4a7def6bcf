//! Stagekit Auth Core - Authentication business logic
//!
//! Issuance, verification, and revocation of signed session tokens, plus
//! credential hashing. The pieces:
//! - [`token`] - the signed-token codec (access and refresh kinds)
//! - [`session`] - the session lifecycle manager (issue/rotate/renew/revoke)
//! - [`password`] - one-way credential hashing
//! - [`service`] - the facade the transport layer calls

pub mod config;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use config::AuthConfig;
pub use service::{AuthService, AuthenticatedUser};
pub use session::SessionManager;
pub use token::{AccessClaims, Claims, RefreshClaims, TokenCodec, TokenKind};
