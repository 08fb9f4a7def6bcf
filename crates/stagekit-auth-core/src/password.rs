//! One-way credential hashing
//!
//! bcrypt with the default cost. Used exactly once per login to check an
//! email/password pair before any token is issued.

use stagekit_types::Error;

/// Hash a plaintext password for storage.
pub fn hash(plaintext: &str) -> Result<String, Error> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        Error::Internal
    })
}

/// Verify a plaintext password against a stored digest.
///
/// Never errors: a malformed digest simply verifies false.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

/// Spend a hashing round on a credential that will be discarded.
///
/// Called when no account matches the given email, so "user not found"
/// costs the same as "wrong password" and accounts cannot be enumerated
/// through response timing.
pub(crate) fn burn(plaintext: &str) {
    let _ = bcrypt::hash(plaintext, bcrypt::DEFAULT_COST);
}
