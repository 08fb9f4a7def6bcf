//! Authorization entry-point helpers

use stagekit_types::{Clearance, Error, Principal};

/// Unwrap the principal attached to a request.
///
/// Token verification either attaches a principal or fails the request
/// outright, so policies always receive a concrete `&Principal`. This is
/// the single place an absent principal is turned into a failure; no
/// policy re-checks it ad hoc.
pub fn require_principal(principal: Option<&Principal>) -> Result<&Principal, Error> {
    principal.ok_or_else(|| Error::not_authorized("no principal attached to the request"))
}

/// Fail-fast clearance gate.
///
/// Used where an operation has no ownership fallback; failing here
/// always ends the decision without further lookups.
pub fn require_clearance(
    principal: &Principal,
    minimum: Clearance,
    denial: &str,
) -> Result<(), Error> {
    if principal.has_clearance(minimum) {
        Ok(())
    } else {
        Err(Error::not_authorized(denial))
    }
}
