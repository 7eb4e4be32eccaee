//! Canonical login address derivation for callsign accounts.
//!
//! The identity backend only understands email-shaped logins, so every raw
//! callsign maps to a synthetic address under [`LOGIN_DOMAIN`]. The mapping
//! must stay deterministic: a backend account is unique exactly when its
//! normalized callsign is unique.

/// Domain suffix shared by every synthetic login address.
///
/// Changing this value orphans the derived addresses of existing accounts.
pub const LOGIN_DOMAIN: &str = "logbook.local";

/// Normalize a raw callsign for lookup/uniqueness checks.
#[must_use]
pub fn normalize_callsign(callsign: &str) -> String {
    callsign.trim().to_lowercase()
}

/// Map a raw callsign to its canonical login address.
///
/// Total and deterministic for any input; no charset or length validation is
/// applied here, rejecting malformed callsigns is the caller's job. Only
/// ever apply this to raw callsigns: feeding a derived address back in
/// appends the suffix twice.
#[must_use]
pub fn login_address(callsign: &str) -> String {
    format!("{}@{LOGIN_DOMAIN}", normalize_callsign(callsign))
}
