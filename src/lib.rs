//! # Logbook Identity (Callsign Login Bridge)
//!
//! `logbook-identity` lets users of the internal logbook application sign in
//! with a short callsign while account storage and verification stay with an
//! external identity backend that only understands email-shaped logins.
//!
//! ## Canonical Login Addresses
//!
//! Raw callsigns are trimmed, lowercased, and suffixed with a fixed domain
//! to form a synthetic login address (`AB123` -> `ab123@logbook.local`).
//! The mapping is pure and deterministic, so backend uniqueness of the
//! address is equivalent to uniqueness of the normalized callsign. See
//! [`identity`].
//!
//! ## Privileged Admin Access
//!
//! Account provisioning goes through the `admin_client` crate, the only
//! compilation unit that handles the server-only service key. It is linked
//! into server-side binaries such as the operator CLI in this package and
//! must never be reachable from request-facing code.

pub mod cli;
pub mod identity;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
