//! Privileged identity-backend client for account provisioning.
//!
//! The logbook application delegates credential storage and verification to
//! an external identity backend that only understands email-shaped logins.
//! This crate holds the administrative side of that bridge: a client built
//! from server-only configuration that can create, look up, update, and
//! delete backend accounts.
//!
//! Flow Overview:
//! - Load the backend base URL and service key at process start.
//! - Build a fresh [`AdminClient`] per server-side operation; construction
//!   fails fast on missing or malformed configuration and performs no I/O.
//! - Call the account operations with canonical login addresses; each request
//!   carries the service key and no state survives between calls.
//!
//! Security boundaries:
//! - This crate is the only compilation unit that handles the service key.
//!   Link it into server-side binaries only; request-facing code must never
//!   receive an [`AdminClient`] or the key it wraps.
//! - The key lives in a [`secrecy::SecretString`], is redacted from `Debug`
//!   output, and is never serialized, logged, or returned.
//! - Session persistence and token refresh are disabled by construction, so
//!   no privileged session can leak between unrelated requests in a shared
//!   server process.

mod client;
mod error;

pub use client::{Account, AdminClient, AdminClientConfig};
pub use error::Error;
