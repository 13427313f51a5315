//! Authentication for the BrickScout API.
//!
//! Tokens are obtained with the OAuth password grant and cached on disk
//! under the account's username, so later calls (and later processes) reuse
//! them without another round trip.
//!
//! # Overview
//!
//! - [`AuthHandler`]: Looks up cached tokens and authenticates on a miss
//! - [`TokenPayload`]: The token response, stored and returned verbatim
//! - [`AuthError`]: Authentication failures
//!
//! # Token Freshness
//!
//! Cached tokens are never checked for expiry and never refreshed. Delete
//! the cache entry for the username to force a new password grant.

mod errors;
mod handler;
mod token;

pub use errors::AuthError;
pub use handler::AuthHandler;
pub use token::TokenPayload;
