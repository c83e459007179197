//! Shared error types for the services crate.

use thiserror::Error;

use crate::sessions::SessionId;

/// Errors emitted by session lookups.
///
/// Mutations themselves never fail; only addressing a session that was never
/// opened (or already ended) does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("no session with id {0}")]
    UnknownSession(SessionId),
}
