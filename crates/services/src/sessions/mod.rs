mod registry;
mod service;

// Public API of the session subsystem.
pub use crate::error::ServiceError;
pub use registry::{SessionHandle, SessionId, SessionRegistry};
pub use service::SessionService;
