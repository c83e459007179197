#![forbid(unsafe_code)]

pub mod dashboard_service;
pub mod error;
pub mod pages;
pub mod quotes;
pub mod sessions;

pub use momentum_core::Clock;
pub use sessions as session;

pub use dashboard_service::DashboardService;
pub use error::ServiceError;
pub use pages::{Page, PageParseError, PageView};
pub use quotes::QuotePicker;
pub use sessions::{SessionHandle, SessionId, SessionRegistry, SessionService};
