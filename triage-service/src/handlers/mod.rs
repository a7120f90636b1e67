//! HTTP handlers for the triage service.

pub mod booking;
pub mod diagnosis;
pub mod health;
pub mod hospitals;
pub mod sessions;

pub use booking::book_session;
pub use diagnosis::run_diagnosis;
pub use health::{health_check, readiness_check};
pub use hospitals::list_hospitals;
pub use sessions::list_sessions;
