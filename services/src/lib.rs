pub mod course_service;
pub mod error;
pub mod grade_service;
pub mod roll_call_service;
pub mod scan_service;
pub mod session_service;

pub use course_service::Actor;
pub use error::{AttendanceError, Rejection};

#[cfg(test)]
pub(crate) mod test_support;
