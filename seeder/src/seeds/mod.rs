pub mod attendance;
pub mod course;
pub mod student;
pub mod user;

/// Username of the fixed lecturer that owns the seeded courses.
pub const LECTURER_USERNAME: &str = "lecturer";
