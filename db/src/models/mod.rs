pub mod attendance_record;
pub mod course;
pub mod course_student;
pub mod max_marks;
pub mod roll_call_session;
pub mod session_key;
pub mod student;
pub mod user;

pub use attendance_record::Entity as AttendanceRecord;
pub use course::Entity as Course;
pub use course_student::Entity as CourseStudent;
pub use max_marks::Entity as MaxMarks;
pub use roll_call_session::Entity as RollCallSession;
pub use session_key::Entity as SessionKey;
pub use student::Entity as Student;
pub use user::Entity as User;
