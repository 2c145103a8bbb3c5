pub mod m202510010001_create_users;
pub mod m202510010002_create_courses;
pub mod m202510010003_create_students;
pub mod m202510010004_create_course_students;
pub mod m202510010005_create_session_keys;
pub mod m202510010006_create_attendance_records;
pub mod m202510010007_create_max_marks;
pub mod m202510010008_create_roll_call_sessions;
