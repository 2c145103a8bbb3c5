//! Response payloads shared by several route groups.

use db::models::{course, student};
use serde::Serialize;

#[derive(Debug, Serialize, Default, Clone)]
pub struct CourseResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub lecturer_id: i64,
    pub total_lectures_possible: i32,
}

impl From<course::Model> for CourseResponse {
    fn from(c: course::Model) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
            lecturer_id: c.lecturer_id,
            total_lectures_possible: c.total_lectures_possible,
        }
    }
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct StudentResponse {
    pub index_number: String,
    pub full_name: String,
}

impl From<student::Model> for StudentResponse {
    fn from(s: student::Model) -> Self {
        Self {
            index_number: s.index_number,
            full_name: s.full_name,
        }
    }
}

/// A page that starts with picking one of the caller's courses.
#[derive(Debug, Serialize, Default)]
pub struct CoursePickerResponse {
    pub title: String,
    pub courses: Vec<CourseResponse>,
}

impl CoursePickerResponse {
    pub fn new(title: &str, courses: Vec<course::Model>) -> Self {
        Self {
            title: title.to_owned(),
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}
