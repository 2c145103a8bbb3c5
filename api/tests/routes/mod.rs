mod attendance;
mod auth_test;
mod courses_test;
mod dashboard_test;
mod grades_test;
mod health_test;
