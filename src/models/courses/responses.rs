use super::entities::{Course, Enrollment};
use serde::Serialize;

// 课程响应
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub total: usize,
}

// 选课响应
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// 选课名单响应（按学号升序）
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub items: Vec<Enrollment>,
    pub total: usize,
}
