use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub title: String,
    pub semester: i32,
    pub credits: i32,
    pub category: Option<String>,
    pub faculty_staff_no: String,
}

// 选课请求
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_roll_no: String,
    pub student_name: String,
}
