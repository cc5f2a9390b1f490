use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    /// 规范课程代码，如 "CS3401"（大小写敏感）
    pub code: String,
    pub title: String,
    pub semester: i32,
    pub credits: i32,
    pub category: Option<String>,
    /// 负责该课程的教师工号（成绩录入归属检查依据）
    pub faculty_staff_no: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录（课程花名册的一行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_roll_no: String,
    pub student_name: String,
    pub course_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
