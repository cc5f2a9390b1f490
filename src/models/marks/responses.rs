use serde::Serialize;

use super::entities::{MarksRecord, RosterRow};

// 单条记录响应
#[derive(Debug, Serialize)]
pub struct MarksRecordResponse {
    pub record: MarksRecord,
}

// 花名册响应（按学号升序，行集稳定）
#[derive(Debug, Serialize)]
pub struct SectionRosterResponse {
    pub course_code: String,
    pub items: Vec<RosterRow>,
    pub total: usize,
}

// 学生跨课程成绩响应
#[derive(Debug, Serialize)]
pub struct StudentCiaResponse {
    pub student_roll_no: String,
    pub items: Vec<MarksRecord>,
    pub total: usize,
}

// 批量同步中单个 (学号, 课程) 对的处理结果
#[derive(Debug, Serialize)]
pub struct SyncOutcome {
    pub student_roll_no: String,
    pub course_code: String,
    pub synced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncOutcome {
    pub fn ok(student_roll_no: String, course_code: String) -> Self {
        Self {
            student_roll_no,
            course_code,
            synced: true,
            error: None,
        }
    }

    pub fn failed(
        student_roll_no: String,
        course_code: String,
        error: impl Into<String>,
    ) -> Self {
        Self {
            student_roll_no,
            course_code,
            synced: false,
            error: Some(error.into()),
        }
    }
}

// 批量同步响应：调用方可据此区分「全部失败」与「部分失败」
#[derive(Debug, Serialize)]
pub struct BatchSyncResponse {
    pub synced: usize,
    pub failed: usize,
    pub results: Vec<SyncOutcome>,
}
