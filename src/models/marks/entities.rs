use serde::{Deserialize, Serialize};

/// CIA 单次考试满分（原始卷面与重考同一量程）
pub const CIA_MAX_MARK: i32 = 60;
/// 考勤百分比上限
pub const ATTENDANCE_MAX: i32 = 100;
/// 考勤红线：低于 75% 视为课时不足（全局固定，不允许按课程配置）
pub const ATTENDANCE_THRESHOLD: i32 = 75;

/// 考勤是否低于红线
pub fn below_attendance_threshold(subject_attendance: i32) -> bool {
    subject_attendance < ATTENDANCE_THRESHOLD
}

// 成绩考勤记录：每个 (学号, 课程代码) 对至多一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksRecord {
    pub id: i64,
    pub student_roll_no: String,
    pub course_code: String,
    // CIA 1 与重考（量程 0..=60，重考是独立覆盖通道，不做平均）
    pub cia1_marks: i32,
    pub cia1_retest: i32,
    // CIA 2 与重考
    pub cia2_marks: i32,
    pub cia2_retest: i32,
    // 科目考勤百分比（0..=100）
    pub subject_attendance: i32,
    /// 派生字段，读取时计算，不落库
    pub below_attendance_threshold: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 花名册行：即使从未同步过成绩，选了课的学生也必须出现（数值字段为 0）
#[derive(Debug, Clone, Serialize)]
pub struct RosterRow {
    pub student_roll_no: String,
    pub student_name: String,
    pub cia1_marks: i32,
    pub cia1_retest: i32,
    pub cia2_marks: i32,
    pub cia2_retest: i32,
    pub subject_attendance: i32,
    pub below_attendance_threshold: bool,
    /// 该行是否已有落库记录
    pub synced: bool,
}

impl RosterRow {
    /// 未同步学生的占位行（数值清零，便于前端展示稳定可编辑的行集）
    pub fn unsynced(student_roll_no: String, student_name: String) -> Self {
        Self {
            student_roll_no,
            student_name,
            cia1_marks: 0,
            cia1_retest: 0,
            cia2_marks: 0,
            cia2_retest: 0,
            subject_attendance: 0,
            below_attendance_threshold: below_attendance_threshold(0),
            synced: false,
        }
    }

    pub fn from_record(student_name: String, record: &MarksRecord) -> Self {
        Self {
            student_roll_no: record.student_roll_no.clone(),
            student_name,
            cia1_marks: record.cia1_marks,
            cia1_retest: record.cia1_retest,
            cia2_marks: record.cia2_marks,
            cia2_retest: record.cia2_retest,
            subject_attendance: record.subject_attendance,
            below_attendance_threshold: record.below_attendance_threshold,
            synced: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_threshold_derivation() {
        // 红线派生：[0, 74, 75, 100] -> [true, true, false, false]
        assert!(below_attendance_threshold(0));
        assert!(below_attendance_threshold(74));
        assert!(!below_attendance_threshold(75));
        assert!(!below_attendance_threshold(100));
    }

    #[test]
    fn test_unsynced_row_is_zeroed() {
        let row = RosterRow::unsynced("21CS001".to_string(), "Student One".to_string());
        assert_eq!(row.cia1_marks, 0);
        assert_eq!(row.cia2_retest, 0);
        assert_eq!(row.subject_attendance, 0);
        assert!(row.below_attendance_threshold);
        assert!(!row.synced);
    }
}
