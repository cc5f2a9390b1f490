use serde::Deserialize;

use super::entities::{ATTENDANCE_MAX, CIA_MAX_MARK};
use crate::utils::validate::{validate_course_code, validate_roll_no};

// 单条成绩同步请求（幂等：同一负载重复提交产生相同的落库状态）
#[derive(Debug, Clone, Deserialize)]
pub struct MarkSyncRequest {
    pub student_roll_no: String,
    pub course_code: String,
    pub cia1_marks: i32,
    pub cia1_retest: i32,
    pub cia2_marks: i32,
    pub cia2_retest: i32,
    pub subject_attendance: i32,
}

impl MarkSyncRequest {
    /// 校验标识符与数值域。越界值一律拒绝，不做截断。
    pub fn validate(&self) -> Result<(), String> {
        validate_roll_no(&self.student_roll_no).map_err(str::to_string)?;
        validate_course_code(&self.course_code).map_err(str::to_string)?;

        for (field, value) in [
            ("cia1_marks", self.cia1_marks),
            ("cia1_retest", self.cia1_retest),
            ("cia2_marks", self.cia2_marks),
            ("cia2_retest", self.cia2_retest),
        ] {
            if !(0..=CIA_MAX_MARK).contains(&value) {
                return Err(format!(
                    "{field} 超出范围: {value} (允许 0..={CIA_MAX_MARK})"
                ));
            }
        }

        if !(0..=ATTENDANCE_MAX).contains(&self.subject_attendance) {
            return Err(format!(
                "subject_attendance 超出范围: {} (允许 0..={ATTENDANCE_MAX})",
                self.subject_attendance
            ));
        }

        Ok(())
    }
}

// 批量同步请求：各条目互相独立，单条失败不回滚其他条目
#[derive(Debug, Deserialize)]
pub struct MarkSyncBatchRequest {
    pub records: Vec<MarkSyncRequest>,
}

// 花名册查询参数
#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    pub course_code: String,
}

// 学生跨课程成绩查询参数
#[derive(Debug, Deserialize)]
pub struct CiaQuery {
    pub student_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> MarkSyncRequest {
        MarkSyncRequest {
            student_roll_no: "21CS001".to_string(),
            course_code: "CS3401".to_string(),
            cia1_marks: 55,
            cia1_retest: 0,
            cia2_marks: 58,
            cia2_retest: 0,
            subject_attendance: 80,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_cia_mark_above_ceiling_rejected() {
        let mut req = valid_request();
        req.cia2_marks = 70; // 超过 60 分上限
        let err = req.validate().unwrap_err();
        assert!(err.contains("cia2_marks"));
    }

    #[test]
    fn test_negative_mark_rejected() {
        let mut req = valid_request();
        req.cia1_retest = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_attendance_above_hundred_rejected() {
        let mut req = valid_request();
        req.subject_attendance = 101;
        let err = req.validate().unwrap_err();
        assert!(err.contains("subject_attendance"));
    }

    #[test]
    fn test_boundary_values_accepted() {
        let mut req = valid_request();
        req.cia1_marks = 0;
        req.cia2_marks = 60;
        req.subject_attendance = 100;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        let mut req = valid_request();
        req.student_roll_no = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.course_code = String::new();
        assert!(req.validate().is_err());
    }
}
