use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use tracing::error;

use super::MarkService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::entities::Enrollment,
    marks::{
        entities::{MarksRecord, RosterRow},
        requests::SectionQuery,
        responses::SectionRosterResponse,
    },
};

/// 以学号为键合并花名册与落库记录。行集 = 选课学生全集（按学号升序）：
/// 已同步的学生带落库数值，从未同步的学生以零值占位行出现。
/// 不在花名册上的孤儿记录不会出现在视图中。
pub(super) fn merge_roster(
    enrollments: Vec<Enrollment>,
    records: &[MarksRecord],
) -> Vec<RosterRow> {
    let mut by_roll_no: HashMap<&str, _> = records
        .iter()
        .map(|record| (record.student_roll_no.as_str(), record))
        .collect();

    enrollments
        .into_iter()
        .map(|enrollment| {
            match by_roll_no.remove(enrollment.student_roll_no.as_str()) {
                Some(record) => RosterRow::from_record(enrollment.student_name, record),
                None => RosterRow::unsynced(enrollment.student_roll_no, enrollment.student_name),
            }
        })
        .collect()
}

/// 课程花名册视图。仅课程归属教师与 Hod/Admin 可读（与成绩写入同一条归属规则）。
pub async fn section_roster(
    service: &MarkService,
    query: SectionQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let storage = service.get_storage(request);

    let course = match storage.get_course_by_code(&query.course_code).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {} not found", query.course_code),
            )));
        }
        Err(e) => {
            error!("Failed to check course {}: {}", query.course_code, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course: {e}"),
                )),
            );
        }
    };

    // 花名册与成绩写入同权：非归属教师只有 Hod/Admin 能读
    if !super::can_manage_course(&course, &caller) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotCourseOwner,
            format!("Course {} is not owned by caller", course.code),
        )));
    }

    let enrollments = match storage.list_enrollments(&query.course_code).await {
        Ok(enrollments) => enrollments,
        Err(e) => {
            error!("Failed to list enrollments for {}: {}", query.course_code, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list enrollments: {e}"),
                )),
            );
        }
    };

    let records = match storage.list_marks_by_course(&query.course_code).await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to list marks for {}: {}", query.course_code, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list marks: {e}"),
                )),
            );
        }
    };

    let items = merge_roster(enrollments, &records);
    let total = items.len();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SectionRosterResponse {
            course_code: query.course_code,
            items,
            total,
        },
        "OK",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marks::entities::below_attendance_threshold;

    fn enrollment(roll_no: &str, name: &str) -> Enrollment {
        Enrollment {
            id: 0,
            student_roll_no: roll_no.to_string(),
            student_name: name.to_string(),
            course_code: "CS3401".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn record(roll_no: &str, attendance: i32) -> MarksRecord {
        MarksRecord {
            id: 0,
            student_roll_no: roll_no.to_string(),
            course_code: "CS3401".to_string(),
            cia1_marks: 50,
            cia1_retest: 0,
            cia2_marks: 45,
            cia2_retest: 0,
            subject_attendance: attendance,
            below_attendance_threshold: below_attendance_threshold(attendance),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_roster_is_complete_with_zeroed_defaults() {
        // 三名选课学生，只有一人同步过成绩
        let enrollments = vec![
            enrollment("21CS001", "Student One"),
            enrollment("21CS002", "Student Two"),
            enrollment("21CS003", "Student Three"),
        ];
        let records = vec![record("21CS002", 80)];

        let rows = merge_roster(enrollments, &records);
        assert_eq!(rows.len(), 3);

        // 未同步的行数值清零且标红（0 < 75）
        assert!(!rows[0].synced);
        assert_eq!(rows[0].cia1_marks, 0);
        assert_eq!(rows[0].subject_attendance, 0);
        assert!(rows[0].below_attendance_threshold);

        // 已同步的行带落库数值
        assert!(rows[1].synced);
        assert_eq!(rows[1].student_roll_no, "21CS002");
        assert_eq!(rows[1].cia1_marks, 50);
        assert!(!rows[1].below_attendance_threshold);

        assert!(!rows[2].synced);
    }

    #[test]
    fn test_orphan_records_excluded_from_roster() {
        // 落库记录的学生不在花名册上时不出现在视图中
        let enrollments = vec![enrollment("21CS001", "Student One")];
        let records = vec![record("21CS001", 90), record("21CS999", 50)];

        let rows = merge_roster(enrollments, &records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_roll_no, "21CS001");
    }
}
