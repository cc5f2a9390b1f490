use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::EnrollStudentRequest, responses::EnrollmentResponse},
};
use crate::utils::validate::validate_roll_no;

pub async fn enroll_student(
    service: &CourseService,
    course_code: &str,
    enroll_data: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_roll_no(&enroll_data.student_roll_no) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidIdentifier, msg)));
    }

    let storage = service.get_storage(request);

    // 选课目标课程必须已存在
    match storage.get_course_by_code(course_code).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {course_code} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to check course {}: {}", course_code, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course: {e}"),
                )),
            );
        }
    }

    match storage.enroll_student(course_code, enroll_data).await {
        Ok(enrollment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            EnrollmentResponse { enrollment },
            "选课成功",
        ))),
        Err(e) => {
            let msg = format!("Enrollment failed: {e}");
            error!("{}", msg);
            // (student_roll_no, course_code) 复合唯一键冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyEnrolled,
                    "Student already enrolled in this course",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
