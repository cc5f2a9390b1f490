use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::responses::EnrollmentListResponse,
};

/// 课程选课名单（只含选课信息，不含成绩；成绩视图走 marks/section）
pub async fn list_enrollments(
    service: &CourseService,
    course_code: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    match storage.list_enrollments(course_code).await {
        Ok(enrollments) => {
            let total = enrollments.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                EnrollmentListResponse {
                    items: enrollments,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list enrollments for {}: {}", course_code, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list enrollments: {e}"),
                )),
            )
        }
    }
}
