use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};
use crate::utils::validate::validate_course_code;

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 课程代码格式校验（哨兵值 "Global" 天然不通过）
    if let Err(msg) = validate_course_code(&course_data.code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidIdentifier, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(CourseResponse { course }, "课程创建成功"))),
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::CourseAlreadyExists,
                    "Course code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
