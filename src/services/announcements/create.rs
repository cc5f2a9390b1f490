use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::{
        entities::AnnouncementScope,
        requests::CreateAnnouncementRequest,
        responses::AnnouncementResponse,
    },
};
use crate::utils::validate::validate_course_code;

pub async fn create_announcement(
    service: &AnnouncementService,
    announcement_data: CreateAnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // posted_by 取自已认证身份，不信任请求体
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

    // Subject 公告必须挂在一门已存在的课程上
    if announcement_data.scope == AnnouncementScope::Subject {
        let course_code = match announcement_data.course_code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MissingCourseCode,
                    "Subject announcements require a course_code",
                )));
            }
        };

        if let Err(msg) = validate_course_code(course_code) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidIdentifier, msg)));
        }

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
    }

    match storage
        .create_announcement(&caller.username, announcement_data)
        .await
    {
        Ok(announcement) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AnnouncementResponse { announcement },
            "公告发布成功",
        ))),
        Err(e) => {
            error!("Failed to create announcement: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create announcement: {e}"),
                )),
            )
        }
    }
}
