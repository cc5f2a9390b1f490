use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::responses::CourseListResponse};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => {
            let total = courses.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseListResponse {
                    items: courses,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list courses: {e}"),
                )),
            )
        }
    }
}
