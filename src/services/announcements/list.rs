use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnnouncementService;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::{requests::AnnouncementListParams, responses::AnnouncementListResponse},
};

pub async fn list_announcements(
    service: &AnnouncementService,
    query: AnnouncementListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 归一化筛选条件（Subject 查询缺 course_code 在此被拒绝）
    let selector = match query.resolve() {
        Ok(selector) => selector,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::MissingCourseCode, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_announcements(selector).await {
        Ok(announcements) => {
            let total = announcements.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AnnouncementListResponse {
                    items: announcements,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list announcements: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list announcements: {e}"),
                )),
            )
        }
    }
}
