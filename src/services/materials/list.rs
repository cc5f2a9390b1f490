use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MaterialService;
use crate::models::{
    ApiResponse, ErrorCode,
    materials::{requests::MaterialListParams, responses::MaterialListResponse},
};

/// 列出某课程的资料。无匹配时返回空列表而非错误。
pub async fn list_materials(
    service: &MaterialService,
    course_code: &str,
    query: MaterialListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_materials(course_code, query.kind).await {
        Ok(materials) => {
            let total = materials.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MaterialListResponse {
                    items: materials,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list materials for {}: {}", course_code, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list materials: {e}"),
                )),
            )
        }
    }
}
