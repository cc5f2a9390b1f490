use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UserListParams, responses::UserListResponse},
};

pub async fn list_users(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users(query).await {
        Ok(users) => {
            let total = users.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserListResponse {
                    items: users,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list users: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list users: {e}"),
                )),
            )
        }
    }
}
