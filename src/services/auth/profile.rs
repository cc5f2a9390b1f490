use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::responses::UserResponse};

use super::AuthService;

/// 返回当前已认证用户的信息（RequireJWT 已把用户放入请求扩展）
pub async fn handle_me(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "OK")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}
