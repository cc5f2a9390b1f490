use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    materials::{requests::CreateMaterialRequest, responses::MaterialResponse},
};
use crate::utils::validate::validate_course_code;

pub async fn create_material(
    service: &MaterialService,
    material_data: CreateMaterialRequest,
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

    if let Err(msg) = validate_course_code(&material_data.course_code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidIdentifier, msg)));
    }

    let storage = service.get_storage(request);

    // 资料必须挂在一门已存在的课程上
    match storage.get_course_by_code(&material_data.course_code).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {} not found", material_data.course_code),
            )));
        }
        Err(e) => {
            error!("Failed to check course {}: {}", material_data.course_code, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course: {e}"),
                )),
            );
        }
    }

    match storage
        .create_material(&caller.username, material_data)
        .await
    {
        Ok(material) => Ok(HttpResponse::Created().json(ApiResponse::success(
            MaterialResponse { material },
            "资料记录创建成功",
        ))),
        Err(e) => {
            error!("Failed to create material: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create material: {e}"),
                )),
            )
        }
    }
}
