use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MarkService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    marks::{requests::CiaQuery, responses::StudentCiaResponse},
    users::entities::UserRole,
};
use crate::utils::validate::validate_roll_no;

/// 某学生跨课程的成绩考勤记录（按课程代码升序）。
/// 学生角色只能查询自己；教职角色可查询任意学生。
pub async fn student_cia(
    service: &MarkService,
    query: CiaQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if let Err(msg) = validate_roll_no(&query.student_id) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidIdentifier, msg)));
    }

    // 学生只能查询自己的记录
    if caller.role == UserRole::Student && caller.username != query.student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Students may only query their own records",
        )));
    }

    let storage = service.get_storage(request);

    match storage.list_marks_by_student(&query.student_id).await {
        Ok(records) => {
            let total = records.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentCiaResponse {
                    student_roll_no: query.student_id,
                    items: records,
                    total,
                },
                "OK",
            )))
        }
        Err(e) => {
            error!("Failed to list marks for student {}: {}", query.student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list marks: {e}"),
                )),
            )
        }
    }
}
