use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::MarkService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    marks::{entities::MarksRecord, requests::MarkSyncRequest, responses::MarksRecordResponse},
    users::entities::User,
};
use crate::storage::Storage;

/// 同步拒绝原因（业务错误码 + 详情）
pub(super) struct SyncRejection {
    pub code: ErrorCode,
    pub message: String,
}

impl SyncRejection {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// 单条同步的完整检查链：
/// 1. 数值域与标识符校验（越界一律拒绝，不截断）
/// 2. 课程必须存在
/// 3. 调用者必须是课程归属教师（Hod/Admin 可越过）
/// 4. 学生必须已选该课程
/// 全部通过后做幂等 upsert。
pub(super) async fn apply_sync(
    storage: &Arc<dyn Storage>,
    caller: &User,
    sync_data: &MarkSyncRequest,
) -> Result<MarksRecord, SyncRejection> {
    if let Err(msg) = sync_data.validate() {
        return Err(SyncRejection::new(ErrorCode::InvalidMarks, msg));
    }

    let course = storage
        .get_course_by_code(&sync_data.course_code)
        .await
        .map_err(|e| {
            SyncRejection::new(
                ErrorCode::InternalServerError,
                format!("Failed to check course: {e}"),
            )
        })?
        .ok_or_else(|| {
            SyncRejection::new(
                ErrorCode::CourseNotFound,
                format!("Course {} not found", sync_data.course_code),
            )
        })?;

    // 课程归属检查：非归属教师只有 Hod/Admin 能写
    if !super::can_manage_course(&course, caller) {
        return Err(SyncRejection::new(
            ErrorCode::NotCourseOwner,
            format!("Course {} is not owned by caller", course.code),
        ));
    }

    let enrollment = storage
        .get_enrollment(&sync_data.student_roll_no, &sync_data.course_code)
        .await
        .map_err(|e| {
            SyncRejection::new(
                ErrorCode::InternalServerError,
                format!("Failed to check enrollment: {e}"),
            )
        })?;

    if enrollment.is_none() {
        return Err(SyncRejection::new(
            ErrorCode::StudentNotEnrolled,
            format!(
                "Student {} is not enrolled in course {}",
                sync_data.student_roll_no, sync_data.course_code
            ),
        ));
    }

    storage.upsert_marks_record(sync_data).await.map_err(|e| {
        SyncRejection::new(
            ErrorCode::InternalServerError,
            format!("Mark sync failed: {e}"),
        )
    })
}

/// 业务错误码到 HTTP 响应的映射
pub(super) fn rejection_response(rejection: SyncRejection) -> HttpResponse {
    let body = ApiResponse::error_empty(rejection.code, rejection.message);
    match rejection.code {
        ErrorCode::InvalidMarks | ErrorCode::InvalidIdentifier => {
            HttpResponse::BadRequest().json(body)
        }
        ErrorCode::NotCourseOwner => HttpResponse::Forbidden().json(body),
        ErrorCode::CourseNotFound | ErrorCode::StudentNotEnrolled => {
            HttpResponse::NotFound().json(body)
        }
        _ => HttpResponse::InternalServerError().json(body),
    }
}

pub async fn sync_marks(
    service: &MarkService,
    sync_data: MarkSyncRequest,
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

    let storage = service.get_storage(request);

    match apply_sync(&storage, &caller, &sync_data).await {
        Ok(record) => {
            info!(
                "Marks synced for ({}, {}) by {}",
                record.student_roll_no, record.course_code, caller.username
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(MarksRecordResponse { record }, "同步成功")))
        }
        Err(rejection) => {
            if rejection.code == ErrorCode::InternalServerError {
                error!("Mark sync failed: {}", rejection.message);
            }
            Ok(rejection_response(rejection))
        }
    }
}
