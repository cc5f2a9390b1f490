use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MarkService;
use super::sync::apply_sync;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    marks::{
        requests::MarkSyncBatchRequest,
        responses::{BatchSyncResponse, SyncOutcome},
    },
};

/// 批量同步。条目之间互相独立：单条失败不回滚其他条目，
/// 响应逐条汇报，调用方据此区分全部失败与部分失败。
pub async fn sync_marks_batch(
    service: &MarkService,
    batch_data: MarkSyncBatchRequest,
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

    if batch_data.records.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Batch contains no records",
        )));
    }

    let storage = service.get_storage(request);
    let mut results = Vec::with_capacity(batch_data.records.len());

    for sync_data in &batch_data.records {
        match apply_sync(&storage, &caller, sync_data).await {
            Ok(record) => {
                results.push(SyncOutcome::ok(record.student_roll_no, record.course_code));
            }
            Err(rejection) => {
                results.push(SyncOutcome::failed(
                    sync_data.student_roll_no.clone(),
                    sync_data.course_code.clone(),
                    rejection.message,
                ));
            }
        }
    }

    let synced = results.iter().filter(|r| r.synced).count();
    let failed = results.len() - synced;

    info!(
        "Batch sync by {}: {} synced, {} failed",
        caller.username, synced, failed
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BatchSyncResponse {
            synced,
            failed,
            results,
        },
        "批量同步完成",
    )))
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_user;
    use super::*;
    use crate::models::courses::requests::{CreateCourseRequest, EnrollStudentRequest};
    use crate::models::marks::requests::MarkSyncRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use std::sync::Arc;

    fn sync_request(roll_no: &str, cia1_marks: i32, attendance: i32) -> MarkSyncRequest {
        MarkSyncRequest {
            student_roll_no: roll_no.to_string(),
            course_code: "CS3401".to_string(),
            cia1_marks,
            cia1_retest: 0,
            cia2_marks: 48,
            cia2_retest: 0,
            subject_attendance: attendance,
        }
    }

    /// 一门 FAC01 名下的课程，三名选课学生
    async fn seeded_storage() -> Arc<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_in_memory().await);

        storage
            .create_course(CreateCourseRequest {
                code: "CS3401".to_string(),
                title: "Algorithms".to_string(),
                semester: 4,
                credits: 4,
                category: None,
                faculty_staff_no: "FAC01".to_string(),
            })
            .await
            .unwrap();

        for (roll_no, name) in [
            ("21CS001", "Student One"),
            ("21CS002", "Student Two"),
            ("21CS003", "Student Three"),
        ] {
            storage
                .enroll_student(
                    "CS3401",
                    EnrollStudentRequest {
                        student_roll_no: roll_no.to_string(),
                        student_name: name.to_string(),
                    },
                )
                .await
                .unwrap();
        }

        storage
    }

    #[tokio::test]
    async fn test_partial_failure_persists_valid_records() {
        let storage = seeded_storage().await;
        let caller = test_user("FAC01", UserRole::Faculty);

        // 三条中第二条越界（cia1 = 70 > 60），其余两条有效
        let requests = [
            sync_request("21CS001", 55, 80),
            sync_request("21CS002", 70, 90),
            sync_request("21CS003", 42, 68),
        ];

        let mut synced = 0;
        let mut failures = Vec::new();
        for req in &requests {
            match apply_sync(&storage, &caller, req).await {
                Ok(_) => synced += 1,
                Err(rejection) => failures.push((req.student_roll_no.clone(), rejection.code)),
            }
        }

        assert_eq!(synced, 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "21CS002");
        assert_eq!(failures[0].1, ErrorCode::InvalidMarks);

        // 无效条目不回滚有效条目：两行落库，越界的那条没有
        let rows = storage.list_marks_by_course("CS3401").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.student_roll_no != "21CS002"));
    }

    #[tokio::test]
    async fn test_sync_rejected_for_non_owner_and_unenrolled() {
        let storage = seeded_storage().await;

        // 非归属教师被拒，且不落库
        let outsider = test_user("FAC02", UserRole::Faculty);
        let rejection = apply_sync(&storage, &outsider, &sync_request("21CS001", 55, 80))
            .await
            .err()
            .expect("non-owner faculty should be rejected");
        assert_eq!(rejection.code, ErrorCode::NotCourseOwner);
        assert!(
            storage
                .list_marks_by_course("CS3401")
                .await
                .unwrap()
                .is_empty()
        );

        // Hod 越过归属检查
        let hod = test_user("HOD01", UserRole::Hod);
        assert!(
            apply_sync(&storage, &hod, &sync_request("21CS001", 55, 80))
                .await
                .is_ok()
        );

        // 未选课学生被引用完整性检查拒绝
        let owner = test_user("FAC01", UserRole::Faculty);
        let rejection = apply_sync(&storage, &owner, &sync_request("21CS999", 55, 80))
            .await
            .err()
            .expect("unenrolled student should be rejected");
        assert_eq!(rejection.code, ErrorCode::StudentNotEnrolled);
    }
}
