pub mod batch;
pub mod cia;
pub mod section;
pub mod sync;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::entities::Course;
use crate::models::marks::requests::{CiaQuery, MarkSyncBatchRequest, MarkSyncRequest, SectionQuery};
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 课程归属检查：归属教师本人，或可越过归属检查的 Hod/Admin。
/// 成绩写入（sync/batch）与花名册读取（section）共用同一条规则。
pub(super) fn can_manage_course(course: &Course, caller: &User) -> bool {
    course.faculty_staff_no == caller.username || caller.role.is_supervisor()
}

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 单条成绩考勤同步（幂等 upsert）
    pub async fn sync_marks(
        &self,
        sync_data: MarkSyncRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sync::sync_marks(self, sync_data, request).await
    }

    // 批量同步：各条目互相独立，逐条汇报结果
    pub async fn sync_marks_batch(
        &self,
        batch_data: MarkSyncBatchRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch::sync_marks_batch(self, batch_data, request).await
    }

    // 课程花名册视图（选课学生全集 + 已同步成绩合并）
    pub async fn section_roster(
        &self,
        query: SectionQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        section::section_roster(self, query, request).await
    }

    // 某学生跨课程的成绩考勤记录
    pub async fn student_cia(
        &self,
        query: CiaQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        cia::student_cia(self, query, request).await
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserStatus};

    pub(crate) fn test_course(code: &str, faculty_staff_no: &str) -> Course {
        Course {
            id: 1,
            code: code.to_string(),
            title: "Algorithms".to_string(),
            semester: 4,
            credits: 4,
            category: None,
            faculty_staff_no: faculty_staff_no.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    pub(crate) fn test_user(username: &str, role: UserRole) -> User {
        User {
            id: 1,
            username: username.to_string(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_course_management_rule() {
        let course = test_course("CS3401", "FAC01");

        // 归属教师本人可以管理
        assert!(can_manage_course(
            &course,
            &test_user("FAC01", UserRole::Faculty)
        ));
        // 其他教师不行
        assert!(!can_manage_course(
            &course,
            &test_user("FAC02", UserRole::Faculty)
        ));
        // Hod/Admin 越过归属检查
        assert!(can_manage_course(
            &course,
            &test_user("HOD01", UserRole::Hod)
        ));
        assert!(can_manage_course(
            &course,
            &test_user("admin", UserRole::Admin)
        ));
        assert!(!can_manage_course(
            &course,
            &test_user("21CS001", UserRole::Student)
        ));
    }
}
