use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementSelector, CreateAnnouncementRequest},
    },
    courses::{
        entities::{Course, Enrollment},
        requests::{CreateCourseRequest, EnrollStudentRequest},
    },
    marks::{entities::MarksRecord, requests::MarkSyncRequest},
    materials::{
        entities::{Material, MaterialKind},
        requests::CreateMaterialRequest,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListParams},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名（学号/工号）获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self, query: UserListParams) -> Result<Vec<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（启动时判断是否需要种子管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过课程代码获取课程
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 学生选课（加入花名册）
    async fn enroll_student(
        &self,
        course_code: &str,
        enroll: EnrollStudentRequest,
    ) -> Result<Enrollment>;
    // 课程花名册（按学号升序）
    async fn list_enrollments(&self, course_code: &str) -> Result<Vec<Enrollment>>;
    // 查询某学生在某课程的选课记录（同步时的引用完整性检查）
    async fn get_enrollment(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<Enrollment>>;

    /// 成绩考勤同步方法
    // 幂等 upsert：不存在则创建，存在则整体覆盖全部数值字段（last-write-wins）
    async fn upsert_marks_record(&self, sync: &MarkSyncRequest) -> Result<MarksRecord>;
    // 查询某 (学号, 课程) 对的记录
    async fn get_marks_record(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<MarksRecord>>;
    // 某课程的全部记录
    async fn list_marks_by_course(&self, course_code: &str) -> Result<Vec<MarksRecord>>;
    // 某学生跨课程的全部记录
    async fn list_marks_by_student(&self, student_roll_no: &str) -> Result<Vec<MarksRecord>>;

    /// 公告方法
    // 发布公告（posted_by 为已认证身份）
    async fn create_announcement(
        &self,
        posted_by: &str,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    // 按归一化筛选器列出公告（插入顺序）
    async fn list_announcements(&self, selector: AnnouncementSelector)
    -> Result<Vec<Announcement>>;

    /// 课程资料方法
    // 上传资料记录（文件本体由外部存储）
    async fn create_material(
        &self,
        posted_by: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material>;
    // 按课程（可选类别）列出资料
    async fn list_materials(
        &self,
        course_code: &str,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<Material>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
