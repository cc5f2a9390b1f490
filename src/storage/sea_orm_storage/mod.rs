//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod courses;
mod marks;
mod materials;
mod users;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite 实例（测试用），建表后即可使用
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory SQLite");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users(&self, query: UserListParams) -> Result<Vec<User>> {
        self.list_users_impl(query).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn enroll_student(
        &self,
        course_code: &str,
        enroll: EnrollStudentRequest,
    ) -> Result<Enrollment> {
        self.enroll_student_impl(course_code, enroll).await
    }

    async fn list_enrollments(&self, course_code: &str) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl(course_code).await
    }

    async fn get_enrollment(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_roll_no, course_code).await
    }

    // 成绩考勤模块
    async fn upsert_marks_record(&self, sync: &MarkSyncRequest) -> Result<MarksRecord> {
        self.upsert_marks_record_impl(sync).await
    }

    async fn get_marks_record(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<MarksRecord>> {
        self.get_marks_record_impl(student_roll_no, course_code)
            .await
    }

    async fn list_marks_by_course(&self, course_code: &str) -> Result<Vec<MarksRecord>> {
        self.list_marks_by_course_impl(course_code).await
    }

    async fn list_marks_by_student(&self, student_roll_no: &str) -> Result<Vec<MarksRecord>> {
        self.list_marks_by_student_impl(student_roll_no).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        posted_by: &str,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(posted_by, req).await
    }

    async fn list_announcements(
        &self,
        selector: AnnouncementSelector,
    ) -> Result<Vec<Announcement>> {
        self.list_announcements_impl(selector).await
    }

    // 资料模块
    async fn create_material(
        &self,
        posted_by: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        self.create_material_impl(posted_by, req).await
    }

    async fn list_materials(
        &self,
        course_code: &str,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<Material>> {
        self.list_materials_impl(course_code, kind).await
    }
}
