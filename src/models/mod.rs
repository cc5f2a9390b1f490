pub mod announcements;
pub mod auth;
pub mod common;
pub mod courses;
pub mod marks;
pub mod materials;
pub mod users;

pub use common::response::ApiResponse;

/// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub enum ErrorCode {
    Success = 0,

    // 请求参数错误 400xx
    BadRequest = 40000,
    InvalidMarks = 40001,
    MissingCourseCode = 40002,
    InvalidIdentifier = 40003,

    // 认证错误 401xx
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 权限错误 403xx
    Forbidden = 40300,
    NotCourseOwner = 40301,

    // 资源不存在 404xx
    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    StudentNotEnrolled = 40403,
    RecordNotFound = 40404,

    // 冲突 409xx
    UserAlreadyExists = 40901,
    CourseAlreadyExists = 40902,
    AlreadyEnrolled = 40903,

    // 服务器错误 500xx
    InternalServerError = 50000,
}

/// 程序启动时间（用于启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
