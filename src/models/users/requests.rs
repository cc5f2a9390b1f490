use super::entities::{UserRole, UserStatus};
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

// 用户创建请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}
