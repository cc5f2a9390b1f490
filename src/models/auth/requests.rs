use serde::Deserialize;

// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 学号 / 工号 / "admin"
    pub username: String,
    pub password: String,
}
