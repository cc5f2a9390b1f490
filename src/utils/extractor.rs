//! 路径参数安全提取器
//!
//! 在进入 handler 之前完成格式校验，非法值直接以 400 拒绝。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error};
use futures_util::future::{Ready, ready};

use crate::utils::validate::validate_course_code;

/// 经过格式校验的课程代码路径参数（{course_code}）
#[derive(Debug, Clone)]
pub struct SafeCourseCode(pub String);

impl FromRequest for SafeCourseCode {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("course_code") {
            Some(raw) => match validate_course_code(raw) {
                Ok(()) => Ok(SafeCourseCode(raw.to_string())),
                Err(msg) => Err(error::ErrorBadRequest(msg)),
            },
            None => Err(error::ErrorBadRequest("Missing course_code path parameter")),
        };
        ready(result)
    }
}

impl std::ops::Deref for SafeCourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
