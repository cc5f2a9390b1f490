use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

// 学号：纯大写字母与数字，如 21CS001
static ROLL_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid roll no regex"));

// 课程代码：大写字母开头，后接字母或数字，如 CS3401
static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]*$").expect("Invalid course code regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 16（学号/工号直接作用户名）
    if username.len() < 3 || username.len() > 16 {
        return Err("Username length must be between 3 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_roll_no(roll_no: &str) -> Result<(), &'static str> {
    if roll_no.is_empty() || roll_no.len() > 16 {
        return Err("Roll number length must be between 1 and 16 characters");
    }
    if !ROLL_NO_RE.is_match(roll_no) {
        return Err("Roll number must contain only uppercase letters and digits");
    }
    Ok(())
}

pub fn validate_course_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() || code.len() > 16 {
        return Err("Course code length must be between 1 and 16 characters");
    }
    if !COURSE_CODE_RE.is_match(code) {
        return Err("Course code must start with an uppercase letter");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roll_no() {
        assert!(validate_roll_no("21CS001").is_ok());
        assert!(validate_roll_no("20EC042").is_ok());
    }

    #[test]
    fn test_invalid_roll_no() {
        assert!(validate_roll_no("").is_err());
        assert!(validate_roll_no("21cs001").is_err());
        assert!(validate_roll_no("21 CS 001").is_err());
    }

    #[test]
    fn test_valid_course_code() {
        assert!(validate_course_code("CS3401").is_ok());
        assert!(validate_course_code("MA3151").is_ok());
        assert!(validate_course_code("Global").is_err()); // 哨兵值不是合法课程代码
    }

    #[test]
    fn test_invalid_course_code() {
        assert!(validate_course_code("").is_err());
        assert!(validate_course_code("3401CS").is_err());
        assert!(validate_course_code("cs3401").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
