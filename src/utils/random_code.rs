use rand::Rng;

// 排除易混淆字符（0/O、1/l/I）
const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";

/// 生成随机初始密码（用于种子管理员账户）
pub fn generate_random_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_charset() {
        let password = generate_random_password(16);
        assert_eq!(password.len(), 16);
        assert!(
            password
                .bytes()
                .all(|b| PASSWORD_CHARSET.contains(&b))
        );
    }

    #[test]
    fn test_no_trivial_repetition() {
        let a = generate_random_password(16);
        let b = generate_random_password(16);
        assert_ne!(a, b);
    }
}
