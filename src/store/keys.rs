/// 令牌记录键前缀
const TOKEN_PREFIX: &str = "token:";

/// 生成令牌记录的存储键
/// 用户ID按十进制渲染，保证键与整数精确往返
pub fn token_key(user_id: i64) -> String {
    format!("{}{}", TOKEN_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_key_round_trips_integer_ids() {
        assert_eq!(token_key(42), "token:42");
        assert_eq!(token_key(-7), "token:-7");
        assert_eq!(token_key(i64::MAX), format!("token:{}", i64::MAX));
    }
}
