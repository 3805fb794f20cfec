use serde::{Deserialize, Serialize};

/// 登录请求
/// 密码校验不在本服务范围内，调用方负责确认user_id的身份
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// 线上格式令牌，后续请求放在Authorization头中
    pub token: String,
    /// 令牌有效期（秒），每次有效使用后重新计算
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CheckTokenResponse {
    pub user_id: i64,
}
