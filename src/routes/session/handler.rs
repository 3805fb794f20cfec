use axum::{
    Json,
    extract::{Extension, State},
};

use crate::{AppState, error::AppError, middleware::CurrentUser, result::ApiResult};

use super::model::{CheckTokenResponse, LoginRequest, LoginResponse, LogoutResponse};

/// 登录：为用户签发新令牌
/// 重复登录会覆盖旧令牌，旧令牌立即失效
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResult<LoginResponse>>, AppError> {
    let token = state.manager.issue(req.user_id).await?;
    tracing::info!("用户{}登录成功", req.user_id);

    Ok(Json(ApiResult::success(LoginResponse {
        token: token.to_wire(),
        expires_in: state.manager.token_lifetime().as_secs(),
    })))
}

/// 登出：吊销当前用户的令牌
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApiResult<LogoutResponse>>, AppError> {
    state.manager.revoke(user.user_id).await?;
    tracing::info!("用户{}已登出", user.user_id);

    Ok(Json(ApiResult::success(LogoutResponse {
        user_id: user.user_id,
    })))
}

/// 检查令牌：认证中间件已经完成校验和续期，这里只回显用户
#[axum::debug_handler]
pub async fn check_token(
    Extension(user): Extension<CurrentUser>,
) -> Json<ApiResult<CheckTokenResponse>> {
    Json(ApiResult::success(CheckTokenResponse {
        user_id: user.user_id,
    }))
}
