use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError};

/// 认证通过后写入请求扩展的当前用户
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// 认证中间件
/// 从Authorization头取线上令牌交给管理器认证，成功时顺带完成滑动续期；
/// 令牌无效返回401，存储不可用返回503，二者不能混淆
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let wire = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").unwrap_or(h))
        .unwrap_or("");

    match state.manager.authenticate(wire).await? {
        Some(user_id) => {
            request.extensions_mut().insert(CurrentUser { user_id });
            Ok(next.run(request).await)
        }
        None => Err(AppError::Unauthorized),
    }
}
