use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use auth_backend::{
    AppState,
    config::Config,
    middleware::{auth_middleware, log_errors},
    routes,
    store::RedisTokenStore,
    token::TokenManager,
};
use axum::{
    Router,
    routing::{get, post},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 设置 Redis 客户端
    let redis_client = Arc::new(
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client"),
    );

    // 构建令牌管理器，存储句柄和有效期显式注入
    let manager = Arc::new(TokenManager::new(
        RedisTokenStore::new(redis_client),
        config.token_lifetime(),
    ));

    let state = AppState {
        config: config.clone(),
        manager,
    };

    // 登录是公开路由，其余会话路由都在认证中间件之后
    let public_routes = Router::new().route("/auth/login", post(routes::session::login));

    let protected_routes = Router::new()
        .route("/auth/logout", post(routes::session::logout))
        .route("/auth/check", get(routes::session::check_token))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let app = router.with_state(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
