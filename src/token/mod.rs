/// 令牌模块
/// 包含令牌数据模型和生命周期管理逻辑
pub mod manager;
pub mod model;

pub use manager::TokenManager;
pub use model::Token;
