/// 令牌存储模块
/// 定义令牌存储的抽象接口和Redis实现
pub mod keys;
pub mod redis;

use std::time::Duration;

use async_trait::async_trait;

pub use self::redis::RedisTokenStore;

/// 存储层错误
/// 与"令牌无效"严格区分：存储不可用必须向调用方暴露，不能当作认证失败处理
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis错误: {0}")]
    Redis(#[from] ::redis::RedisError),
}

/// 令牌存储接口
/// 键为用户ID，值为该用户当前有效的密钥，带TTL
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 无条件写入用户的密钥并设置过期时间，覆盖已有记录
    async fn set(&self, user_id: i64, secret: &str, ttl: Duration) -> Result<(), StoreError>;

    /// 读取用户当前存储的密钥，不存在时返回None
    async fn get(&self, user_id: i64) -> Result<Option<String>, StoreError>;

    /// 将已有记录的过期时间重置为ttl，返回记录是否存在
    async fn expire(&self, user_id: i64, ttl: Duration) -> Result<bool, StoreError>;

    /// 删除用户的记录，记录不存在时也视为成功
    async fn delete(&self, user_id: i64) -> Result<(), StoreError>;
}
