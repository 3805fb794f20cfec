use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::keys::token_key;
use super::{StoreError, TokenStore};

/// 基于Redis的令牌存储
/// 每次操作获取一个多路复用异步连接，不在本地保持状态
#[derive(Clone)]
pub struct RedisTokenStore {
    client: Arc<RedisClient>,
}

impl RedisTokenStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn set(&self, user_id: i64, secret: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(token_key(user_id), secret, ttl.as_secs()).await?;
        Ok(())
    }

    async fn get(&self, user_id: i64) -> Result<Option<String>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let secret: Option<String> = conn.get(token_key(user_id)).await?;
        Ok(secret)
    }

    async fn expire(&self, user_id: i64, ttl: Duration) -> Result<bool, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let renewed: bool = conn.expire(token_key(user_id), ttl.as_secs() as i64).await?;
        Ok(renewed)
    }

    async fn delete(&self, user_id: i64) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(token_key(user_id)).await?;
        Ok(())
    }
}
