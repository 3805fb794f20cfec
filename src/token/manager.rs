use std::time::Duration;

use uuid::Uuid;

use crate::store::{StoreError, TokenStore};
use crate::token::model::Token;

/// 令牌生命周期管理器
/// 负责签发、校验续期和吊销；自身不持有可变状态，所有状态都在外部存储中，
/// 可以被多个请求任务并发调用而无需加锁
pub struct TokenManager<S: TokenStore> {
    store: S,
    token_lifetime: Duration,
}

impl<S: TokenStore> TokenManager<S> {
    /// 存储句柄和令牌有效期都通过构造参数显式注入
    pub fn new(store: S, token_lifetime: Duration) -> Self {
        Self {
            store,
            token_lifetime,
        }
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// 为用户签发新令牌
    /// 无条件覆盖该用户已有的记录，旧令牌立即失效（每个用户同时只有一个有效会话）
    pub async fn issue(&self, user_id: i64) -> Result<Token, StoreError> {
        // 使用去掉连字符的UUID作为密钥，32个十六进制字符
        let secret = Uuid::new_v4().simple().to_string();
        self.store
            .set(user_id, &secret, self.token_lifetime)
            .await?;
        tracing::debug!("已为用户{}签发新令牌", user_id);
        Ok(Token::new(user_id, secret))
    }

    /// 校验令牌并在成功时续期
    /// 密钥比较必须精确且区分大小写；校验失败路径不产生任何写操作
    pub async fn validate_and_renew(&self, token: &Token) -> Result<bool, StoreError> {
        let stored = self.store.get(token.user_id).await?;
        match stored {
            Some(secret) if !secret.trim().is_empty() && secret == token.secret => {
                // 滑动过期：每次有效使用都把TTL重置为完整有效期。
                // get和expire之间如果发生并发的吊销或重新签发，这里可能把
                // 刚失效的密钥重新续期；相对校验流量这种情况很少见，按设计接受，
                // 需要更强保证时应改用存储侧的条件续期脚本
                let renewed = self
                    .store
                    .expire(token.user_id, self.token_lifetime)
                    .await?;
                if !renewed {
                    tracing::debug!("用户{}的令牌记录在续期前已过期", token.user_id);
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// 吊销用户当前的令牌，幂等，用户不存在时也不报错
    pub async fn revoke(&self, user_id: i64) -> Result<(), StoreError> {
        self.store.delete(user_id).await?;
        tracing::debug!("已吊销用户{}的令牌", user_id);
        Ok(())
    }

    /// 认证入口：解析线上令牌并校验续期
    /// 格式错误在访问存储之前就被拒绝；返回Some(user_id)表示令牌当前有效
    pub async fn authenticate(&self, wire: &str) -> Result<Option<i64>, StoreError> {
        let Some(token) = Token::parse(wire) else {
            return Ok(None);
        };
        if self.validate_and_renew(&token).await? {
            Ok(Some(token.user_id))
        } else {
            Ok(None)
        }
    }
}
