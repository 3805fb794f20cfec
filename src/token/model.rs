/// 会话令牌
/// 只有(user_id, secret)二元组合在一起才有意义，按值比较
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub user_id: i64,
    pub secret: String,
}

impl Token {
    pub fn new(user_id: i64, secret: String) -> Self {
        Self { user_id, secret }
    }

    /// 解析线上格式"<user_id>_<secret>"
    /// 纯本地检查，不访问存储；格式错误一律返回None，不会panic
    pub fn parse(wire: &str) -> Option<Token> {
        if wire.trim().is_empty() {
            return None;
        }
        // 不对输入做任何规整，密钥按原样截取；带空白的user_id解析失败即拒绝
        let parts: Vec<&str> = wire.split('_').collect();
        if parts.len() != 2 {
            return None;
        }
        // user_id是十进制整数渲染，本身不含下划线
        let user_id = parts[0].parse::<i64>().ok()?;
        Some(Token {
            user_id,
            secret: parts[1].to_string(),
        })
    }

    /// 编码为线上格式
    pub fn to_wire(&self) -> String {
        format!("{}_{}", self.user_id, self.secret)
    }
}
