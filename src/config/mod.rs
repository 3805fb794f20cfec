use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub token_lifetime_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        // TOKEN_LIFETIME以小时为单位，如"72"或"72h"
        let token_lifetime_hours = env::var("TOKEN_LIFETIME")
            .unwrap_or_default()
            .trim_end_matches('h')
            .parse::<u64>()
            .unwrap_or(72);
        Ok(Config {
            redis_url: env::var("REDIS_URL")?,
            server_host: env::var("SERVER_HOST")?,
            server_port: env::var("SERVER_PORT")?.parse().unwrap_or(3000),
            token_lifetime_secs: token_lifetime_hours * 3600,
        })
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::from_secs(self.token_lifetime_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifetime_is_seconds_of_configured_hours() {
        let config = Config {
            redis_url: "redis://localhost".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            token_lifetime_secs: 72 * 3600,
        };
        assert_eq!(config.token_lifetime(), Duration::from_secs(259200));
    }
}
