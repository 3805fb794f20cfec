use std::sync::Arc;

use config::Config;
use store::RedisTokenStore;
use token::TokenManager;

pub mod config;
pub mod error;
pub mod middleware;
pub mod result;
pub mod routes;
pub mod store;
pub mod token;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub manager: Arc<TokenManager<RedisTokenStore>>,
}
