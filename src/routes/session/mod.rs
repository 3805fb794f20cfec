pub mod handler;
pub mod model;

pub use handler::{check_token, login, logout};
