// Re-export all API modules
pub mod auth;
pub mod client;
pub mod error;
pub mod leaderboard;
pub mod server_config;
pub mod tasks;
pub mod utils;

pub use client::ApiClient;
pub use error::ApiError;
