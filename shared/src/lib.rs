pub mod models {
    pub mod environment;
    pub mod rank;
}

pub mod dto {
    pub mod api_config;
    pub mod auth;
    pub mod common;
    pub mod leaderboard;
    pub mod task;
}

pub mod error;
pub mod redirect;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use redirect::{RedirectRule, Target, DEV_ORIGIN};

// Re-export models
pub use models::{environment::Environment, rank::Rank};

// Re-export DTOs
pub use dto::{
    api_config::ApiConfigDto,
    auth::{LoginRequest, LoginResponse},
    common::ErrorResponse,
    leaderboard::LeaderboardEntryDto,
    task::{CompleteTaskRequest, CompleteTaskResponse, TaskDto},
};
