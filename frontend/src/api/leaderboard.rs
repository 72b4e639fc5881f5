use bingo_shared::LeaderboardEntryDto;
use log::debug;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

pub const LEADERBOARD_PATH: &str = "/leaderboard/";

pub async fn fetch_leaderboard(client: &ApiClient) -> Result<Vec<LeaderboardEntryDto>, ApiError> {
    debug!("Fetching leaderboard");

    let entries = client
        .get_json::<Vec<LeaderboardEntryDto>>(LEADERBOARD_PATH)
        .await?;

    debug!("Successfully fetched {} leaderboard entries", entries.len());
    Ok(entries)
}
