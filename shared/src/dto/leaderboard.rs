use serde::{Deserialize, Serialize};

use crate::models::rank::Rank;

/// One row of the leaderboard, ordered by points on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntryDto {
    #[serde(default, alias = "user")]
    pub username: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl LeaderboardEntryDto {
    pub fn rank(&self) -> Rank {
        Rank::from_points(self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_entries() {
        let entries: Vec<LeaderboardEntryDto> = serde_json::from_str(
            r#"[
                {"username":"leaderuser2","points":200,"monthly_points":20},
                {"username":"leaderuser1","points":100,"profile_picture":"/media/p.png"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].monthly_points, Some(20));
        assert_eq!(entries[1].profile_picture.as_deref(), Some("/media/p.png"));
        assert_eq!(entries[0].rank(), Rank::Intermediate);
    }

    #[test]
    fn accepts_user_alias() {
        let entry: LeaderboardEntryDto =
            serde_json::from_str(r#"{"user":"taskuser","points":2000}"#).unwrap();
        assert_eq!(entry.username, "taskuser");
        assert_eq!(entry.rank(), Rank::Expert);
    }
}
