use serde::{Deserialize, Serialize};

/// Highest points total that still counts as a beginner.
pub const BEGINNER_MAX_POINTS: i64 = 49;
/// Highest points total that still counts as intermediate.
pub const INTERMEDIATE_MAX_POINTS: i64 = 1250;

/// Title awarded to a player for their points total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Beginner,
    Intermediate,
    Expert,
}

impl Rank {
    pub fn from_points(points: i64) -> Self {
        if points <= BEGINNER_MAX_POINTS {
            Rank::Beginner
        } else if points <= INTERMEDIATE_MAX_POINTS {
            Rank::Intermediate
        } else {
            Rank::Expert
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Beginner => "Beginner",
            Rank::Intermediate => "Intermediate",
            Rank::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
