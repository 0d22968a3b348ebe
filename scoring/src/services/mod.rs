pub mod eligibility;
pub mod leaderboard;
pub mod placing;
pub mod points;
pub mod rank_key;
pub mod schedule;
pub mod standings;
