pub mod brief;
pub mod leaderboard;
pub mod schedule;
