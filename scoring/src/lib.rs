pub mod display;
pub mod dto;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod snapshot;

pub use error::{Result, ScoringError};
pub use snapshot::{Snapshot, SnapshotDocument};

// Re-export the ranking entry points
pub use services::leaderboard::rank_part;
pub use services::points::PointsTable;
pub use services::schedule::{athlete_day, event_schedule, schedule_board};
pub use services::standings::{overall_standings, standings_for_parts};
