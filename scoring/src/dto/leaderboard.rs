use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{Athlete, Score};

/// Athlete fields presentation layers need next to a result row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteSummary {
    pub athlete_id: Uuid,
    pub bib: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_gym: Option<String>,
}

impl From<&Athlete> for AthleteSummary {
    fn from(athlete: &Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            bib: athlete.bib.clone(),
            name: athlete.name(),
            box_gym: athlete.box_gym.clone(),
        }
    }
}

/// Raw performance values a row was ranked on, kept for audit and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMetrics {
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_seconds: Option<Decimal>,
    pub penalty_seconds: Decimal,
    pub penalty_reps: i32,
}

impl From<&Score> for ScoreMetrics {
    fn from(score: &Score) -> Self {
        Self {
            finished: score.finished,
            time_seconds: score.time_seconds,
            reps: score.reps,
            weight: score.weight,
            tiebreak_seconds: score.tiebreak_seconds,
            penalty_seconds: score.penalty_seconds,
            penalty_reps: score.penalty_reps,
        }
    }
}

/// One ranked row of a part leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartRow {
    pub athlete: AthleteSummary,
    pub place: u32,
    pub points: u32,
    /// Formatted score cell: "m:ss" for a finished time, "<n> reps" for
    /// rep-based results, compact decimal for weight.
    pub display_value: String,
    pub metrics: ScoreMetrics,
}

/// Place and points an athlete took on one part, as recorded in the overall
/// standings breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartStanding {
    pub place: u32,
    pub points: u32,
}

/// One row of the overall standings for a division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRow {
    pub athlete: AthleteSummary,
    pub total_points: u32,
    /// Per-part audit trail keyed by part id.
    pub per_part: BTreeMap<Uuid, PartStanding>,
}
