use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Pending,
    Approved,
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One raw result per (part, athlete), entered and corrected by staff.
///
/// All performance primitives are stored on every record; ranking reads only
/// the ones the part's scoring kind needs. Penalties are non-negative
/// adjustments always applied against the athlete (added to time, subtracted
/// from reps). Only approved scores are ever ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub part_id: Uuid,
    pub athlete_id: Uuid,

    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_seconds: Option<Decimal>,

    #[serde(default)]
    pub penalty_seconds: Decimal,
    #[serde(default)]
    pub penalty_reps: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ScoreStatus,
    pub created_at: NaiveDateTime,
}

impl Score {
    /// Blank row created when staff open a lane for result entry; fields are
    /// filled in as results come in. Mirrors the lazy get-or-create flow of
    /// the score sheet.
    pub fn blank(part_id: Uuid, athlete_id: Uuid, created_at: NaiveDateTime) -> Self {
        Self {
            part_id,
            athlete_id,
            finished: false,
            time_seconds: None,
            reps: None,
            weight: None,
            tiebreak_seconds: None,
            penalty_seconds: Decimal::ZERO,
            penalty_reps: 0,
            notes: None,
            status: ScoreStatus::Approved,
            created_at,
        }
    }

    /// Repetitions after penalty deduction; missing reps count as 0.
    pub fn net_reps(&self) -> i32 {
        self.reps.unwrap_or(0) - self.penalty_reps
    }

    /// Finish time plus time penalty, when a finish time was recorded.
    pub fn adjusted_time(&self) -> Option<Decimal> {
        self.time_seconds.map(|t| t + self.penalty_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_score() -> Score {
        let at = chrono::NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Score::blank(Uuid::new_v4(), Uuid::new_v4(), at)
    }

    #[test]
    fn test_blank_score_defaults() {
        let score = base_score();
        assert!(!score.finished);
        assert_eq!(score.status, ScoreStatus::Approved);
        assert_eq!(score.net_reps(), 0);
        assert_eq!(score.adjusted_time(), None);
    }

    #[test]
    fn test_net_reps_subtracts_penalty() {
        let mut score = base_score();
        score.reps = Some(150);
        score.penalty_reps = 5;
        assert_eq!(score.net_reps(), 145);
    }

    #[test]
    fn test_adjusted_time_adds_penalty() {
        let mut score = base_score();
        score.time_seconds = Some(Decimal::from(300));
        score.penalty_seconds = Decimal::from(15);
        assert_eq!(score.adjusted_time(), Some(Decimal::from(315)));
    }
}
