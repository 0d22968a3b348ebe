use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EventKind, ScoreStatus};

use super::leaderboard::AthleteSummary;

/// A heat dressed with the event and division names the board renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledHeat {
    pub heat_id: Uuid,
    pub event_number: i16,
    pub event_name: String,
    pub event_kind: EventKind,
    pub division_name: String,
    pub number: i16,
    pub start_time: NaiveDateTime,
    /// Start time plus the event cap. Heats without a cap end at start.
    pub end_time: NaiveDateTime,
    pub lane_count: i16,
}

/// What the venue screen shows: heats running right now and the next ones up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBoard {
    pub live: Vec<ScheduledHeat>,
    pub upcoming: Vec<ScheduledHeat>,
}

/// A lane an athlete is assigned to in a scheduled heat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneSlot {
    pub heat: ScheduledHeat,
    pub lane: i16,
}

/// One recorded result on an athlete's day sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSlip {
    pub part_id: Uuid,
    /// Short part label such as "E2A".
    pub label: String,
    pub display_value: String,
    pub status: ScoreStatus,
}

/// Everything one athlete needs for the day: their next lane, the full lane
/// list, and the scores already on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteDay {
    pub athlete: AthleteSummary,
    pub division_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_up: Option<LaneSlot>,
    pub lanes: Vec<LaneSlot>,
    pub scores: Vec<ScoreSlip>,
}
