use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-(part, division) variations of a part's standard: an optional time
/// cap override and the label describing what the tiebreak time measures
/// (e.g. "30 air squats finished time").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDivisionSpec {
    pub part_id: Uuid,
    pub division_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_label: Option<String>,
}
