use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard a part is run under for one division, after per-division
/// overrides are applied on top of the event defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartBrief {
    pub part_id: Uuid,
    pub division_id: Uuid,
    /// Effective time cap in seconds, 0 when the part runs uncapped.
    pub cap_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_label: Option<String>,
}
