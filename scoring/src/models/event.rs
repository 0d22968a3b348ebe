use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// High-level workout family of an event. The scoring of each of its parts
/// is governed by the part's own [`ScoringKind`](super::ScoringKind); the
/// event kind is programme metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Time,
    Amrap,
    Max,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Amrap => "amrap",
            Self::Max => "max",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: Uuid,
    pub number: i16,
    pub name: String,
    pub kind: EventKind,
    /// Time cap in seconds; 0 means uncapped. Per-division overrides live in
    /// [`PartDivisionSpec`](super::PartDivisionSpec).
    pub cap_seconds: u32,
    pub tiebreak_enabled: bool,
}
