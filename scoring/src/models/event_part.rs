use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScoringError;

/// The metric family governing how results of a part compare.
///
/// Every ranking and display decision dispatches on this tag; an
/// unrecognized kind is rejected at the input boundary
/// ([`ScoringError::UnknownScoringKind`]) so the engine itself never has to
/// branch on invalid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringKind {
    /// Finish time when the athlete beat the cap, completed reps otherwise.
    /// Finishers always rank ahead of non-finishers.
    TimeThenReps,
    /// Total repetitions, more is better.
    Reps,
    /// Heaviest successful load, more is better.
    Weight,
}

impl ScoringKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeThenReps => "time_then_reps",
            Self::Reps => "reps",
            Self::Weight => "weight",
        }
    }

    pub fn all() -> &'static [ScoringKind] {
        &[Self::TimeThenReps, Self::Reps, Self::Weight]
    }

    fn parse_str(s: &str) -> Result<Self, ScoringError> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "time_then_reps" => Ok(Self::TimeThenReps),
            "reps" => Ok(Self::Reps),
            "weight" => Ok(Self::Weight),
            _ => Err(ScoringError::UnknownScoringKind(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ScoringKind {
    type Error = ScoringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for ScoringKind {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scoreable segment of an event ("Event 2, Part A"). Single-part events
/// keep an empty slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPart {
    pub part_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub scoring: ScoringKind,
    /// Whether points from this part roll into the overall standings. The
    /// part is still ranked and shown when false; it just awards 0 points.
    pub counts_as_event: bool,
    pub order: i16,
}

impl EventPart {
    /// Short label like "E2A" (or "E1" for single-part events).
    pub fn label(&self, event_number: i16) -> String {
        format!("E{}{}", event_number, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scoring_kind_parsing() {
        assert_eq!(
            ScoringKind::try_from("time_then_reps").unwrap(),
            ScoringKind::TimeThenReps
        );
        assert_eq!(
            ScoringKind::from_str("TIME-THEN-REPS").unwrap(),
            ScoringKind::TimeThenReps
        );
        assert_eq!("reps".parse::<ScoringKind>().unwrap(), ScoringKind::Reps);
        assert_eq!(" weight ".parse::<ScoringKind>().unwrap(), ScoringKind::Weight);

        assert!(ScoringKind::from_str("rounds").is_err());
        assert!(matches!(
            ScoringKind::try_from("points"),
            Err(ScoringError::UnknownScoringKind(s)) if s == "points"
        ));
    }

    #[test]
    fn test_scoring_kind_round_trip() {
        for kind in ScoringKind::all() {
            assert_eq!(ScoringKind::from_str(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_scoring_kind_serde_names() {
        let json = serde_json::to_string(&ScoringKind::TimeThenReps).unwrap();
        assert_eq!(json, "\"time_then_reps\"");
        assert!(serde_json::from_str::<ScoringKind>("\"rounds\"").is_err());
    }

    #[test]
    fn test_part_label() {
        let part = EventPart {
            part_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: "Part A".to_string(),
            slug: "A".to_string(),
            scoring: ScoringKind::Reps,
            counts_as_event: true,
            order: 1,
        };
        assert_eq!(part.label(2), "E2A");

        let single = EventPart { slug: String::new(), ..part };
        assert_eq!(single.label(1), "E1");
    }
}
