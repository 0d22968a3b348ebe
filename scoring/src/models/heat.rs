use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled run of one event for one division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heat {
    pub heat_id: Uuid,
    pub event_id: Uuid,
    pub division_id: Uuid,
    pub number: i16,
    pub start_time: NaiveDateTime,
    pub lane_count: i16,
}

impl Heat {
    /// When the heat is over, given the event's time cap. A zero cap means
    /// the heat ends the moment it starts.
    pub fn end_time(&self, cap_seconds: u32) -> NaiveDateTime {
        self.start_time + Duration::seconds(i64::from(cap_seconds))
    }
}

/// Lane occupancy inside a heat; unique per (heat, lane).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub heat_id: Uuid,
    pub lane: i16,
    pub athlete_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_time_adds_cap() {
        let start = chrono::NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let heat = Heat {
            heat_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            division_id: Uuid::new_v4(),
            number: 1,
            start_time: start,
            lane_count: 6,
        };
        assert_eq!(heat.end_time(600), start + Duration::minutes(10));
        assert_eq!(heat.end_time(0), start);
    }
}
