//! Deterministic demo competition used by tests and the `seed` command.
//!
//! Six divisions, three events, two heats per event and division, six
//! athletes per division, and a partially scored first morning: the first
//! event fully ranked for the Rx men, the second mid-entry with one pending
//! result and one corrected duplicate.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    Athlete, Division, Event, EventKind, EventPart, Heat, LaneAssignment, PartDivisionSpec,
    Score, ScoreStatus, ScoringKind,
};
use crate::snapshot::{CompetitionInfo, FORMAT_VERSION, SnapshotDocument};

const DIVISIONS: [(&str, &str, &str, &str); 6] = [
    ("M", "scaled", "Scaled Men", "SC"),
    ("F", "scaled", "Scaled Women", "SC"),
    ("M", "intermediate", "Intermediate Men", "IN"),
    ("F", "intermediate", "Intermediate Women", "IN"),
    ("M", "rx", "Rx Men", "RX"),
    ("F", "rx", "Rx Women", "RX"),
];

const FIRST_NAMES: [&str; 6] = ["Ana", "Bruno", "Carla", "Diego", "Elena", "Fabio"];
const LAST_NAMES: [&str; 6] = ["Alvarez", "Burgos", "Castro", "Duarte", "Esposito", "Flores"];

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 6).unwrap_or(NaiveDate::MIN)
}

fn start_of_day() -> NaiveDateTime {
    day().and_hms_opt(8, 0, 0).unwrap_or(NaiveDateTime::MIN)
}

pub fn demo_document() -> SnapshotDocument {
    let divisions: Vec<Division> = DIVISIONS
        .iter()
        .enumerate()
        .map(|(idx, (sex, category, display_name, _))| Division {
            division_id: Uuid::new_v4(),
            sex: (*sex).to_string(),
            category: (*category).to_string(),
            display_name: (*display_name).to_string(),
            sort_order: idx as i32,
        })
        .collect();

    let mut athletes = Vec::new();
    for (division, (sex, _, _, prefix)) in divisions.iter().zip(DIVISIONS.iter()) {
        for i in 0..6 {
            athletes.push(Athlete {
                athlete_id: Uuid::new_v4(),
                bib: format!("{}{}{}", prefix, sex, i + 1),
                first_name: FIRST_NAMES[i].to_string(),
                last_name: LAST_NAMES[i].to_string(),
                display_name: None,
                box_gym: Some("Forge Fitness".to_string()),
                division_id: division.division_id,
                is_active: true,
            });
        }
    }

    let events = vec![
        Event {
            event_id: Uuid::new_v4(),
            number: 1,
            name: "Opening Chipper".to_string(),
            kind: EventKind::Time,
            cap_seconds: 600,
            tiebreak_enabled: true,
        },
        Event {
            event_id: Uuid::new_v4(),
            number: 2,
            name: "Engine Check".to_string(),
            kind: EventKind::Amrap,
            cap_seconds: 600,
            tiebreak_enabled: false,
        },
        Event {
            event_id: Uuid::new_v4(),
            number: 3,
            name: "Heavy Finale".to_string(),
            kind: EventKind::Max,
            cap_seconds: 600,
            tiebreak_enabled: false,
        },
    ];

    let parts = vec![
        EventPart {
            part_id: Uuid::new_v4(),
            event_id: events[0].event_id,
            name: "Main".to_string(),
            slug: String::new(),
            scoring: ScoringKind::TimeThenReps,
            counts_as_event: true,
            order: 1,
        },
        EventPart {
            part_id: Uuid::new_v4(),
            event_id: events[1].event_id,
            name: "Amrap".to_string(),
            slug: "A".to_string(),
            scoring: ScoringKind::Reps,
            counts_as_event: true,
            order: 1,
        },
        EventPart {
            part_id: Uuid::new_v4(),
            event_id: events[1].event_id,
            name: "Ladder".to_string(),
            slug: "B".to_string(),
            scoring: ScoringKind::Weight,
            counts_as_event: true,
            order: 2,
        },
        EventPart {
            part_id: Uuid::new_v4(),
            event_id: events[2].event_id,
            name: "Main".to_string(),
            slug: String::new(),
            scoring: ScoringKind::Weight,
            counts_as_event: true,
            order: 1,
        },
        EventPart {
            part_id: Uuid::new_v4(),
            event_id: events[2].event_id,
            name: "Bonus".to_string(),
            slug: "B".to_string(),
            scoring: ScoringKind::Reps,
            counts_as_event: false,
            order: 2,
        },
    ];

    let mut heats = Vec::new();
    let mut lane_assignments = Vec::new();
    for event in &events {
        let event_start = start_of_day() + Duration::hours(i64::from(event.number) - 1);
        for (idx, division) in divisions.iter().enumerate() {
            for number in 1..=2i16 {
                let heat = Heat {
                    heat_id: Uuid::new_v4(),
                    event_id: event.event_id,
                    division_id: division.division_id,
                    number,
                    start_time: event_start
                        + Duration::minutes(idx as i64 * 30 + i64::from(number - 1) * 15),
                    lane_count: 6,
                };
                if event.number == 1 && number == 1 {
                    for (lane, athlete) in athletes
                        .iter()
                        .filter(|a| a.division_id == division.division_id)
                        .enumerate()
                    {
                        lane_assignments.push(LaneAssignment {
                            heat_id: heat.heat_id,
                            lane: lane as i16 + 1,
                            athlete_id: athlete.athlete_id,
                        });
                    }
                }
                heats.push(heat);
            }
        }
    }

    let rx_men = divisions[4].division_id;
    let part_specs = vec![
        PartDivisionSpec {
            part_id: parts[0].part_id,
            division_id: divisions[1].division_id,
            cap_seconds: Some(480),
            tiebreak_label: Some("Time after the last wall ball".to_string()),
        },
        PartDivisionSpec {
            part_id: parts[0].part_id,
            division_id: rx_men,
            cap_seconds: None,
            tiebreak_label: Some("Time after the last rope climb".to_string()),
        },
    ];

    let scores = demo_scores(&athletes, &parts, rx_men);

    SnapshotDocument {
        format_version: FORMAT_VERSION.to_string(),
        competition: CompetitionInfo {
            name: "Midsummer Throwdown".to_string(),
            slug: "midsummer-throwdown".to_string(),
            start_date: day(),
            end_date: day(),
            venue: Some("Festival Hall".to_string()),
        },
        divisions,
        athletes,
        events,
        parts,
        scores,
        heats,
        lane_assignments,
        part_specs,
        points_table: None,
    }
}

fn demo_scores(athletes: &[Athlete], parts: &[EventPart], rx_men: Uuid) -> Vec<Score> {
    let rx: Vec<Uuid> = athletes
        .iter()
        .filter(|a| a.division_id == rx_men)
        .map(|a| a.athlete_id)
        .collect();
    if rx.len() < 6 {
        return Vec::new();
    }

    let mut entered_at = start_of_day() + Duration::minutes(12);
    let mut next = |part: usize, athlete: usize| {
        entered_at += Duration::minutes(1);
        Score::blank(parts[part].part_id, rx[athlete], entered_at)
    };

    let mut scores = Vec::new();

    // Opening Chipper: Alvarez and Burgos tie at 5:00, Esposito edges Duarte
    // on the tiebreak after Duarte's penalty, Castro and Flores get capped.
    let mut s = next(0, 0);
    s.finished = true;
    s.time_seconds = Some(Decimal::from(300));
    scores.push(s);

    let mut s = next(0, 1);
    s.finished = true;
    s.time_seconds = Some(Decimal::from(300));
    scores.push(s);

    let mut s = next(0, 2);
    s.reps = Some(150);
    scores.push(s);

    let mut s = next(0, 3);
    s.finished = true;
    s.time_seconds = Some(Decimal::from(400));
    s.penalty_seconds = Decimal::new(125, 1);
    s.tiebreak_seconds = Some(Decimal::from(95));
    scores.push(s);

    let mut s = next(0, 4);
    s.finished = true;
    s.time_seconds = Some(Decimal::new(4125, 1));
    s.tiebreak_seconds = Some(Decimal::from(90));
    scores.push(s);

    // First entry for Flores was miscounted and re-entered below.
    let mut s = next(0, 5);
    s.reps = Some(145);
    scores.push(s);

    let mut s = next(0, 5);
    s.reps = Some(140);
    scores.push(s);

    // Engine Check, part A: Burgos nets level with Alvarez after penalties,
    // Duarte's row is awaiting review.
    let mut s = next(1, 0);
    s.reps = Some(210);
    scores.push(s);

    let mut s = next(1, 1);
    s.reps = Some(215);
    s.penalty_reps = 5;
    scores.push(s);

    let mut s = next(1, 2);
    s.reps = Some(209);
    scores.push(s);

    let mut s = next(1, 3);
    s.reps = Some(250);
    s.status = ScoreStatus::Pending;
    s.notes = Some("Judge recount requested".to_string());
    scores.push(s);

    // Engine Check, part B.
    let mut s = next(2, 0);
    s.weight = Some(Decimal::new(1025, 1));
    scores.push(s);

    let mut s = next(2, 1);
    s.weight = Some(Decimal::from(100));
    scores.push(s);

    // Bonus part does not count toward the overall standings.
    let mut s = next(4, 0);
    s.reps = Some(30);
    scores.push(s);

    let mut s = next(4, 1);
    s.reps = Some(25);
    scores.push(s);

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_document_shape() {
        let document = demo_document();

        assert_eq!(document.format_version, FORMAT_VERSION);
        assert_eq!(document.divisions.len(), 6);
        assert_eq!(document.athletes.len(), 36);
        assert_eq!(document.events.len(), 3);
        assert_eq!(document.parts.len(), 5);
        assert_eq!(document.heats.len(), 36);
        assert_eq!(document.lane_assignments.len(), 36);
        assert_eq!(document.scores.len(), 15);
        assert_eq!(document.part_specs.len(), 2);
    }

    #[test]
    fn test_demo_document_validates() {
        assert!(demo_document().into_snapshot().is_ok());
    }

    #[test]
    fn test_demo_document_round_trips_through_json() {
        let document = demo_document();
        let json = document.to_json_pretty().unwrap();
        let parsed = SnapshotDocument::from_json(&json).unwrap();

        assert_eq!(parsed.athletes.len(), document.athletes.len());
        assert_eq!(parsed.scores.len(), document.scores.len());
    }
}
