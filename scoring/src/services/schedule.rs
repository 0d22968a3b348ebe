use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::display;
use crate::dto::leaderboard::AthleteSummary;
use crate::dto::schedule::{AthleteDay, LaneSlot, ScheduleBoard, ScheduledHeat, ScoreSlip};
use crate::models::Heat;
use crate::snapshot::Snapshot;

/// How many future heats the board considers when picking the next wave.
const UPCOMING_WINDOW: usize = 12;

fn dress(snapshot: &Snapshot, heat: &Heat) -> Option<ScheduledHeat> {
    let event = snapshot.event(heat.event_id)?;
    let division = snapshot.division(heat.division_id)?;
    Some(ScheduledHeat {
        heat_id: heat.heat_id,
        event_number: event.number,
        event_name: event.name.clone(),
        event_kind: event.kind,
        division_name: division.display_name.clone(),
        number: heat.number,
        start_time: heat.start_time,
        end_time: heat.end_time(event.cap_seconds),
        lane_count: heat.lane_count,
    })
}

/// Venue board state at a point in time.
///
/// Live is the most recently started wave of heats that are still inside
/// their cap; upcoming is the next wave, every heat sharing the earliest
/// future start.
pub fn schedule_board(snapshot: &Snapshot, now: NaiveDateTime) -> ScheduleBoard {
    let mut ongoing: Vec<ScheduledHeat> = snapshot
        .heats()
        .iter()
        .filter(|heat| heat.start_time <= now)
        .filter_map(|heat| dress(snapshot, heat))
        .filter(|heat| heat.end_time > now)
        .collect();
    ongoing.sort_by_key(|heat| std::cmp::Reverse(heat.start_time));

    let live = match ongoing.first() {
        Some(latest) => {
            let latest_start = latest.start_time;
            ongoing
                .into_iter()
                .filter(|heat| heat.start_time == latest_start)
                .collect()
        }
        None => Vec::new(),
    };

    let future: Vec<ScheduledHeat> = snapshot
        .heats()
        .iter()
        .filter(|heat| heat.start_time > now)
        .take(UPCOMING_WINDOW)
        .filter_map(|heat| dress(snapshot, heat))
        .collect();

    let upcoming = match future.first() {
        Some(next) => {
            let next_start = next.start_time;
            future
                .into_iter()
                .filter(|heat| heat.start_time == next_start)
                .collect()
        }
        None => Vec::new(),
    };

    ScheduleBoard { live, upcoming }
}

/// Full running order of one event, grouped by division order then time.
pub fn event_schedule(snapshot: &Snapshot, event_id: Uuid) -> Vec<ScheduledHeat> {
    let mut heats: Vec<&Heat> = snapshot.heats_for_event(event_id);
    heats.sort_by_key(|heat| {
        (
            snapshot
                .division(heat.division_id)
                .map(|d| d.sort_order)
                .unwrap_or(i32::MAX),
            heat.start_time,
        )
    });
    heats
        .into_iter()
        .filter_map(|heat| dress(snapshot, heat))
        .collect()
}

/// Day sheet for one active athlete: next lane, all lanes, recorded scores.
/// Returns None for unknown or inactive athletes.
pub fn athlete_day(
    snapshot: &Snapshot,
    athlete_id: Uuid,
    now: NaiveDateTime,
) -> Option<AthleteDay> {
    let athlete = snapshot.athlete(athlete_id).filter(|a| a.is_active)?;
    let division_name = snapshot
        .division(athlete.division_id)
        .map(|d| d.display_name.clone())
        .unwrap_or_default();

    let lanes: Vec<LaneSlot> = snapshot
        .lanes_for_athlete(athlete_id)
        .into_iter()
        .filter_map(|(heat, lane)| dress(snapshot, heat).map(|heat| LaneSlot { heat, lane }))
        .collect();

    let next_up = lanes
        .iter()
        .find(|slot| slot.heat.start_time >= now)
        .cloned();

    let scores: Vec<ScoreSlip> = snapshot
        .scores_for_athlete(athlete_id)
        .into_iter()
        .map(|(part, score)| ScoreSlip {
            part_id: part.part_id,
            label: snapshot.part_label(part),
            display_value: display::score_cell(part.scoring, score),
            status: score.status,
        })
        .collect();

    Some(AthleteDay {
        athlete: AthleteSummary::from(athlete),
        division_name,
        next_up,
        lanes,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::NaiveDate;

    fn demo() -> Snapshot {
        fixtures::demo_document().into_snapshot().unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 6)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_board_mid_first_heat() {
        let snapshot = demo();
        let board = schedule_board(&snapshot, at(8, 5));

        assert_eq!(board.live.len(), 1);
        assert_eq!(board.live[0].event_number, 1);
        assert_eq!(board.live[0].division_name, "Scaled Men");
        assert_eq!(board.live[0].number, 1);

        assert_eq!(board.upcoming.len(), 1);
        assert_eq!(board.upcoming[0].number, 2);
        assert_eq!(board.upcoming[0].start_time, at(8, 15));
    }

    #[test]
    fn test_board_between_heats_has_no_live() {
        let snapshot = demo();
        let board = schedule_board(&snapshot, at(8, 12));

        assert!(board.live.is_empty());
        assert_eq!(board.upcoming.len(), 1);
        assert_eq!(board.upcoming[0].start_time, at(8, 15));
    }

    #[test]
    fn test_board_groups_simultaneous_starts() {
        let snapshot = demo();
        // 09:00 starts both the intermediate men on event 1 and the scaled
        // men on event 2.
        let board = schedule_board(&snapshot, at(9, 2));

        assert_eq!(board.live.len(), 2);
        assert!(board.live.iter().all(|h| h.start_time == at(9, 0)));
        assert_eq!(board.upcoming.len(), 2);
        assert!(board.upcoming.iter().all(|h| h.start_time == at(9, 15)));
    }

    #[test]
    fn test_live_shows_only_latest_started_wave() {
        let mut document = fixtures::demo_document();
        // Stretch event 1 to a 20 minute cap so heats 1 and 2 overlap.
        document.events[0].cap_seconds = 1200;
        let snapshot = document.into_snapshot().unwrap();

        let board = schedule_board(&snapshot, at(8, 16));
        assert_eq!(board.live.len(), 1);
        assert_eq!(board.live[0].number, 2);
        assert_eq!(board.live[0].start_time, at(8, 15));
    }

    #[test]
    fn test_event_schedule_orders_by_division_then_time() {
        let snapshot = demo();
        let event = snapshot.event_by_number(1).unwrap();
        let heats = event_schedule(&snapshot, event.event_id);

        assert_eq!(heats.len(), 12);
        let head: Vec<(&str, i16)> = heats[..4]
            .iter()
            .map(|h| (h.division_name.as_str(), h.number))
            .collect();
        assert_eq!(
            head,
            vec![
                ("Scaled Men", 1),
                ("Scaled Men", 2),
                ("Scaled Women", 1),
                ("Scaled Women", 2),
            ]
        );
        assert_eq!(heats[0].end_time, at(8, 10));
    }

    #[test]
    fn test_athlete_day_sheet() {
        let snapshot = demo();
        let athlete = snapshot.athlete_by_bib("RXM1").unwrap();
        let sheet = athlete_day(&snapshot, athlete.athlete_id, at(8, 0)).unwrap();

        assert_eq!(sheet.division_name, "Rx Men");
        assert_eq!(sheet.lanes.len(), 1);
        assert_eq!(sheet.lanes[0].lane, 1);

        let next = sheet.next_up.unwrap();
        assert_eq!(next.heat.event_number, 1);
        assert_eq!(next.heat.start_time, at(10, 0));

        let labels: Vec<&str> = sheet.scores.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["E1", "E2A", "E2B", "E3B"]);
        assert_eq!(sheet.scores[0].display_value, "5:00");
    }

    #[test]
    fn test_athlete_day_shows_pending_scores() {
        let snapshot = demo();
        let athlete = snapshot.athlete_by_bib("RXM4").unwrap();
        let sheet = athlete_day(&snapshot, athlete.athlete_id, at(12, 0)).unwrap();

        // Duarte's heat has already run
        assert!(sheet.next_up.is_none());

        assert_eq!(sheet.scores.len(), 2);
        assert_eq!(sheet.scores[1].display_value, "250 reps");
        assert_eq!(sheet.scores[1].status, crate::models::ScoreStatus::Pending);
    }

    #[test]
    fn test_inactive_athlete_has_no_day_sheet() {
        let mut document = fixtures::demo_document();
        let athlete_id = document
            .athletes
            .iter_mut()
            .find(|a| a.bib == "RXM1")
            .map(|a| {
                a.is_active = false;
                a.athlete_id
            })
            .unwrap();
        let snapshot = document.into_snapshot().unwrap();

        assert!(athlete_day(&snapshot, athlete_id, at(8, 0)).is_none());
    }
}
