use std::collections::{BTreeMap, HashMap};

use tracing::debug;
use uuid::Uuid;

use crate::dto::leaderboard::{AthleteSummary, PartStanding, StandingsRow};
use crate::models::{Division, EventPart};
use crate::snapshot::Snapshot;

use super::leaderboard::rank_part;

/// Overall standings of a division: points summed across all counting
/// parts, best total first.
pub fn overall_standings(snapshot: &Snapshot, division: &Division) -> Vec<StandingsRow> {
    let counting = snapshot.counting_parts();
    standings_for_parts(snapshot, &counting, division)
}

/// Standings over an explicit set of parts. Athletes who have not scored
/// points on any of them yet are hidden rather than shown at 0.
pub fn standings_for_parts(
    snapshot: &Snapshot,
    parts: &[&EventPart],
    division: &Division,
) -> Vec<StandingsRow> {
    let mut per_part: HashMap<Uuid, BTreeMap<Uuid, PartStanding>> = HashMap::new();
    for part in parts {
        for row in rank_part(snapshot, part, division) {
            per_part.entry(row.athlete.athlete_id).or_default().insert(
                part.part_id,
                PartStanding {
                    place: row.place,
                    points: row.points,
                },
            );
        }
    }

    let mut rows: Vec<StandingsRow> = snapshot
        .active_athletes(division.division_id)
        .into_iter()
        .filter_map(|athlete| {
            let breakdown = per_part.remove(&athlete.athlete_id).unwrap_or_default();
            let total_points: u32 = breakdown.values().map(|p| p.points).sum();
            (total_points > 0).then(|| StandingsRow {
                athlete: AthleteSummary::from(athlete),
                total_points,
                per_part: breakdown,
            })
        })
        .collect();

    // The roster comes in name order and the sort is stable, so equal totals
    // stay in name order.
    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    debug!(
        "Standings for {}: {} athletes with points",
        division.display_name,
        rows.len()
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal::Decimal;

    fn demo() -> Snapshot {
        fixtures::demo_document().into_snapshot().unwrap()
    }

    fn rx_men(snapshot: &Snapshot) -> &Division {
        snapshot.division_by("M", "rx").unwrap()
    }

    #[test]
    fn test_totals_sum_counting_parts_best_first() {
        let snapshot = demo();
        let rows = overall_standings(&snapshot, rx_men(&snapshot));

        let table: Vec<(&str, u32)> = rows
            .iter()
            .map(|r| (r.athlete.bib.as_str(), r.total_points))
            .collect();
        assert_eq!(
            table,
            vec![
                ("RXM1", 300),
                ("RXM2", 296),
                ("RXM3", 176),
                ("RXM5", 92),
                ("RXM4", 88),
                ("RXM6", 80),
            ]
        );
    }

    #[test]
    fn test_breakdown_keeps_place_and_points_per_part() {
        let snapshot = demo();
        let rows = overall_standings(&snapshot, rx_men(&snapshot));

        let alvarez = &rows[0];
        assert_eq!(alvarez.per_part.len(), 3);
        for standing in alvarez.per_part.values() {
            assert_eq!(standing.place, 1);
            assert_eq!(standing.points, 100);
        }

        let castro = rows.iter().find(|r| r.athlete.bib == "RXM3").unwrap();
        let places: Vec<u32> = castro.per_part.values().map(|s| s.place).collect();
        assert_eq!(places.len(), 2);
        assert!(places.contains(&5));
        assert!(places.contains(&3));
    }

    #[test]
    fn test_division_without_results_has_empty_standings() {
        let snapshot = demo();
        let scaled_women = snapshot.division_by("F", "scaled").unwrap();
        assert!(overall_standings(&snapshot, scaled_women).is_empty());
    }

    #[test]
    fn test_only_non_counting_parts_yield_no_rows() {
        let snapshot = demo();
        let bonus: Vec<&EventPart> = snapshot
            .parts()
            .iter()
            .filter(|p| !p.counts_as_event)
            .collect();
        assert_eq!(bonus.len(), 1);

        // Two athletes scored the bonus part, but bonus points are 0 and
        // zero totals stay hidden.
        let rows = standings_for_parts(&snapshot, &bonus, rx_men(&snapshot));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_equal_totals_stay_in_name_order() {
        let mut document = fixtures::demo_document();
        // Lift Burgos level with Alvarez on the ladder: both 102.5 ties the
        // part, making both overall totals 300.
        let burgos_ladder = document
            .scores
            .iter_mut()
            .find(|s| s.weight == Some(Decimal::from(100)))
            .unwrap();
        burgos_ladder.weight = Some(Decimal::new(1025, 1));
        let snapshot = document.into_snapshot().unwrap();

        let rows = overall_standings(&snapshot, rx_men(&snapshot));
        assert_eq!(rows[0].total_points, 300);
        assert_eq!(rows[1].total_points, 300);
        assert_eq!(rows[0].athlete.bib, "RXM1");
        assert_eq!(rows[1].athlete.bib, "RXM2");
    }

    #[test]
    fn test_standings_are_idempotent() {
        let snapshot = demo();
        let first = overall_standings(&snapshot, rx_men(&snapshot));
        let second = overall_standings(&snapshot, rx_men(&snapshot));
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
