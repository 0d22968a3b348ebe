use tracing::debug;

use crate::display;
use crate::dto::leaderboard::{AthleteSummary, PartRow, ScoreMetrics};
use crate::models::{Athlete, Division, EventPart, Score};
use crate::snapshot::Snapshot;

use super::eligibility::is_rankable;
use super::placing::assign_places;
use super::rank_key::{RankKey, rank_key};

/// Ranks one part within one division.
///
/// Only active athletes of the division with an approved, rankable score
/// appear; everyone else is left off rather than ranked last. Tied keys
/// share a place and tied athletes display in name order. Points follow the
/// snapshot's table, or 0 throughout when the part does not count toward the
/// overall standings.
pub fn rank_part(snapshot: &Snapshot, part: &EventPart, division: &Division) -> Vec<PartRow> {
    let scores = snapshot.scores_for_part(part.part_id);

    let mut entries: Vec<(RankKey, &Athlete, &Score)> = snapshot
        .active_athletes(division.division_id)
        .into_iter()
        .filter_map(|athlete| {
            scores
                .get(&athlete.athlete_id)
                .filter(|score| is_rankable(part.scoring, score))
                .map(|score| (rank_key(part.scoring, score), athlete, *score))
        })
        .collect();

    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name_key().cmp(&b.1.name_key())));

    let keys: Vec<RankKey> = entries.iter().map(|entry| entry.0).collect();
    let places = assign_places(&keys);

    let rows: Vec<PartRow> = entries
        .iter()
        .zip(places)
        .map(|(&(_, athlete, score), place)| PartRow {
            athlete: AthleteSummary::from(athlete),
            place,
            points: if part.counts_as_event {
                snapshot.points_table().points_for(place)
            } else {
                0
            },
            display_value: display::score_cell(part.scoring, score),
            metrics: ScoreMetrics::from(score),
        })
        .collect();

    debug!(
        "Ranked {} for {}: {} rows",
        snapshot.part_label(part),
        division.display_name,
        rows.len()
    );

    rows
}
