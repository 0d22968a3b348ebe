use crate::models::{Score, ScoringKind};

/// Whether a score carries the metric its part ranks on. Athletes without a
/// rankable score are left off the part leaderboard entirely.
///
/// For time-capped parts a rep count alone is enough: the athlete got capped
/// and ranks behind the finishers on reps.
pub fn is_rankable(scoring: ScoringKind, score: &Score) -> bool {
    match scoring {
        ScoringKind::TimeThenReps => {
            (score.finished && score.time_seconds.is_some()) || score.reps.is_some()
        }
        ScoringKind::Reps => score.reps.is_some(),
        ScoringKind::Weight => score.weight.is_some(),
    }
}
