use rust_decimal::Decimal;

use crate::models::{Score, ScoringKind};

/// Composite sort key; lower orders first, so the best score has the
/// smallest key.
///
/// `bucket` separates finishers (0) from capped athletes (1) on
/// time-then-reps parts; everyone shares bucket 0 on the other kinds.
/// `value` is the metric oriented so that smaller is better, which means
/// reps and weight go in negated. `tiebreak` only differentiates finishers
/// with equal times; a missing tiebreak ranks behind any recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    bucket: u8,
    value: Decimal,
    tiebreak: Decimal,
}

pub fn rank_key(scoring: ScoringKind, score: &Score) -> RankKey {
    match scoring {
        ScoringKind::TimeThenReps => match score.adjusted_time() {
            Some(total) if score.finished => RankKey {
                bucket: 0,
                value: total,
                tiebreak: score.tiebreak_seconds.unwrap_or(Decimal::MAX),
            },
            _ => RankKey {
                bucket: 1,
                value: -Decimal::from(score.net_reps()),
                tiebreak: Decimal::ZERO,
            },
        },
        ScoringKind::Reps => RankKey {
            bucket: 0,
            value: -Decimal::from(score.net_reps()),
            tiebreak: Decimal::ZERO,
        },
        ScoringKind::Weight => RankKey {
            bucket: 0,
            value: -score.weight.unwrap_or(Decimal::ZERO),
            tiebreak: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn score() -> Score {
        let at = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Score::blank(Uuid::new_v4(), Uuid::new_v4(), at)
    }

    fn finished(seconds: i64) -> Score {
        let mut s = score();
        s.finished = true;
        s.time_seconds = Some(Decimal::from(seconds));
        s
    }

    fn capped(reps: i32) -> Score {
        let mut s = score();
        s.reps = Some(reps);
        s
    }

    #[test]
    fn test_any_finisher_beats_any_capped_athlete() {
        let slow = rank_key(ScoringKind::TimeThenReps, &finished(599));
        let many_reps = rank_key(ScoringKind::TimeThenReps, &capped(400));
        assert!(slow < many_reps);
    }

    #[test]
    fn test_faster_time_ranks_first() {
        let fast = rank_key(ScoringKind::TimeThenReps, &finished(300));
        let slow = rank_key(ScoringKind::TimeThenReps, &finished(301));
        assert!(fast < slow);
    }

    #[test]
    fn test_time_penalty_added_before_comparison() {
        let mut penalised = finished(290);
        penalised.penalty_seconds = Decimal::from(15);
        let clean = finished(300);
        assert!(
            rank_key(ScoringKind::TimeThenReps, &clean)
                < rank_key(ScoringKind::TimeThenReps, &penalised)
        );
    }

    #[test]
    fn test_tiebreak_splits_equal_times() {
        let mut a = finished(300);
        a.tiebreak_seconds = Some(Decimal::from(90));
        let mut b = finished(300);
        b.tiebreak_seconds = Some(Decimal::from(95));
        assert!(
            rank_key(ScoringKind::TimeThenReps, &a) < rank_key(ScoringKind::TimeThenReps, &b)
        );
    }

    #[test]
    fn test_missing_tiebreak_ranks_behind_recorded_one() {
        let mut with_tb = finished(300);
        with_tb.tiebreak_seconds = Some(Decimal::from(500));
        let without_tb = finished(300);
        assert!(
            rank_key(ScoringKind::TimeThenReps, &with_tb)
                < rank_key(ScoringKind::TimeThenReps, &without_tb)
        );
    }

    #[test]
    fn test_equal_times_without_tiebreaks_tie_exactly() {
        assert_eq!(
            rank_key(ScoringKind::TimeThenReps, &finished(300)),
            rank_key(ScoringKind::TimeThenReps, &finished(300))
        );
    }

    #[test]
    fn test_capped_athletes_rank_by_net_reps() {
        let more = rank_key(ScoringKind::TimeThenReps, &capped(150));
        let mut fewer_net = capped(150);
        fewer_net.penalty_reps = 10;
        let fewer = rank_key(ScoringKind::TimeThenReps, &fewer_net);
        assert!(more < fewer);
    }

    #[test]
    fn test_reps_kind_orders_descending() {
        let a = rank_key(ScoringKind::Reps, &capped(210));
        let b = rank_key(ScoringKind::Reps, &capped(209));
        assert!(a < b);
    }

    #[test]
    fn test_weight_kind_orders_descending() {
        let mut heavy = score();
        heavy.weight = Some(Decimal::new(1205, 1));
        let mut light = score();
        light.weight = Some(Decimal::new(1200, 1));
        assert!(
            rank_key(ScoringKind::Weight, &heavy) < rank_key(ScoringKind::Weight, &light)
        );
    }
}
