use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Score, ScoringKind};

/// Formats seconds as "m:ss". The value is rounded to whole seconds before
/// splitting, so 299.5 renders as "5:00" and never "4:60".
pub fn format_clock(seconds: Decimal) -> String {
    let total = seconds.round().to_i64().unwrap_or(0).max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Pretty score cell for boards and sheets: "m:ss" for a finished time,
/// "<n> reps" for rep counts, compact decimal for weight.
pub fn score_cell(scoring: ScoringKind, score: &Score) -> String {
    match scoring {
        ScoringKind::TimeThenReps => match score.adjusted_time() {
            Some(total) if score.finished => format_clock(total),
            _ => format!("{} reps", score.net_reps()),
        },
        ScoringKind::Reps => format!("{} reps", score.net_reps()),
        ScoringKind::Weight => score
            .weight
            .unwrap_or(Decimal::ZERO)
            .normalize()
            .to_string(),
    }
}
