use std::collections::{HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{EventKind, ScoreStatus};

use super::document::{FORMAT_VERSION, SnapshotDocument};

pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(document: &SnapshotDocument) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if document.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                document.format_version, FORMAT_VERSION
            ));
        }

        if document.competition.name.is_empty() {
            report
                .errors
                .push("Competition name is required".to_string());
        }
        if document.competition.slug.is_empty() {
            report
                .errors
                .push("Competition slug is required".to_string());
        }
        if document.competition.end_date < document.competition.start_date {
            report
                .errors
                .push("Competition end_date must be >= start_date".to_string());
        }
        if document.competition.venue.is_none() {
            report
                .warnings
                .push("Competition venue is not specified".to_string());
        }

        if document.divisions.is_empty() {
            report
                .errors
                .push("At least one division is required".to_string());
        }

        let mut division_ids = HashSet::new();
        let mut division_keys = HashSet::new();
        for division in &document.divisions {
            if division.display_name.is_empty() {
                report
                    .errors
                    .push("Division display_name cannot be empty".to_string());
            }
            if division.sex != "M" && division.sex != "F" {
                report.errors.push(format!(
                    "Invalid sex in division '{}': '{}'. Must be 'M' or 'F'",
                    division.display_name, division.sex
                ));
            }
            if !division_ids.insert(division.division_id) {
                report.errors.push(format!(
                    "Duplicate division id: {}",
                    division.division_id
                ));
            }
            if !division_keys.insert((division.sex.clone(), division.category.clone())) {
                report.errors.push(format!(
                    "Duplicate division for sex '{}' and category '{}'",
                    division.sex, division.category
                ));
            }
        }

        let mut athlete_ids = HashSet::new();
        let mut bibs = HashSet::new();
        let mut athletes_per_division: HashMap<Uuid, usize> = HashMap::new();
        for athlete in &document.athletes {
            let label = format!("{} {}", athlete.bib, athlete.name());

            if athlete.bib.is_empty() {
                report
                    .errors
                    .push(format!("Athlete '{}' has empty bib", athlete.name()));
            } else if !bibs.insert(&athlete.bib) {
                report
                    .errors
                    .push(format!("Duplicate bib: '{}'", athlete.bib));
            }
            if athlete.first_name.is_empty() && athlete.last_name.is_empty() {
                report
                    .errors
                    .push(format!("Athlete '{}' has no name", label));
            }
            if !athlete_ids.insert(athlete.athlete_id) {
                report
                    .errors
                    .push(format!("Duplicate athlete id: {}", athlete.athlete_id));
            }
            if division_ids.contains(&athlete.division_id) {
                *athletes_per_division.entry(athlete.division_id).or_insert(0) += 1;
            } else {
                report.errors.push(format!(
                    "Athlete '{}' references unknown division {}",
                    label, athlete.division_id
                ));
            }
        }

        for division in &document.divisions {
            if athletes_per_division
                .get(&division.division_id)
                .copied()
                .unwrap_or(0)
                == 0
            {
                report.warnings.push(format!(
                    "Division '{}' has no athletes",
                    division.display_name
                ));
            }
        }

        if document.events.is_empty() {
            report
                .errors
                .push("At least one event is required".to_string());
        }

        let mut event_numbers = HashMap::new();
        for event in &document.events {
            if event.name.is_empty() {
                report
                    .errors
                    .push(format!("Event {} has empty name", event.number));
            }
            if event.number < 1 {
                report.errors.push(format!(
                    "Event '{}' has invalid number: {}. Number must be >= 1",
                    event.name, event.number
                ));
            }
            if event_numbers.insert(event.event_id, event.number).is_some() {
                report
                    .errors
                    .push(format!("Duplicate event id: {}", event.event_id));
            }
            if event.kind == EventKind::Time && event.cap_seconds == 0 {
                report.warnings.push(format!(
                    "Time event '{}' has no cap configured",
                    event.name
                ));
            }
        }

        if document.parts.is_empty() {
            report
                .errors
                .push("At least one event part is required".to_string());
        }

        let mut part_labels: HashMap<Uuid, String> = HashMap::new();
        for part in &document.parts {
            match event_numbers.get(&part.event_id) {
                Some(number) => {
                    part_labels.insert(part.part_id, part.label(*number));
                }
                None => {
                    report.errors.push(format!(
                        "Part '{}' references unknown event {}",
                        part.name, part.event_id
                    ));
                }
            }
            if part.name.is_empty() {
                report
                    .errors
                    .push(format!("Part {} has empty name", part.part_id));
            }
            if part.order < 1 {
                report.errors.push(format!(
                    "Part '{}' has invalid order: {}. Order must be >= 1",
                    part.name, part.order
                ));
            }
        }

        let mut seen_scores = HashSet::new();
        for score in &document.scores {
            let part_label = match part_labels.get(&score.part_id) {
                Some(label) => label.clone(),
                None => {
                    report.errors.push(format!(
                        "Score for athlete {} references unknown part {}",
                        score.athlete_id, score.part_id
                    ));
                    continue;
                }
            };
            if !athlete_ids.contains(&score.athlete_id) {
                report.errors.push(format!(
                    "Score on {} references unknown athlete {}",
                    part_label, score.athlete_id
                ));
                continue;
            }
            if !seen_scores.insert((score.part_id, score.athlete_id)) {
                report.warnings.push(format!(
                    "Duplicate score for athlete {} on {}; the last entry wins",
                    score.athlete_id, part_label
                ));
            }
            if score.status == ScoreStatus::Pending {
                report.warnings.push(format!(
                    "Score for athlete {} on {} is pending and will not be ranked",
                    score.athlete_id, part_label
                ));
            }
            if score.time_seconds.is_some_and(|t| t.is_sign_negative()) {
                report.errors.push(format!(
                    "Score for athlete {} on {}: negative time",
                    score.athlete_id, part_label
                ));
            }
            if score.reps.is_some_and(|r| r < 0) {
                report.errors.push(format!(
                    "Score for athlete {} on {}: negative reps",
                    score.athlete_id, part_label
                ));
            }
            if score.weight.is_some_and(|w| w.is_sign_negative()) {
                report.errors.push(format!(
                    "Score for athlete {} on {}: negative weight",
                    score.athlete_id, part_label
                ));
            }
            if score.penalty_seconds.is_sign_negative() || score.penalty_reps < 0 {
                report.errors.push(format!(
                    "Score for athlete {} on {}: negative penalty",
                    score.athlete_id, part_label
                ));
            }
        }

        let mut heat_lanes: HashMap<Uuid, i16> = HashMap::new();
        let mut heat_slots = HashSet::new();
        for heat in &document.heats {
            if !event_numbers.contains_key(&heat.event_id) {
                report.errors.push(format!(
                    "Heat {} references unknown event {}",
                    heat.number, heat.event_id
                ));
            }
            if !division_ids.contains(&heat.division_id) {
                report.errors.push(format!(
                    "Heat {} references unknown division {}",
                    heat.number, heat.division_id
                ));
            }
            if heat.lane_count < 1 {
                report.errors.push(format!(
                    "Heat {} has invalid lane_count: {}",
                    heat.number, heat.lane_count
                ));
            }
            if !heat_slots.insert((heat.event_id, heat.division_id, heat.number)) {
                report.errors.push(format!(
                    "Duplicate heat {} for event {} and division {}",
                    heat.number, heat.event_id, heat.division_id
                ));
            }
            heat_lanes.insert(heat.heat_id, heat.lane_count);
        }

        let mut taken_lanes = HashSet::new();
        for assignment in &document.lane_assignments {
            let lane_count = match heat_lanes.get(&assignment.heat_id) {
                Some(count) => *count,
                None => {
                    report.errors.push(format!(
                        "Lane assignment references unknown heat {}",
                        assignment.heat_id
                    ));
                    continue;
                }
            };
            if !athlete_ids.contains(&assignment.athlete_id) {
                report.errors.push(format!(
                    "Lane assignment in heat {} references unknown athlete {}",
                    assignment.heat_id, assignment.athlete_id
                ));
            }
            if assignment.lane < 1 {
                report.errors.push(format!(
                    "Invalid lane {} in heat {}",
                    assignment.lane, assignment.heat_id
                ));
            } else if assignment.lane > lane_count {
                report.warnings.push(format!(
                    "Lane {} in heat {} exceeds lane_count {}",
                    assignment.lane, assignment.heat_id, lane_count
                ));
            }
            if !taken_lanes.insert((assignment.heat_id, assignment.lane)) {
                report.errors.push(format!(
                    "Lane {} in heat {} is assigned twice",
                    assignment.lane, assignment.heat_id
                ));
            }
        }

        let mut spec_keys = HashSet::new();
        for spec in &document.part_specs {
            if !part_labels.contains_key(&spec.part_id) {
                report.errors.push(format!(
                    "Part spec references unknown part {}",
                    spec.part_id
                ));
            }
            if !division_ids.contains(&spec.division_id) {
                report.errors.push(format!(
                    "Part spec references unknown division {}",
                    spec.division_id
                ));
            }
            if !spec_keys.insert((spec.part_id, spec.division_id)) {
                report.errors.push(format!(
                    "Duplicate part spec for part {} and division {}",
                    spec.part_id, spec.division_id
                ));
            }
        }

        if let Some(table) = &document.points_table {
            if table.is_empty() {
                report
                    .errors
                    .push("Points table must have at least one place".to_string());
            }
            if !table.is_descending() {
                report
                    .warnings
                    .push("Points table is not descending by place".to_string());
            }
        }

        if !report.errors.is_empty() {
            Err(ScoringError::Validation(format!(
                "{} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Score;

    fn validation_message(document: &SnapshotDocument) -> String {
        match SnapshotValidator::validate(document) {
            Err(ScoringError::Validation(message)) => message,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_document_passes_with_known_warnings() {
        let document = fixtures::demo_document();
        let report = SnapshotValidator::validate(&document).unwrap();

        assert!(report.errors.is_empty());
        // The seed carries one corrected score and one pending score.
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("the last entry wins"));
        assert!(report.warnings[1].contains("pending"));
    }

    #[test]
    fn test_rejects_wrong_format_version() {
        let mut document = fixtures::demo_document();
        document.format_version = "0.9.0".to_string();

        let message = validation_message(&document);
        assert!(message.starts_with("1 error(s):"));
        assert!(message.contains("Unsupported format version: 0.9.0"));
    }

    #[test]
    fn test_rejects_duplicate_bib() {
        let mut document = fixtures::demo_document();
        document.athletes[1].bib = document.athletes[0].bib.clone();

        let message = validation_message(&document);
        assert!(message.contains("Duplicate bib: 'SCM1'"));
    }

    #[test]
    fn test_rejects_end_date_before_start_date() {
        let mut document = fixtures::demo_document();
        document.competition.end_date = document.competition.start_date
            - chrono::Duration::days(1);

        let message = validation_message(&document);
        assert!(message.contains("end_date must be >= start_date"));
    }

    #[test]
    fn test_rejects_unknown_score_references() {
        let mut document = fixtures::demo_document();
        let athlete = document.athletes[0].athlete_id;
        let part = document.parts[0].part_id;
        let entered = document.scores[0].created_at;
        document
            .scores
            .push(Score::blank(Uuid::new_v4(), athlete, entered));
        document
            .scores
            .push(Score::blank(part, Uuid::new_v4(), entered));

        let message = validation_message(&document);
        assert!(message.contains("unknown part"));
        assert!(message.contains("unknown athlete"));
    }

    #[test]
    fn test_rejects_negative_metrics() {
        let mut document = fixtures::demo_document();
        document.scores[0].penalty_reps = -3;

        let message = validation_message(&document);
        assert!(message.contains("negative penalty"));
    }

    #[test]
    fn test_rejects_double_booked_lane() {
        let mut document = fixtures::demo_document();
        // Lanes 1 and 2 of the first heat collide.
        document.lane_assignments[1].lane = document.lane_assignments[0].lane;

        let message = validation_message(&document);
        assert!(message.contains("is assigned twice"));
    }

    #[test]
    fn test_warns_on_lane_beyond_lane_count() {
        let mut document = fixtures::demo_document();
        document.lane_assignments[5].lane = 99;

        let report = SnapshotValidator::validate(&document).unwrap();
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("exceeds lane_count"))
        );
    }

    #[test]
    fn test_rejects_empty_points_table() {
        let mut document = fixtures::demo_document();
        document.points_table = Some(crate::PointsTable::new(Vec::new()));

        let message = validation_message(&document);
        assert!(message.contains("Points table"));
    }
}
