pub mod document;
pub mod validator;

pub use document::{CompetitionInfo, FORMAT_VERSION, SnapshotDocument};
pub use validator::{SnapshotValidator, ValidationReport};

use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::brief::PartBrief;
use crate::models::{
    Athlete, Division, Event, EventPart, Heat, LaneAssignment, PartDivisionSpec, Score,
    ScoreStatus,
};
use crate::services::points::PointsTable;

/// Immutable, validated competition state the ranking services read.
///
/// All collections are frozen in canonical order at construction: divisions
/// by sort order, events by number, parts by event number then part order,
/// heats by start time. Scores keep their entry order so that the latest
/// entry for a (part, athlete) pair wins.
#[derive(Debug, Clone)]
pub struct Snapshot {
    competition: CompetitionInfo,
    divisions: Vec<Division>,
    athletes: Vec<Athlete>,
    events: Vec<Event>,
    parts: Vec<EventPart>,
    scores: Vec<Score>,
    heats: Vec<Heat>,
    lane_assignments: Vec<LaneAssignment>,
    part_specs: Vec<PartDivisionSpec>,
    points_table: PointsTable,
}

impl Snapshot {
    pub(crate) fn from_document(document: SnapshotDocument) -> Self {
        let SnapshotDocument {
            competition,
            mut divisions,
            athletes,
            mut events,
            mut parts,
            scores,
            mut heats,
            mut lane_assignments,
            part_specs,
            points_table,
            ..
        } = document;

        divisions.sort_by_key(|d| d.sort_order);
        events.sort_by_key(|e| e.number);

        let event_numbers: HashMap<Uuid, i16> =
            events.iter().map(|e| (e.event_id, e.number)).collect();
        parts.sort_by_key(|p| {
            (
                event_numbers.get(&p.event_id).copied().unwrap_or(i16::MAX),
                p.order,
            )
        });

        heats.sort_by_key(|h| h.start_time);
        lane_assignments.sort_by_key(|l| (l.heat_id, l.lane));

        Self {
            competition,
            divisions,
            athletes,
            events,
            parts,
            scores,
            heats,
            lane_assignments,
            part_specs,
            points_table: points_table.unwrap_or_default(),
        }
    }

    pub fn competition(&self) -> &CompetitionInfo {
        &self.competition
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn division(&self, division_id: Uuid) -> Option<&Division> {
        self.divisions.iter().find(|d| d.division_id == division_id)
    }

    pub fn division_by(&self, sex: &str, category: &str) -> Option<&Division> {
        self.divisions.iter().find(|d| {
            d.sex.eq_ignore_ascii_case(sex) && d.category.eq_ignore_ascii_case(category)
        })
    }

    pub fn athlete(&self, athlete_id: Uuid) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.athlete_id == athlete_id)
    }

    pub fn athlete_by_bib(&self, bib: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.bib == bib)
    }

    /// Active roster of a division in last-name, first-name order.
    pub fn active_athletes(&self, division_id: Uuid) -> Vec<&Athlete> {
        let mut roster: Vec<&Athlete> = self
            .athletes
            .iter()
            .filter(|a| a.is_active && a.division_id == division_id)
            .collect();
        roster.sort_by_key(|a| a.name_key());
        roster
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, event_id: Uuid) -> Option<&Event> {
        self.events.iter().find(|e| e.event_id == event_id)
    }

    pub fn event_by_number(&self, number: i16) -> Option<&Event> {
        self.events.iter().find(|e| e.number == number)
    }

    pub fn parts(&self) -> &[EventPart] {
        &self.parts
    }

    pub fn part(&self, part_id: Uuid) -> Option<&EventPart> {
        self.parts.iter().find(|p| p.part_id == part_id)
    }

    pub fn parts_for_event(&self, event_id: Uuid) -> Vec<&EventPart> {
        self.parts
            .iter()
            .filter(|p| p.event_id == event_id)
            .collect()
    }

    /// Parts that feed the overall standings, in competition order.
    pub fn counting_parts(&self) -> Vec<&EventPart> {
        self.parts.iter().filter(|p| p.counts_as_event).collect()
    }

    /// Short label such as "E2A" for headings and score sheets.
    pub fn part_label(&self, part: &EventPart) -> String {
        match self.event(part.event_id) {
            Some(event) => part.label(event.number),
            None => part.name.clone(),
        }
    }

    /// Approved scores of a part keyed by athlete. Later entries replace
    /// earlier ones for the same athlete.
    pub fn scores_for_part(&self, part_id: Uuid) -> HashMap<Uuid, &Score> {
        let mut by_athlete = HashMap::new();
        for score in &self.scores {
            if score.part_id == part_id && score.status == ScoreStatus::Approved {
                by_athlete.insert(score.athlete_id, score);
            }
        }
        by_athlete
    }

    /// Latest score of an athlete per part, pending included, in part order.
    pub fn scores_for_athlete(&self, athlete_id: Uuid) -> Vec<(&EventPart, &Score)> {
        let mut by_part: HashMap<Uuid, &Score> = HashMap::new();
        for score in &self.scores {
            if score.athlete_id == athlete_id {
                by_part.insert(score.part_id, score);
            }
        }
        self.parts
            .iter()
            .filter_map(|part| by_part.get(&part.part_id).map(|score| (part, *score)))
            .collect()
    }

    pub fn heats(&self) -> &[Heat] {
        &self.heats
    }

    pub fn heats_for_event(&self, event_id: Uuid) -> Vec<&Heat> {
        self.heats
            .iter()
            .filter(|h| h.event_id == event_id)
            .collect()
    }

    pub fn lanes_for_heat(&self, heat_id: Uuid) -> Vec<&LaneAssignment> {
        self.lane_assignments
            .iter()
            .filter(|l| l.heat_id == heat_id)
            .collect()
    }

    /// Heats an athlete runs in, with their lane, ordered by start time.
    pub fn lanes_for_athlete(&self, athlete_id: Uuid) -> Vec<(&Heat, i16)> {
        let mut slots: Vec<(&Heat, i16)> = self
            .lane_assignments
            .iter()
            .filter(|l| l.athlete_id == athlete_id)
            .filter_map(|l| {
                self.heats
                    .iter()
                    .find(|h| h.heat_id == l.heat_id)
                    .map(|h| (h, l.lane))
            })
            .collect();
        slots.sort_by_key(|(heat, _)| heat.start_time);
        slots
    }

    pub fn part_spec(&self, part_id: Uuid, division_id: Uuid) -> Option<&PartDivisionSpec> {
        self.part_specs
            .iter()
            .find(|s| s.part_id == part_id && s.division_id == division_id)
    }

    /// Effective standards for a part in a division: the per-division cap
    /// override when present and non-zero, the event cap otherwise.
    pub fn part_brief(&self, part_id: Uuid, division_id: Uuid) -> Option<PartBrief> {
        let part = self.part(part_id)?;
        let event = self.event(part.event_id)?;
        self.division(division_id)?;
        let spec = self.part_spec(part_id, division_id);
        Some(PartBrief {
            part_id,
            division_id,
            cap_seconds: spec
                .and_then(|s| s.cap_seconds)
                .filter(|cap| *cap > 0)
                .unwrap_or(event.cap_seconds),
            tiebreak_label: spec
                .and_then(|s| s.tiebreak_label.clone())
                .filter(|label| !label.is_empty()),
        })
    }

    pub fn points_table(&self) -> &PointsTable {
        &self.points_table
    }
}
